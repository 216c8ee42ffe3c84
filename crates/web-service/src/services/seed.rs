//! 测试数据初始化
//!
//! 配置 `SEED_TEST_DATA=true` 时，启动后写入两条示例商品，方便本地调试

use crate::services::traits::ItemServiceTrait;
use database::{DatabaseResult, Item};
use tracing::info;

/// 写入示例商品 `itemA`、`itemB`
pub async fn seed_test_data(service: &dyn ItemServiceTrait) -> DatabaseResult<()> {
    info!("🌱 初始化测试数据");

    service.save(Item::new("itemA", 10000, 10)).await?;
    service.save(Item::new("itemB", 20000, 20)).await?;

    Ok(())
}
