use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 搜索商品列表信息
///
/// - `item_name`、`max_price` 均为可选参数，都不传时返回全部商品
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct ItemSearch {
    #[schema(example = "item")]
    #[validate(length(max = 100))]
    /// 查询的商品名称（模糊搜索）
    pub item_name: Option<String>,

    #[schema(example = 15000)]
    #[validate(range(min = 0))]
    /// 最高价格（包含）
    pub max_price: Option<i32>,
}

impl From<ItemSearch> for database::ItemSearchCondition {
    fn from(search: ItemSearch) -> Self {
        database::ItemSearchCondition::new(search.item_name, search.max_price)
    }
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ItemCreate {
    #[schema(example = "itemA")]
    #[validate(length(min = 1, max = 100))]
    /// 商品名称
    pub item_name: String,

    #[schema(example = 10000)]
    #[validate(range(min = 0))]
    /// 价格
    pub price: i32,

    #[schema(example = 10)]
    #[validate(range(min = 0))]
    /// 数量
    pub quantity: i32,
}

impl From<ItemCreate> for database::Item {
    fn from(create: ItemCreate) -> Self {
        database::Item::new(create.item_name, create.price, create.quantity)
    }
}

/// 商品更新信息，三个字段都会被覆盖
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ItemUpdate {
    #[schema(example = "itemB")]
    #[validate(length(min = 1, max = 100))]
    /// 商品名称
    pub item_name: String,

    #[schema(example = 20000)]
    #[validate(range(min = 0))]
    /// 价格
    pub price: i32,

    #[schema(example = 20)]
    #[validate(range(min = 0))]
    /// 数量
    pub quantity: i32,
}

impl From<ItemUpdate> for database::ItemUpdate {
    fn from(update: ItemUpdate) -> Self {
        database::ItemUpdate {
            item_name: update.item_name,
            price: update.price,
            quantity: update.quantity,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq, Eq)]
pub struct ItemInfo {
    #[schema(example = 1)]
    /// 商品ID
    pub id: i64,

    #[schema(example = "itemA")]
    /// 商品名称
    pub item_name: String,

    #[schema(example = 10000)]
    /// 价格
    pub price: i32,

    #[schema(example = 10)]
    /// 数量
    pub quantity: i32,
}

/// 只有持久化后的商品才会返回给调用方，此时ID一定存在
impl From<database::Item> for ItemInfo {
    fn from(item: database::Item) -> Self {
        Self {
            id: item.id.unwrap_or_default(),
            item_name: item.item_name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}
