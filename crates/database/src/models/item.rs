//! 商品数据库模型
//!
//! 定义商品相关的数据库模型结构体

/// 商品信息结构体
///
/// `id` 在插入之前为 `None`，由数据库在插入时分配且只分配一次。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    pub id: Option<i64>,
    pub item_name: String,
    pub price: i32,
    pub quantity: i32,
}

impl Item {
    /// 创建一个尚未持久化的商品
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: item_name.into(),
            price,
            quantity,
        }
    }

    /// 使用更新参数覆盖商品的可变字段（名称、价格、数量）
    pub fn apply(&mut self, update: &ItemUpdate) {
        self.item_name.clone_from(&update.item_name);
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

/// 商品更新参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub item_name: String,
    pub price: i32,
    pub quantity: i32,
}

/// 商品搜索条件
///
/// - `item_name`: 商品名称（模糊搜索），只有包含非空白字符时才生效
/// - `max_price`: 最高价格（包含）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSearchCondition {
    pub item_name: Option<String>,
    pub max_price: Option<i32>,
}

impl ItemSearchCondition {
    pub fn new(item_name: Option<String>, max_price: Option<i32>) -> Self {
        Self { item_name, max_price }
    }

    /// 返回有效的名称过滤条件
    ///
    /// `None`、空字符串以及只包含空白字符的名称都视为没有过滤条件
    pub fn name_filter(&self) -> Option<&str> {
        self.item_name
            .as_deref()
            .filter(|name| name.chars().any(|c| !c.is_whitespace()))
    }

    /// 是否没有任何过滤条件
    pub fn is_empty(&self) -> bool {
        self.name_filter().is_none() && self.max_price.is_none()
    }
}
