use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 封装符合json-api的单个返回对象
///
/// 具体参考：<https://jsonapi.org>
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct Reply<T> {
    pub data: T,
}

/// 封装符合json-api的列表对象
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ReplyList<T> {
    pub data: Vec<T>,

    #[schema(example = 2)]
    /// 查询结果总数
    pub total: usize,
}

impl<T> ReplyList<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}
