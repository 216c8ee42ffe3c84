//! 商品相关接口
//!

use crate::models::common::{Reply, ReplyList};
use crate::models::err::AppError;
use crate::models::items::{ItemCreate, ItemInfo, ItemSearch, ItemUpdate};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 根据查询参数搜索商品
///
/// 查询参数由 [`ItemSearch`] 决定，名称与最高价格都是可选参数：
/// - 名称为空或只包含空白字符时视为没有名称条件
/// - 两个条件都存在时同时生效
#[utoipa::path(post,
    path = "/search-items",
    tag = "items",
    request_body = ItemSearch,
    responses(
        (status = 200, description = "Search results", body = ReplyList<ItemInfo>)
    ),
)]
pub async fn find_items(
    State(state): State<AppState>,
    Json(search): Json<ItemSearch>,
) -> Result<Json<ReplyList<ItemInfo>>, AppError> {
    debug!("🔍 搜索商品 {:#?}", search);

    // 验证输入参数，确保有效性
    search.validate()?;

    let items = state.item_service.find_items(search.into()).await?;

    Ok(Json(ReplyList::new(items.into_iter().map(Into::into).collect())))
}

/// 创建商品
///
/// 商品ID由数据库在插入时分配
#[utoipa::path(post,
    path = "/items",
    tag = "items",
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Create item result", body = Reply<ItemInfo>)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<ItemCreate>,
) -> Result<Json<Reply<ItemInfo>>, AppError> {
    debug!("Creating item {:#?}", item);

    item.validate()?;

    let item = state.item_service.save(item.into()).await?;

    Ok(Json(Reply { data: item.into() }))
}

/// 查询指定商品信息
#[utoipa::path(get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "商品ID")),
    responses(
        (status = 200, description = "Item detail", body = Reply<ItemInfo>),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Reply<ItemInfo>>, AppError> {
    debug!("Getting item id {:#?}", item_id);

    let item = state
        .item_service
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item id={item_id}")))?;

    Ok(Json(Reply { data: item.into() }))
}

/// 更新商品信息
///
/// 根据用户指定的 `id` 和 修改信息 [`ItemUpdate`] 覆盖商品的名称、价格、数量。
#[utoipa::path(put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "商品ID")),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Updated item", body = Reply<ItemInfo>),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(info): Json<ItemUpdate>,
) -> Result<Json<Reply<ItemInfo>>, AppError> {
    debug!("Updating item {} with {:#?}", item_id, info);

    info.validate()?;

    let item = state.item_service.update(item_id, info.into()).await?;

    Ok(Json(Reply { data: item.into() }))
}
