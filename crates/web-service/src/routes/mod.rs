//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::items::__path_create_item;
use crate::routes::items::__path_find_items;
use crate::routes::items::__path_get_item;
use crate::routes::items::__path_update_item;
use crate::routes::items::{create_item, find_items, get_item, update_item};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod items;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放商品服务以及当前使用的仓库实现。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口，需要拆开定义。
/// `get_item` 与 `update_item` 是同一路径的不同方法，可以放在一起。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(find_items))
        .routes(routes!(create_item))
        .routes(routes!(get_item, update_item))
        .routes(routes!(health_check))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "item-service", description = r#"
商品管理后端，覆盖场景：

- 商品的新增、修改、查询、条件搜索
- 多种可互换的持久化实现（位置参数SQL / 命名参数SQL / ORM / 内存）
- OpenAPI文档
            "#)
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
