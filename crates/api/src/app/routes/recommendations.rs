use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Router,
};

use crate::app::dto::{self, LimitQuery};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/:id/recommendations", get(recommendations))
        .route("/:id/similar", get(similar_items))
        .route("/:id/frequently-bought-together", get(frequently_bought_together))
        .route("/:id/also-viewed", get(also_viewed))
}

pub async fn recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let response = services
        .recommendations
        .similar_items(&id, query.limit.unwrap_or(10));
    dto::ok(response, "Recommendations retrieved successfully")
}

pub async fn similar_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let response = services
        .recommendations
        .similar_items(&id, query.limit.unwrap_or(10));
    dto::ok(response, "Similar items retrieved successfully")
}

pub async fn frequently_bought_together(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let response = services
        .recommendations
        .frequently_bought_together(&id, query.limit.unwrap_or(5));
    dto::ok(response, "Frequently bought together items retrieved successfully")
}

pub async fn also_viewed(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let response = services
        .recommendations
        .also_viewed(&id, query.limit.unwrap_or(8));
    dto::ok(response, "Also viewed items retrieved successfully")
}
