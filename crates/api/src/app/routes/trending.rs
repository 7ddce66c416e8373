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
        .route("/best-sellers", get(best_sellers))
        .route("/most-viewed", get(most_viewed))
}

/// Mounted under `/categories`.
pub fn categories_router() -> Router {
    Router::new().route("/:id/trending", get(trending_by_category))
}

pub async fn best_sellers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let items = services.trending.best_sellers(query.limit.unwrap_or(20));
    dto::ok(items, "Best sellers retrieved successfully")
}

pub async fn most_viewed(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let items = services.trending.most_viewed(query.limit.unwrap_or(20));
    dto::ok(items, "Most viewed items retrieved successfully")
}

pub async fn trending_by_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let trending = services
        .trending
        .trending_by_category(&category_id, query.limit.unwrap_or(15));
    dto::ok(trending, "Trending items retrieved successfully")
}
