use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Router,
};

use catalog_items::SearchRequest;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/search", get(search_items))
        .route("/compare", get(compare_items))
        .route("/:id", get(get_item_detail))
}

pub async fn get_item_detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.item_detail.get_item_detail(&id) {
        Ok(detail) => dto::ok(detail, "Item detail retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn search_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(request): Query<SearchRequest>,
) -> axum::response::Response {
    dto::ok(services.search.search(request), "Search completed successfully")
}

pub async fn compare_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CompareQuery>,
) -> axum::response::Response {
    match services.comparison.compare(&query.item_ids()) {
        Ok(comparison) => dto::ok(comparison, "Items compared successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}
