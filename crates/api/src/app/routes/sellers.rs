use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    routing::get,
    Router,
};

use crate::app::dto::{self, LimitQuery, PageQuery};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/top-rated", get(top_rated_sellers))
        .route("/:id/profile", get(seller_profile))
        .route("/:id/items", get(seller_items))
        .route("/:id/reputation-details", get(seller_reputation_details))
}

pub async fn seller_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let seller_id = match errors::parse_seller_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.sellers.seller_profile(seller_id) {
        Ok(profile) => dto::ok(profile, "Seller profile retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn seller_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(page): Query<PageQuery>,
) -> axum::response::Response {
    let seller_id = match errors::parse_seller_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let items = services.sellers.seller_items(
        seller_id,
        page.limit.unwrap_or(20),
        page.offset.unwrap_or(0),
    );
    dto::ok(items, "Seller items retrieved successfully")
}

pub async fn seller_reputation_details(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let seller_id = match errors::parse_seller_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.sellers.seller_reputation_details(seller_id) {
        Ok(details) => dto::ok(details, "Seller reputation details retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn top_rated_sellers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<LimitQuery>,
) -> axum::response::Response {
    let sellers = services.sellers.top_rated_sellers(query.limit.unwrap_or(10));
    dto::ok(sellers, "Top rated sellers retrieved successfully")
}
