use axum::Router;

pub mod items;
pub mod persons;
pub mod recommendations;
pub mod sellers;
pub mod system;
pub mod trending;

/// Router for every catalog and CRM endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router().merge(recommendations::router()))
        .nest("/sellers", sellers::router())
        .nest("/trending", trending::router())
        .nest("/categories", trending::categories_router())
        .nest("/persons", persons::router())
}
