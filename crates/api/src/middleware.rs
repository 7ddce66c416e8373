use axum::{
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Echo the caller's `x-request-id`, or mint a UUIDv7 one, on every response.
pub async fn request_id(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty())
        .cloned()
        .or_else(|| HeaderValue::from_str(&Uuid::now_v7().to_string()).ok());

    if let Some(id) = &id {
        req.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
        tracing::debug!(request_id = ?id, method = %req.method(), path = %req.uri().path(), "request");
    }

    let mut res = next.run(req).await;
    if let Some(id) = id {
        res.headers_mut().insert(REQUEST_ID_HEADER, id);
    }
    res
}
