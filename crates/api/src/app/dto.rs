use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Success envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

pub fn ok<T: Serialize>(data: T, message: &str) -> axum::response::Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

pub fn created<T: Serialize>(data: T, message: &str) -> axum::response::Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data, message))).into_response()
}

pub fn done(message: &str) -> axum::response::Response {
    (StatusCode::OK, Json(ApiResponse::empty(message))).into_response()
}

// -------------------------
// Query-string DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated item ids.
    pub ids: String,
}

impl CompareQuery {
    pub fn item_ids(&self) -> Vec<String> {
        self.ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
