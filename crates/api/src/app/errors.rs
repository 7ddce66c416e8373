use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;
use catalog_items::SellerId;
use catalog_persons::PersonId;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let code = err.code();
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, code, msg),
        DomainError::InvariantViolation(msg) => json_error(StatusCode::BAD_REQUEST, code, msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, code, msg),
        DomainError::NotActive(msg) => json_error(StatusCode::CONFLICT, code, msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, code, msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_seller_id(raw: &str) -> Result<SellerId, axum::response::Response> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DomainError::validation(format!("invalid seller id: {raw}")))
        .and_then(SellerId::new)
        .map_err(domain_error_to_response)
}

pub fn parse_person_id(raw: &str) -> Result<PersonId, axum::response::Response> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(PersonId::new(id)),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("invalid person id: {raw}"),
        )),
    }
}
