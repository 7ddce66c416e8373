use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;

use catalog_application::persons::{PersonRequest, DEFAULT_PERSON_PAGE};

use crate::app::dto::{self, NameQuery, PageQuery};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_persons).post(create_person))
        .route("/search", get(search_persons))
        .route("/status/:status", get(list_persons_by_status))
        .route("/document/:type/:number", get(get_person_by_document))
        .route(
            "/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/:id/activate", patch(activate_person))
        .route("/:id/deactivate", patch(deactivate_person))
}

pub async fn create_person(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<PersonRequest>,
) -> axum::response::Response {
    match services.persons.create(body, Utc::now()) {
        Ok(person) => dto::created(person, "Person created successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<PersonRequest>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.persons.update(id, body, Utc::now()) {
        Ok(person) => dto::ok(person, "Person updated successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.persons.get_by_id(id, Utc::now()) {
        Ok(person) => dto::ok(person, "Person retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_person_by_document(
    Extension(services): Extension<Arc<AppServices>>,
    Path((document_type, document_number)): Path<(String, String)>,
) -> axum::response::Response {
    match services
        .persons
        .get_by_document(&document_type, &document_number, Utc::now())
    {
        Ok(person) => dto::ok(person, "Person retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_persons(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<PageQuery>,
) -> axum::response::Response {
    let offset = page.offset.unwrap_or(0);
    let limit = page.limit.unwrap_or(DEFAULT_PERSON_PAGE);

    match services.persons.list(offset, limit, Utc::now()) {
        Ok(persons) => dto::ok(persons, "Persons retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn search_persons(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<NameQuery>,
) -> axum::response::Response {
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_PERSON_PAGE);

    match services
        .persons
        .search_by_name(&query.name, offset, limit, Utc::now())
    {
        Ok(persons) => dto::ok(persons, "Search completed successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_persons_by_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(status): Path<String>,
    Query(page): Query<PageQuery>,
) -> axum::response::Response {
    let offset = page.offset.unwrap_or(0);
    let limit = page.limit.unwrap_or(DEFAULT_PERSON_PAGE);

    match services
        .persons
        .list_by_status(&status, offset, limit, Utc::now())
    {
        Ok(persons) => dto::ok(persons, "Persons retrieved successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn deactivate_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.persons.deactivate(id, Utc::now()) {
        Ok(()) => dto::done("Person deactivated successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn activate_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.persons.activate(id, Utc::now()) {
        Ok(()) => dto::done("Person activated successfully"),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.persons.delete(id) {
        Ok(()) => dto::done("Person deleted permanently"),
        Err(e) => errors::domain_error_to_response(e),
    }
}
