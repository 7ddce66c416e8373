//! Person CRM use cases over the command/query repository ports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use catalog_core::{validate, DomainError, DomainResult};
use catalog_items::MAX_PAGE_SIZE;
use catalog_persons::{
    NewPerson, Person, PersonCommandRepository, PersonDetails, PersonId, PersonQueryRepository,
    PersonStatus,
};

/// Page size used by person listings when the caller sends none.
pub const DEFAULT_PERSON_PAGE: usize = 20;

/// Create/update payload. On update the document and birth date are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRequest {
    pub document_type: String,
    pub document_number: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl PersonRequest {
    fn into_new_person(self) -> NewPerson {
        NewPerson {
            document_type: self.document_type,
            document_number: self.document_number,
            first_name: self.first_name,
            second_name: self.second_name,
            first_last_name: self.first_last_name,
            second_last_name: self.second_last_name,
            birth_date: self.birth_date,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            city: self.city,
            country: self.country,
        }
    }

    fn into_details(self) -> PersonDetails {
        PersonDetails {
            first_name: self.first_name,
            second_name: self.second_name,
            first_last_name: self.first_last_name,
            second_last_name: self.second_last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            city: self.city,
            country: self.country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonResponse {
    pub id: Option<u64>,
    pub document_type: String,
    pub document_number: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_last_name: String,
    pub second_last_name: Option<String>,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub age: i32,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl PersonResponse {
    pub fn from_person(person: &Person, now: DateTime<Utc>) -> Self {
        Self {
            id: person.id().map(|id| id.value()),
            document_type: person.document_type().to_string(),
            document_number: person.document_number().to_string(),
            first_name: person.first_name().to_string(),
            second_name: person.second_name().map(str::to_string),
            first_last_name: person.first_last_name().to_string(),
            second_last_name: person.second_last_name().map(str::to_string),
            full_name: person.full_name(),
            birth_date: person.birth_date(),
            age: person.age(now),
            email: person.email().to_string(),
            phone_number: person.phone_number().to_string(),
            address: person.address().map(str::to_string),
            city: person.city().map(str::to_string),
            country: person.country().map(str::to_string),
            status: person.status().code().to_string(),
            created_date: person.created_date(),
            updated_date: person.updated_date(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonListResponse {
    pub persons: Vec<PersonResponse>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Clone)]
pub struct PersonService<C, Q> {
    commands: C,
    queries: Q,
}

impl<C, Q> PersonService<C, Q>
where
    C: PersonCommandRepository,
    Q: PersonQueryRepository,
{
    pub fn new(commands: C, queries: Q) -> Self {
        Self { commands, queries }
    }

    /// Register a person; document and email must be unused.
    #[instrument(skip(self, request))]
    pub fn create(&self, request: PersonRequest, now: DateTime<Utc>) -> DomainResult<PersonResponse> {
        let person = Person::create(request.into_new_person(), now)?;

        if self
            .queries
            .exists_by_document(person.document_type(), person.document_number())
        {
            return Err(DomainError::conflict(format!(
                "person with document {} {} already exists",
                person.document_type(),
                person.document_number()
            )));
        }
        if self.queries.exists_by_email(person.email()) {
            return Err(DomainError::conflict(format!(
                "person with email {} already exists",
                person.email()
            )));
        }

        let saved = self.commands.save(person)?;
        tracing::info!(person_id = ?saved.id(), "person created");
        Ok(PersonResponse::from_person(&saved, now))
    }

    /// Replace the mutable details; the email may not belong to someone else.
    #[instrument(skip(self, request), fields(person_id = %id))]
    pub fn update(&self, id: PersonId, request: PersonRequest, now: DateTime<Utc>) -> DomainResult<PersonResponse> {
        let person = self.find(id)?;
        let updated = person.update(request.into_details(), now)?;

        if let Some(owner) = self.queries.find_by_email(updated.email()) {
            if owner.id() != Some(id) {
                return Err(DomainError::conflict(format!(
                    "person with email {} already exists",
                    updated.email()
                )));
            }
        }

        let saved = self.commands.update(updated)?;
        Ok(PersonResponse::from_person(&saved, now))
    }

    pub fn get_by_id(&self, id: PersonId, now: DateTime<Utc>) -> DomainResult<PersonResponse> {
        let person = self.find(id)?;
        Ok(PersonResponse::from_person(&person, now))
    }

    pub fn get_by_document(
        &self,
        document_type: &str,
        document_number: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<PersonResponse> {
        validate::not_blank(document_type, "document type")?;
        validate::not_blank(document_number, "document number")?;

        let document_type = document_type.trim().to_uppercase();
        let document_number = document_number.trim();
        let person = self
            .queries
            .find_by_document(&document_type, document_number)
            .ok_or_else(|| {
                DomainError::not_found(format!("person with document {document_type} {document_number}"))
            })?;
        Ok(PersonResponse::from_person(&person, now))
    }

    pub fn list(&self, offset: usize, limit: usize, now: DateTime<Utc>) -> DomainResult<PersonListResponse> {
        validate_page(limit)?;
        let persons = self.queries.find_all(offset, limit);
        Ok(self.page(&persons, self.queries.count(), offset, limit, now))
    }

    /// Total is the size of the returned page.
    pub fn search_by_name(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
        now: DateTime<Utc>,
    ) -> DomainResult<PersonListResponse> {
        validate::not_blank(name, "name")?;
        validate_page(limit)?;
        let persons = self.queries.find_by_name(name.trim(), offset, limit);
        Ok(self.page(&persons, persons.len(), offset, limit, now))
    }

    pub fn list_by_status(
        &self,
        status: &str,
        offset: usize,
        limit: usize,
        now: DateTime<Utc>,
    ) -> DomainResult<PersonListResponse> {
        validate::not_blank(status, "status")?;
        let status = PersonStatus::parse(status)?;
        validate_page(limit)?;
        let persons = self.queries.find_by_status(status, offset, limit);
        Ok(self.page(&persons, self.queries.count_by_status(status), offset, limit, now))
    }

    #[instrument(skip(self), fields(person_id = %id))]
    pub fn deactivate(&self, id: PersonId, now: DateTime<Utc>) -> DomainResult<()> {
        let person = self.find(id)?.deactivate(now)?;
        self.commands.update(person)?;
        Ok(())
    }

    #[instrument(skip(self), fields(person_id = %id))]
    pub fn activate(&self, id: PersonId, now: DateTime<Utc>) -> DomainResult<()> {
        let person = self.find(id)?.activate(now)?;
        self.commands.update(person)?;
        Ok(())
    }

    #[instrument(skip(self), fields(person_id = %id))]
    pub fn delete(&self, id: PersonId) -> DomainResult<()> {
        if !self.commands.delete(id) {
            return Err(not_found(id));
        }
        Ok(())
    }

    fn find(&self, id: PersonId) -> DomainResult<Person> {
        self.queries.find_by_id(id).ok_or_else(|| not_found(id))
    }

    fn page(
        &self,
        persons: &[Person],
        total: usize,
        offset: usize,
        limit: usize,
        now: DateTime<Utc>,
    ) -> PersonListResponse {
        PersonListResponse {
            persons: persons
                .iter()
                .map(|p| PersonResponse::from_person(p, now))
                .collect(),
            total,
            offset,
            limit,
        }
    }
}

fn not_found(id: PersonId) -> DomainError {
    DomainError::not_found(format!("person {id}"))
}

fn validate_page(limit: usize) -> DomainResult<()> {
    if limit == 0 {
        return Err(DomainError::validation("limit must be greater than 0"));
    }
    if limit > MAX_PAGE_SIZE {
        return Err(DomainError::validation(format!(
            "limit cannot be greater than {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}
