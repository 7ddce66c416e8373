use std::sync::Arc;

use catalog_core::DomainResult;

use crate::person::{Person, PersonId, PersonStatus};

/// Write side of person persistence.
pub trait PersonCommandRepository: Send + Sync {
    /// Store a new person, returning it with its assigned id.
    ///
    /// `Conflict` when the document or email is already taken; the check and
    /// the insert are atomic.
    fn save(&self, person: Person) -> DomainResult<Person>;

    /// Replace a stored person. `NotFound` for an unknown id, `Conflict` when
    /// the email belongs to someone else.
    fn update(&self, person: Person) -> DomainResult<Person>;

    /// Returns whether a person was removed.
    fn delete(&self, id: PersonId) -> bool;
}

/// Read side of person persistence. Listings are ordered by id.
pub trait PersonQueryRepository: Send + Sync {
    fn find_by_id(&self, id: PersonId) -> Option<Person>;
    fn find_by_document(&self, document_type: &str, document_number: &str) -> Option<Person>;
    fn find_by_email(&self, email: &str) -> Option<Person>;
    fn find_all(&self, offset: usize, limit: usize) -> Vec<Person>;
    fn find_by_status(&self, status: PersonStatus, offset: usize, limit: usize) -> Vec<Person>;
    /// Case-insensitive match on first name or first last name.
    fn find_by_name(&self, name: &str, offset: usize, limit: usize) -> Vec<Person>;
    fn count(&self) -> usize;
    fn count_by_status(&self, status: PersonStatus) -> usize;

    fn exists_by_document(&self, document_type: &str, document_number: &str) -> bool {
        self.find_by_document(document_type, document_number).is_some()
    }

    fn exists_by_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }
}

impl<R> PersonCommandRepository for Arc<R>
where
    R: PersonCommandRepository + ?Sized,
{
    fn save(&self, person: Person) -> DomainResult<Person> {
        (**self).save(person)
    }

    fn update(&self, person: Person) -> DomainResult<Person> {
        (**self).update(person)
    }

    fn delete(&self, id: PersonId) -> bool {
        (**self).delete(id)
    }
}

impl<R> PersonQueryRepository for Arc<R>
where
    R: PersonQueryRepository + ?Sized,
{
    fn find_by_id(&self, id: PersonId) -> Option<Person> {
        (**self).find_by_id(id)
    }

    fn find_by_document(&self, document_type: &str, document_number: &str) -> Option<Person> {
        (**self).find_by_document(document_type, document_number)
    }

    fn find_by_email(&self, email: &str) -> Option<Person> {
        (**self).find_by_email(email)
    }

    fn find_all(&self, offset: usize, limit: usize) -> Vec<Person> {
        (**self).find_all(offset, limit)
    }

    fn find_by_status(&self, status: PersonStatus, offset: usize, limit: usize) -> Vec<Person> {
        (**self).find_by_status(status, offset, limit)
    }

    fn find_by_name(&self, name: &str, offset: usize, limit: usize) -> Vec<Person> {
        (**self).find_by_name(name, offset, limit)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn count_by_status(&self, status: PersonStatus) -> usize {
        (**self).count_by_status(status)
    }

    fn exists_by_document(&self, document_type: &str, document_number: &str) -> bool {
        (**self).exists_by_document(document_type, document_number)
    }

    fn exists_by_email(&self, email: &str) -> bool {
        (**self).exists_by_email(email)
    }
}
