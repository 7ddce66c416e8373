use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use catalog_core::{DomainError, DomainResult};
use catalog_persons::{
    Person, PersonCommandRepository, PersonId, PersonQueryRepository, PersonStatus,
};

/// Person store keyed by id; ids come from a process-wide sequence starting at 1.
///
/// Document and email are unique. Both are checked under the same write lock
/// that stores the person.
#[derive(Debug)]
pub struct InMemoryPersonRepository {
    inner: RwLock<BTreeMap<PersonId, Person>>,
    next_id: AtomicU64,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn select(&self, keep: impl Fn(&Person) -> bool, offset: usize, limit: usize) -> Vec<Person> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values()
            .filter(|person| keep(person))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn find_first(&self, keep: impl Fn(&Person) -> bool) -> Option<Person> {
        let map = self.inner.read().ok()?;
        map.values().find(|person| keep(person)).cloned()
    }
}

/// Conflict when another stored person (not `own_id`) holds the document or email.
fn ensure_unique(
    map: &BTreeMap<PersonId, Person>,
    person: &Person,
    own_id: Option<PersonId>,
) -> DomainResult<()> {
    let others = map.values().filter(|p| p.id() != own_id);
    for other in others {
        if other.document_type().eq_ignore_ascii_case(person.document_type())
            && other.document_number() == person.document_number()
        {
            return Err(DomainError::conflict(format!(
                "person with document {} {} already exists",
                person.document_type(),
                person.document_number()
            )));
        }
        if other.email().eq_ignore_ascii_case(person.email()) {
            return Err(DomainError::conflict(format!(
                "person with email {} already exists",
                person.email()
            )));
        }
    }
    Ok(())
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonCommandRepository for InMemoryPersonRepository {
    fn save(&self, person: Person) -> DomainResult<Person> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        ensure_unique(&map, &person, None)?;

        let id = PersonId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let person = person.with_id(id);
        map.insert(id, person.clone());
        Ok(person)
    }

    fn update(&self, person: Person) -> DomainResult<Person> {
        let id = person
            .id()
            .ok_or_else(|| DomainError::not_found("person has no id"))?;
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !map.contains_key(&id) {
            return Err(DomainError::not_found(format!("person {id}")));
        }
        ensure_unique(&map, &person, Some(id))?;

        map.insert(id, person.clone());
        Ok(person)
    }

    fn delete(&self, id: PersonId) -> bool {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(&id).is_some()
    }
}

impl PersonQueryRepository for InMemoryPersonRepository {
    fn find_by_id(&self, id: PersonId) -> Option<Person> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn find_by_document(&self, document_type: &str, document_number: &str) -> Option<Person> {
        self.find_first(|p| {
            p.document_type().eq_ignore_ascii_case(document_type)
                && p.document_number() == document_number
        })
    }

    fn find_by_email(&self, email: &str) -> Option<Person> {
        let email = email.trim();
        self.find_first(|p| p.email().eq_ignore_ascii_case(email))
    }

    fn find_all(&self, offset: usize, limit: usize) -> Vec<Person> {
        self.select(|_| true, offset, limit)
    }

    fn find_by_status(&self, status: PersonStatus, offset: usize, limit: usize) -> Vec<Person> {
        self.select(|p| p.status() == status, offset, limit)
    }

    fn find_by_name(&self, name: &str, offset: usize, limit: usize) -> Vec<Person> {
        self.select(|p| p.name_contains(name), offset, limit)
    }

    fn count(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    fn count_by_status(&self, status: PersonStatus) -> usize {
        match self.inner.read() {
            Ok(map) => map.values().filter(|p| p.status() == status).count(),
            Err(_) => 0,
        }
    }
}
