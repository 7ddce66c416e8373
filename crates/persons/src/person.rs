use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use catalog_core::{validate, DomainError, DomainResult};

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 120;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("valid phone pattern"));
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()-]").expect("valid separator pattern"));
static DOCUMENT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("valid document pattern"));

/// Person identifier, assigned by the store on first save.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Person status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonStatus {
    Active,
    Inactive,
    Suspended,
}

impl PersonStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Inactive => "Inactivo",
            Self::Suspended => "Suspendido",
        }
    }

    pub fn parse(code: &str) -> DomainResult<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "SUSPENDED" => Ok(Self::Suspended),
            other => Err(DomainError::validation(format!("invalid person status: {other}"))),
        }
    }
}

/// Command: register a new person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
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

/// Command: replace the mutable details of a person.
///
/// Document and birth date are fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_last_name: String,
    pub second_last_name: Option<String>,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// A registered person. Immutable: every change returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: Option<PersonId>,
    document_type: String,
    document_number: String,
    first_name: String,
    second_name: Option<String>,
    first_last_name: String,
    second_last_name: Option<String>,
    birth_date: NaiveDate,
    email: String,
    phone_number: String,
    address: Option<String>,
    city: Option<String>,
    country: Option<String>,
    status: PersonStatus,
    created_date: DateTime<Utc>,
    updated_date: DateTime<Utc>,
}

impl Person {
    /// Validate and normalize a registration. The result has no id until saved.
    pub fn create(new: NewPerson, now: DateTime<Utc>) -> DomainResult<Self> {
        let document_type = new.document_type.trim();
        let document_number = new.document_number.trim();
        validate::text(document_type, 2, 10, "document type")?;
        validate::text(document_number, 5, 20, "document number")?;
        if !DOCUMENT_NUMBER_PATTERN.is_match(document_number) {
            return Err(DomainError::validation(
                "document number may only contain letters, digits and dashes",
            ));
        }
        validate_birth_date(new.birth_date, now)?;

        let details = PersonDetails {
            first_name: new.first_name,
            second_name: new.second_name,
            first_last_name: new.first_last_name,
            second_last_name: new.second_last_name,
            email: new.email,
            phone_number: new.phone_number,
            address: new.address,
            city: new.city,
            country: new.country,
        };
        let details = normalize_details(details)?;

        Ok(Self {
            id: None,
            document_type: document_type.to_uppercase(),
            document_number: document_number.to_string(),
            first_name: details.first_name,
            second_name: details.second_name,
            first_last_name: details.first_last_name,
            second_last_name: details.second_last_name,
            birth_date: new.birth_date,
            email: details.email,
            phone_number: details.phone_number,
            address: details.address,
            city: details.city,
            country: details.country,
            status: PersonStatus::Active,
            created_date: now,
            updated_date: now,
        })
    }

    /// Attach the store-assigned identifier.
    pub fn with_id(self, id: PersonId) -> Self {
        Self { id: Some(id), ..self }
    }

    pub fn update(&self, details: PersonDetails, now: DateTime<Utc>) -> DomainResult<Self> {
        let details = normalize_details(details)?;
        Ok(Self {
            first_name: details.first_name,
            second_name: details.second_name,
            first_last_name: details.first_last_name,
            second_last_name: details.second_last_name,
            email: details.email,
            phone_number: details.phone_number,
            address: details.address,
            city: details.city,
            country: details.country,
            updated_date: now,
            ..self.clone()
        })
    }

    pub fn deactivate(&self, now: DateTime<Utc>) -> DomainResult<Self> {
        if self.status == PersonStatus::Inactive {
            return Err(DomainError::invariant("person is already inactive"));
        }
        Ok(self.with_status(PersonStatus::Inactive, now))
    }

    pub fn activate(&self, now: DateTime<Utc>) -> DomainResult<Self> {
        if self.status == PersonStatus::Active {
            return Err(DomainError::invariant("person is already active"));
        }
        Ok(self.with_status(PersonStatus::Active, now))
    }

    fn with_status(&self, status: PersonStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_date: now,
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<PersonId> {
        self.id
    }

    pub fn document_type(&self) -> &str {
        &self.document_type
    }

    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn second_name(&self) -> Option<&str> {
        self.second_name.as_deref()
    }

    pub fn first_last_name(&self) -> &str {
        &self.first_last_name
    }

    pub fn second_last_name(&self) -> Option<&str> {
        self.second_last_name.as_deref()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn status(&self) -> PersonStatus {
        self.status
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }

    /// Names joined with single spaces, skipping the absent optional ones.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.second_name.as_deref(),
            Some(self.first_last_name.as_str()),
            self.second_last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Completed years at `now`.
    pub fn age(&self, now: DateTime<Utc>) -> i32 {
        years_between(self.birth_date, now.date_naive())
    }

    pub fn is_active(&self) -> bool {
        self.status == PersonStatus::Active
    }

    pub fn is_adult(&self, now: DateTime<Utc>) -> bool {
        self.age(now) >= MIN_AGE
    }

    /// Case-insensitive match on the first name or the first last name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.first_name.to_lowercase().contains(&fragment)
            || self.first_last_name.to_lowercase().contains(&fragment)
    }
}

fn normalize_details(details: PersonDetails) -> DomainResult<PersonDetails> {
    let first_name = details.first_name.trim();
    let first_last_name = details.first_last_name.trim();
    validate::text(first_name, 2, 50, "first name")?;
    validate::text(first_last_name, 2, 50, "first last name")?;
    let email = normalize_email(&details.email)?;
    let phone_number = normalize_phone(&details.phone_number)?;

    Ok(PersonDetails {
        first_name: capitalize(first_name),
        second_name: validate::trimmed(details.second_name).map(|n| capitalize(&n)),
        first_last_name: capitalize(first_last_name),
        second_last_name: validate::trimmed(details.second_last_name).map(|n| capitalize(&n)),
        email,
        phone_number,
        address: validate::trimmed(details.address),
        city: validate::trimmed(details.city).map(|c| capitalize(&c)),
        country: validate::trimmed(details.country).map(|c| capitalize(&c)),
    })
}

fn normalize_email(email: &str) -> DomainResult<String> {
    let email = email.trim();
    validate::not_blank(email, "email")?;
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::validation("email format is not valid"));
    }
    Ok(email.to_lowercase())
}

fn normalize_phone(phone: &str) -> DomainResult<String> {
    let phone = phone.trim();
    validate::not_blank(phone, "phone number")?;
    let digits = PHONE_SEPARATORS.replace_all(phone, "");
    if !PHONE_PATTERN.is_match(&digits) {
        return Err(DomainError::validation(
            "phone number must contain between 7 and 15 digits",
        ));
    }
    Ok(phone.to_string())
}

fn validate_birth_date(birth_date: NaiveDate, now: DateTime<Utc>) -> DomainResult<()> {
    let today = now.date_naive();
    if birth_date > today {
        return Err(DomainError::invariant("birth date cannot be in the future"));
    }
    let age = years_between(birth_date, today);
    if age < MIN_AGE {
        return Err(DomainError::invariant(format!(
            "person must be at least {MIN_AGE} years old (got {age})"
        )));
    }
    if age > MAX_AGE {
        return Err(DomainError::invariant(format!(
            "age cannot exceed {MAX_AGE} years (got {age})"
        )));
    }
    Ok(())
}

fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn new_person() -> NewPerson {
        NewPerson {
            document_type: " cc ".into(),
            document_number: "1234567890".into(),
            first_name: "jUAN".into(),
            second_name: Some("carlos".into()),
            first_last_name: "pérez".into(),
            second_last_name: None,
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 16).unwrap(),
            email: " Juan.Perez@Example.COM ".into(),
            phone_number: "(300) 123-4567".into(),
            address: Some(" Calle 1 ".into()),
            city: Some("bogotá".into()),
            country: None,
        }
    }

    #[test]
    fn create_normalizes_fields() {
        let person = Person::create(new_person(), now()).unwrap();
        assert_eq!(person.id(), None);
        assert_eq!(person.document_type(), "CC");
        assert_eq!(person.first_name(), "Juan");
        assert_eq!(person.second_name(), Some("Carlos"));
        assert_eq!(person.first_last_name(), "Pérez");
        assert_eq!(person.email(), "juan.perez@example.com");
        assert_eq!(person.address(), Some("Calle 1"));
        assert_eq!(person.city(), Some("Bogotá"));
        assert_eq!(person.status(), PersonStatus::Active);
        assert_eq!(person.full_name(), "Juan Carlos Pérez");
    }

    #[test]
    fn age_counts_completed_years() {
        // birthday is tomorrow
        let person = Person::create(new_person(), now()).unwrap();
        assert_eq!(person.age(now()), 34);
        assert!(person.is_adult(now()));
    }

    #[test]
    fn rejects_minors_and_future_birth_dates() {
        let minor = NewPerson {
            birth_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            ..new_person()
        };
        assert!(matches!(
            Person::create(minor, now()),
            Err(DomainError::InvariantViolation(_))
        ));

        let future = NewPerson {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ..new_person()
        };
        assert!(Person::create(future, now()).is_err());

        let too_old = NewPerson {
            birth_date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            ..new_person()
        };
        assert!(Person::create(too_old, now()).is_err());
    }

    #[test]
    fn rejects_malformed_contact_data() {
        let bad_email = NewPerson { email: "juan@example".into(), ..new_person() };
        assert!(matches!(Person::create(bad_email, now()), Err(DomainError::Validation(_))));

        let short_phone = NewPerson { phone_number: "123-45".into(), ..new_person() };
        assert!(Person::create(short_phone, now()).is_err());

        let letters = NewPerson { phone_number: "300-ABC-4567".into(), ..new_person() };
        assert!(Person::create(letters, now()).is_err());
    }

    #[test]
    fn rejects_malformed_documents() {
        let symbols = NewPerson { document_number: "12.345.678".into(), ..new_person() };
        assert!(Person::create(symbols, now()).is_err());

        let short = NewPerson { document_number: "1234".into(), ..new_person() };
        assert!(Person::create(short, now()).is_err());

        let short_type = NewPerson { document_type: "C".into(), ..new_person() };
        assert!(Person::create(short_type, now()).is_err());
    }

    #[test]
    fn status_transitions() {
        let person = Person::create(new_person(), now()).unwrap().with_id(PersonId::new(1));
        assert!(matches!(person.activate(now()), Err(DomainError::InvariantViolation(_))));

        let later = now() + chrono::Duration::hours(1);
        let inactive = person.deactivate(later).unwrap();
        assert_eq!(inactive.status(), PersonStatus::Inactive);
        assert_eq!(inactive.updated_date(), later);
        assert_eq!(inactive.id(), Some(PersonId::new(1)));
        assert!(inactive.deactivate(later).is_err());
        assert!(inactive.activate(later).unwrap().is_active());
    }

    #[test]
    fn update_keeps_document_and_creation_date() {
        let person = Person::create(new_person(), now()).unwrap();
        let later = now() + chrono::Duration::days(1);
        let updated = person
            .update(
                PersonDetails {
                    first_name: "pedro".into(),
                    second_name: None,
                    first_last_name: "gómez".into(),
                    second_last_name: Some("ruiz".into()),
                    email: "pedro@example.com".into(),
                    phone_number: "3001234567".into(),
                    address: None,
                    city: None,
                    country: Some("colombia".into()),
                },
                later,
            )
            .unwrap();
        assert_eq!(updated.full_name(), "Pedro Gómez Ruiz");
        assert_eq!(updated.document_number(), "1234567890");
        assert_eq!(updated.created_date(), now());
        assert_eq!(updated.updated_date(), later);
        assert_eq!(updated.country(), Some("Colombia"));
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let person = Person::create(new_person(), now()).unwrap();
        assert!(person.name_contains("JUA"));
        assert!(person.name_contains("pér"));
        assert!(!person.name_contains("carlos"));
    }

    #[test]
    fn status_codes_round_trip() {
        for status in [PersonStatus::Active, PersonStatus::Inactive, PersonStatus::Suspended] {
            assert_eq!(PersonStatus::parse(status.code()).unwrap(), status);
        }
        assert!(PersonStatus::parse("DELETED").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                .. ProptestConfig::default()
            })]

            #[test]
            fn phone_digits_between_seven_and_fifteen_are_accepted(digits in "[0-9]{7,15}") {
                let person = NewPerson { phone_number: digits.clone(), ..new_person() };
                prop_assert!(Person::create(person, now()).is_ok());
            }

            #[test]
            fn longer_phone_numbers_are_rejected(digits in "[0-9]{16,24}") {
                let person = NewPerson { phone_number: digits, ..new_person() };
                prop_assert!(Person::create(person, now()).is_err());
            }
        }
    }
}
