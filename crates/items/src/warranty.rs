use catalog_core::{validate, ValueObject};

/// Warranty terms attached to a listing. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Warranty {
    kind: Option<String>,
    time: Option<String>,
    description: Option<String>,
}

impl ValueObject for Warranty {}

impl Warranty {
    pub fn new(kind: Option<String>, time: Option<String>, description: Option<String>) -> Self {
        Self {
            kind: validate::trimmed(kind),
            time: validate::trimmed(time),
            description: validate::trimmed(description),
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_warranty(&self) -> bool {
        self.kind.is_some()
    }

    /// Manufacturer ("oficial") warranty.
    pub fn is_official(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| k.to_lowercase().contains("oficial"))
    }
}
