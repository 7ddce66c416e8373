use serde::{Deserialize, Serialize};

use catalog_core::{validate, DomainError, DomainResult, ValueObject};

/// Declared type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeValueType {
    String,
    Number,
    Boolean,
}

impl AttributeValueType {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            other => Err(DomainError::validation(format!(
                "unknown attribute value type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// A technical attribute of a listing (`BRAND=Samsung`, `STORAGE=128 GB`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttribute {
    attribute_id: String,
    name: String,
    value: String,
    unit: Option<String>,
    value_type: AttributeValueType,
}

impl ValueObject for ItemAttribute {}

impl ItemAttribute {
    pub fn new(
        attribute_id: &str,
        name: &str,
        value: &str,
        unit: Option<String>,
        value_type: &str,
    ) -> DomainResult<Self> {
        validate::text(attribute_id.trim(), 1, 100, "attribute id")?;
        validate::text(name.trim(), 1, 255, "attribute name")?;
        validate::text(value.trim(), 1, 500, "attribute value")?;
        validate::not_blank(value_type, "attribute value type")?;

        Ok(Self {
            attribute_id: attribute_id.trim().to_string(),
            name: name.trim().to_string(),
            value: value.trim().to_string(),
            unit: validate::trimmed(unit),
            value_type: AttributeValueType::parse(value_type)?,
        })
    }

    pub fn attribute_id(&self) -> &str {
        &self.attribute_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn value_type(&self) -> AttributeValueType {
        self.value_type
    }
}
