//! Argument validation shared by domain factories.
//!
//! Every factory (`Item::new`, `Price::of_minor_units`, `Person::create`, ...)
//! funnels its checks through these helpers so the error messages stay uniform.

use crate::error::{DomainError, DomainResult};

/// Reject empty or whitespace-only strings.
pub fn not_blank(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject an absent required value.
pub fn required<'a, T>(value: Option<&'a T>, field: &str) -> DomainResult<&'a T> {
    value.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

/// Character length must fall in `min..=max` (counted in chars, not bytes).
pub fn length(value: &str, min: usize, max: usize, field: &str) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(format!(
            "{field} length must be between {min} and {max} (got {len})"
        )));
    }
    Ok(())
}

/// Non-blank and length-bounded, the most common combination.
pub fn text(value: &str, min: usize, max: usize, field: &str) -> DomainResult<()> {
    not_blank(value, field)?;
    length(value, min, max, field)
}

/// Trim an optional string, collapsing blank values to `None`.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace() {
        let err = not_blank("   ", "title").unwrap_err();
        assert_eq!(err, DomainError::validation("title cannot be empty"));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // "ñandú" is 5 chars but 7 bytes.
        assert!(length("ñandú", 1, 5, "name").is_ok());
        assert!(length("ñandú", 1, 4, "name").is_err());
    }

    #[test]
    fn required_reports_field_name() {
        let missing: Option<&u32> = None;
        match required(missing, "price") {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("price")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn trimmed_collapses_blank_to_none() {
        assert_eq!(trimmed(Some("  ".into())), None);
        assert_eq!(trimmed(Some(" a ".into())), Some("a".into()));
        assert_eq!(trimmed(None), None);
    }
}
