//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two prices with same amount and currency are equal)
/// - **Entity**: Has identity (two items with the same id are the same listing)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Warranty {
///     kind: Option<String>,
///     time: Option<String>,
/// }
///
/// impl ValueObject for Warranty {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
