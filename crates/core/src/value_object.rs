//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. In this workspace a submitted customer form is a value object (it has
/// no key of its own), while a catalog product is an [`Entity`](crate::Entity)
/// keyed by its [`ProductId`](crate::ProductId).
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
