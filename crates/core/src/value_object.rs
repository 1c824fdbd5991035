//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they carry no
/// identity of their own, so two value objects with the same attribute values
/// are interchangeable. To "modify" one, construct a new one.
///
/// Example: a `Price` of 999 cents equals any other `Price` of 999 cents,
/// whereas two products with identical fields are still distinct entities
/// when their ids differ.
///
/// The trait requires:
/// - **Clone**: values are cheap to pass around
/// - **PartialEq**: values compare by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
