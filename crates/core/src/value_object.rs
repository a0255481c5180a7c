//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity. Two amounts holding the same raw value
/// are the same amount; two item types with the same ids are the same type.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct RawAmount(i64);
///
/// impl ValueObject for RawAmount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
