//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. The
/// console derives its views from value objects (languages, settings
/// snapshots, appearance modes), so "did the input change" is just `!=`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
