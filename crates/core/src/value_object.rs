//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new value; the product store relies on this when it
/// replaces a record on price update and keeps the superseded value around.
///
/// Values are shared between threads (store snapshots hand out clones), so
/// the trait also requires `Send + Sync`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
