//! Base trait for store state in MVI architecture.

/// Marker trait for store state objects.
///
/// States are cloned out to readers, compared to detect changes
/// (the favorites store persists only when its state actually changed),
/// and start from `Default`.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
