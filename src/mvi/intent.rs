//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Commands issued by the view (add a favorite, start a fetch)
/// - Completion events (a catalog response arrived)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
