use chrono::{DateTime, Utc};

/// A state change that already happened.
///
/// Events are facts: immutable, named, timestamped.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "catalog.item.added").
    fn event_type(&self) -> &'static str;

    /// When the change was committed.
    fn occurred_at(&self) -> DateTime<Utc>;
}
