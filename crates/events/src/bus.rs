//! Publish/subscribe contract (mechanics only).
//!
//! - Broadcast: every subscription sees every message published after it was
//!   created.
//! - No persistence: the owning component is the source of truth; events only
//!   say "re-read me".
//! - Ordering: messages from one publisher arrive in publish order.

use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// ```ignore
/// let sub = console.subscribe();
/// console.add_item(item)?;
/// while let Ok(event) = sub.try_recv() {
///     rerender(event.event_type());
/// }
/// ```
///
/// Meant for a single consumer. Dropping it unsubscribes on the next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Everything queued right now, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Transport-agnostic pub/sub.
///
/// `Send + Sync` so a shell may consume notifications on its own thread even
/// though the state that emits them has a single owner.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
