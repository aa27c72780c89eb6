//! Change notifications for the console.
//!
//! The core never assumes a rendering technology. After a mutation succeeds it
//! publishes an event; whoever renders subscribes and re-reads state.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
