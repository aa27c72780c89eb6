//! `goldline-console`
//!
//! **Responsibility:** the single owned-state object the presentation shell
//! talks to.
//!
//! This crate provides:
//! - `Console`: catalog, analytics and session behind one set of operations
//! - change notifications (`ConsoleEvent`) for re-rendering
//! - configuration from the environment
//! - serializable dashboard and profile snapshots
//!
//! The shell (window, layout, charts) is a **thin renderer** around this.

pub mod config;
pub mod console;
pub mod dashboard;
pub mod events;

pub use config::{ConfigError, ConsoleConfig};
pub use console::Console;
pub use dashboard::{Dashboard, ProfileView, RECENT_ORDERS_SHOWN};
pub use events::ConsoleEvent;
