use chrono::{DateTime, Utc};
use serde::Serialize;

use goldline_core::SessionId;
use goldline_events::Event;

/// Something the shell should re-render for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleEvent {
    CatalogItemAdded {
        id: String,
        occurred_at: DateTime<Utc>,
    },
    CatalogItemRemoved {
        id: String,
        occurred_at: DateTime<Utc>,
    },
    SessionStarted {
        session_id: SessionId,
        username: String,
        occurred_at: DateTime<Utc>,
    },
    SessionEnded {
        username: String,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for ConsoleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ConsoleEvent::CatalogItemAdded { .. } => "catalog.item.added",
            ConsoleEvent::CatalogItemRemoved { .. } => "catalog.item.removed",
            ConsoleEvent::SessionStarted { .. } => "session.started",
            ConsoleEvent::SessionEnded { .. } => "session.ended",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ConsoleEvent::CatalogItemAdded { occurred_at, .. }
            | ConsoleEvent::CatalogItemRemoved { occurred_at, .. }
            | ConsoleEvent::SessionStarted { occurred_at, .. }
            | ConsoleEvent::SessionEnded { occurred_at, .. } => *occurred_at,
        }
    }
}
