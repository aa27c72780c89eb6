use chrono::{DateTime, Utc};
use serde::Serialize;

use goldline_core::SessionId;

use crate::Profile;

/// A signed-in user. The profile does not change for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedSession {
    pub id: SessionId,
    pub profile: Profile,
    pub started_at: DateTime<Utc>,
}

/// Authentication state of the running console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedSession),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(s) => Some(&s.profile),
        }
    }
}
