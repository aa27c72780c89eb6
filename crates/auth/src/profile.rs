use serde::{Deserialize, Serialize};

use crate::Role;

/// Who is signed in. Compared by value: two equal profiles are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Login name.
    pub username: String,
    /// Human-readable name for the profile header.
    pub display_name: String,
    pub role: Role,
}

impl Profile {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
        }
    }
}
