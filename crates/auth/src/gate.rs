//! Login/logout state machine.
//!
//! ```text
//!              attempt_login (ok)
//!  Anonymous ───────────────────────▶ Authenticated
//!      ▲                                   │
//!      └──────────── logout ───────────────┘
//! ```
//!
//! Failed attempts never move the state.

use chrono::Utc;
use thiserror::Error;

use goldline_core::validate::{alphabetic, char_len_within, non_empty};
use goldline_core::{
    CredentialError, DomainError, SessionId, ValidationError, ViolationKind, Violations,
};

use crate::credentials::CredentialVerifier;
use crate::profile::Profile;
use crate::session::{AuthenticatedSession, Session};

/// Allowed password length in characters, inclusive.
pub const PASSWORD_LEN: (usize, usize) = (3, 10);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The input is malformed; every problem is listed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Well-formed input that matches no account. Says nothing about which
    /// field was wrong.
    #[error(transparent)]
    InvalidCredentials(#[from] CredentialError),
}

impl From<LoginError> for DomainError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Validation(e) => DomainError::Validation(e),
            LoginError::InvalidCredentials(e) => DomainError::Credentials(e),
        }
    }
}

/// Shape rules every login attempt must pass before credentials are compared:
/// the login is non-empty letters, the password is `PASSWORD_LEN` characters.
///
/// Also used to reject a configured account that could never sign in.
pub fn check_credential_shape(login: &str, password: &str) -> Result<(), ValidationError> {
    let (min, max) = PASSWORD_LEN;
    let mut v = Violations::new();

    if non_empty(login) {
        v.check(alphabetic(login), "login", ViolationKind::NotAlphabetic);
    } else {
        v.push("login", ViolationKind::Empty);
    }

    v.check(!password.is_empty(), "password", ViolationKind::Empty)
        .check(
            char_len_within(password, min, max),
            "password",
            ViolationKind::OutOfRange { min, max },
        );

    v.into_result()
}

/// Holds the session and admits users through a [`CredentialVerifier`].
#[derive(Debug)]
pub struct AuthGate<V> {
    verifier: V,
    session: Session,
}

impl<V: CredentialVerifier> AuthGate<V> {
    /// Starts anonymous.
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            session: Session::Anonymous,
        }
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.session.profile()
    }

    /// Check the shape of the input, then the credentials themselves.
    ///
    /// On success the session becomes `Authenticated` (replacing any session
    /// already open). On failure the current session is left as it was.
    pub fn attempt_login(&mut self, login: &str, password: &str) -> Result<Profile, LoginError> {
        if let Err(err) = check_credential_shape(login, password) {
            tracing::info!(violations = err.violations().len(), "login rejected: malformed input");
            return Err(err.into());
        }

        let Some(profile) = self.verifier.verify(login, password) else {
            tracing::warn!(login = %login, "login rejected: invalid credentials");
            return Err(CredentialError.into());
        };

        let session = AuthenticatedSession {
            id: SessionId::new(),
            profile: profile.clone(),
            started_at: Utc::now(),
        };
        if self.session.is_authenticated() {
            tracing::info!("replacing open session");
        }
        tracing::info!(session_id = %session.id, username = %profile.username, "session started");
        self.session = Session::Authenticated(session);

        Ok(profile)
    }

    /// Back to anonymous. Returns the profile that was signed in, if any.
    ///
    /// Calling this while already anonymous is a no-op.
    pub fn logout(&mut self) -> Option<Profile> {
        match std::mem::take(&mut self.session) {
            Session::Anonymous => None,
            Session::Authenticated(s) => {
                tracing::info!(session_id = %s.id, "session ended");
                Some(s.profile)
            }
        }
    }
}
