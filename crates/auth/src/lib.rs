//! `goldline-auth`: credential gate for the console.
//!
//! A two-state session holder (anonymous / authenticated). Decoupled from UI
//! and from where credentials come from: verification is a pluggable trait.

pub mod credentials;
pub mod gate;
pub mod profile;
pub mod roles;
pub mod session;

pub use credentials::{CredentialVerifier, FixedCredential};
pub use gate::{AuthGate, LoginError, PASSWORD_LEN, check_credential_shape};
pub use profile::Profile;
pub use roles::Role;
pub use session::{AuthenticatedSession, Session};
