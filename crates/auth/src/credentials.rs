//! Credential verification seam.

use crate::Profile;

/// Answers "do these credentials belong to someone, and who?".
///
/// The gate only calls this with input that already passed shape validation.
/// Swap the implementation to plug in a real identity backend; the gate's
/// state machine stays as it is.
pub trait CredentialVerifier {
    fn verify(&self, login: &str, password: &str) -> Option<Profile>;
}

impl<V: CredentialVerifier + ?Sized> CredentialVerifier for Box<V> {
    fn verify(&self, login: &str, password: &str) -> Option<Profile> {
        (**self).verify(login, password)
    }
}

/// Exactly one known login/password pair.
#[derive(Clone)]
pub struct FixedCredential {
    login: String,
    password: String,
    profile: Profile,
}

impl FixedCredential {
    pub fn new(login: impl Into<String>, password: impl Into<String>, profile: Profile) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            profile,
        }
    }
}

impl core::fmt::Debug for FixedCredential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedCredential")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

impl CredentialVerifier for FixedCredential {
    fn verify(&self, login: &str, password: &str) -> Option<Profile> {
        // Evaluate both comparisons so a wrong login and a wrong password take
        // the same path.
        let login_ok = self.login == login;
        let password_ok = self.password == password;
        (login_ok & password_ok).then(|| self.profile.clone())
    }
}
