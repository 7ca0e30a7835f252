use serde::{Deserialize, Serialize};

/// An e-mail/password pair held by the auth store.
///
/// No format or strength rules are applied; both fields are compared
/// byte-for-byte at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    email: String,
    password: String,
}

impl Credential {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// True when both fields match exactly (case-sensitive).
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
