use thiserror::Error;

use crate::model::Credential;

pub const DEFAULT_EMAIL: &str = "user@example.com";
pub const DEFAULT_PASSWORD: &str = "password";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Insertion-ordered credential list. Lives for the process lifetime only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStore {
    users: Vec<Credential>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single demo account.
    #[must_use]
    pub fn with_default_user() -> Self {
        let mut store = Self::new();
        store.add_user(Credential::new(DEFAULT_EMAIL, DEFAULT_PASSWORD));
        store
    }

    /// Append a credential. Duplicates are allowed.
    pub fn add_user(&mut self, credential: Credential) {
        self.users.push(credential);
    }

    /// Find the first credential matching both fields exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no entry matches.
    pub fn login(&self, email: &str, password: &str) -> Result<&Credential, AuthError> {
        self.users
            .iter()
            .find(|user| user.matches(email, password))
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Register a new credential once the confirmation matches.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch` if `password != confirm_password`.
    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        self.add_user(Credential::new(email, password));
        Ok(())
    }

    #[must_use]
    pub fn users(&self) -> &[Credential] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_exact_match() {
        let store = AuthStore::with_default_user();
        assert!(store.login(DEFAULT_EMAIL, DEFAULT_PASSWORD).is_ok());
        assert_eq!(store.login("x", "y"), Err(AuthError::InvalidCredentials));
        assert_eq!(
            store.login("User@example.com", DEFAULT_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            store.login(DEFAULT_EMAIL, "Password"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn login_returns_first_matching_entry() {
        let mut store = AuthStore::new();
        store.add_user(Credential::new("a@b.c", "one"));
        store.add_user(Credential::new("a@b.c", "two"));
        store.add_user(Credential::new("a@b.c", "two"));
        let found = store.login("a@b.c", "two").unwrap();
        assert!(std::ptr::eq(found, &store.users()[1]));
    }

    #[test]
    fn signup_checks_confirmation_only() {
        let mut store = AuthStore::new();
        assert_eq!(
            store.signup("new@x.io", "secret", "secreT"),
            Err(AuthError::PasswordMismatch)
        );
        assert!(store.is_empty());

        store.signup("new@x.io", "secret", "secret").unwrap();
        store.signup("new@x.io", "secret", "secret").unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.login("new@x.io", "secret").is_ok());
    }
}
