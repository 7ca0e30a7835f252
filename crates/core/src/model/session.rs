use crate::model::{Credential, Section};

/// Who is logged in and which section is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<Credential>,
    active: Section,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A logged-out session showing the login form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: None,
            active: Section::Login,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&Credential> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The section most recently selected, regardless of login state.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// The section to mount. Private sections fall back to the login form
    /// while nobody is logged in.
    #[must_use]
    pub fn visible(&self) -> Section {
        if self.user.is_none() && !self.active.is_public() {
            Section::Login
        } else {
            self.active
        }
    }

    pub fn navigate(&mut self, section: Section) {
        self.active = section;
    }

    pub fn log_in(&mut self, user: Credential) {
        self.user = Some(user);
        self.active = Section::Dashboard;
    }

    pub fn log_out(&mut self) {
        self.user = None;
        self.active = Section::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_lands_on_dashboard_and_logout_forces_login() {
        let mut session = Session::new();
        assert_eq!(session.visible(), Section::Login);

        session.log_in(Credential::new("user@example.com", "password"));
        assert_eq!(session.visible(), Section::Dashboard);

        session.navigate(Section::Tests);
        session.log_out();
        assert!(!session.is_logged_in());
        assert_eq!(session.active(), Section::Login);
    }

    #[test]
    fn private_section_without_user_renders_login() {
        let mut session = Session::new();
        session.navigate(Section::Calendar);
        assert_eq!(session.active(), Section::Calendar);
        assert_eq!(session.visible(), Section::Login);

        session.navigate(Section::Signup);
        assert_eq!(session.visible(), Section::Signup);
    }
}
