use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Top-level views of the platform. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Login,
    Signup,
    Dashboard,
    Courses,
    Tests,
    Calendar,
    Analysis,
    Notifications,
    Notes,
    Profile,
    VideoRecordings,
    Feedback,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

impl Section {
    /// Sections reachable from the navigation header, in display order.
    pub const NAVIGATION: [Section; 10] = [
        Section::Dashboard,
        Section::Courses,
        Section::Tests,
        Section::Calendar,
        Section::Analysis,
        Section::Notifications,
        Section::Notes,
        Section::VideoRecordings,
        Section::Feedback,
        Section::Profile,
    ];

    /// Sections that do not require a logged-in user.
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, Section::Login | Section::Signup)
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Login => "login",
            Section::Signup => "signup",
            Section::Dashboard => "dashboard",
            Section::Courses => "courses",
            Section::Tests => "tests",
            Section::Calendar => "calendar",
            Section::Analysis => "analysis",
            Section::Notifications => "notifications",
            Section::Notes => "notes",
            Section::Profile => "profile",
            Section::VideoRecordings => "video-recordings",
            Section::Feedback => "feedback",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Login => "Login",
            Section::Signup => "Sign Up",
            Section::Dashboard => "Dashboard",
            Section::Courses => "Courses",
            Section::Tests => "Tests",
            Section::Calendar => "Calendar",
            Section::Analysis => "Analysis",
            Section::Notifications => "Notifications",
            Section::Notes => "Notes",
            Section::Profile => "Profile",
            Section::VideoRecordings => "Video Recordings",
            Section::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let section = match s.trim().trim_start_matches('#') {
            "login" => Section::Login,
            "signup" => Section::Signup,
            "dashboard" => Section::Dashboard,
            "courses" => Section::Courses,
            "tests" => Section::Tests,
            "calendar" => Section::Calendar,
            "analysis" => Section::Analysis,
            "notifications" => Section::Notifications,
            "notes" => Section::Notes,
            "profile" => Section::Profile,
            "video-recordings" => Section::VideoRecordings,
            "feedback" => Section::Feedback,
            other => return Err(SectionParseError(other.to_string())),
        };
        Ok(section)
    }
}
