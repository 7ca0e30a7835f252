mod analysis;
mod auth;
mod calendar;
mod feedback;
mod notifications;
mod panels;
mod profile;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use analysis::AnalysisView;
pub use auth::{LoginView, SignupView};
pub use calendar::CalendarView;
pub use feedback::FeedbackView;
pub use notifications::NotificationsView;
pub use panels::{COURSES, CoursesView, DashboardView, NotesView, VideoRecordingsView};
pub use profile::ProfileView;
pub use quiz::{LeaderboardTable, TestsView};
