#![forbid(unsafe_code)]

pub mod app_services;
pub mod app_state;
pub mod error;
pub mod notifier;

pub use medico_core::Clock;

pub use app_services::AppServices;
pub use app_state::{Action, AppState, Effect, FormErrors};
pub use error::{AppServicesError, NotifyError};
pub use notifier::{InboxNotifier, Notification, NotificationPermission, Notifier};
