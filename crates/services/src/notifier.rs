use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::NotifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    /// Not asked yet.
    #[default]
    Default,
    Granted,
    Denied,
}

impl NotificationPermission {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationPermission::Default => "default",
            NotificationPermission::Granted => "granted",
            NotificationPermission::Denied => "denied",
        }
    }
}

/// A local notification raised for an upcoming reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub fired_at: DateTime<Utc>,
}

/// Platform notification capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn permission(&self) -> NotificationPermission;

    /// Ask the platform for permission and return the resulting state.
    async fn request_permission(&self) -> NotificationPermission;

    /// Dispatch a notification. Nothing is returned once it is handed off.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::NotPermitted` unless permission is granted.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// In-app notifier: keeps dispatched notifications in an inbox the
/// Notifications panel reads, and logs each one.
#[derive(Debug)]
pub struct InboxNotifier {
    grant_on_request: bool,
    permission: Mutex<NotificationPermission>,
    inbox: Mutex<Vec<Notification>>,
}

impl InboxNotifier {
    /// `grant_on_request` decides how a permission request is answered.
    #[must_use]
    pub fn new(grant_on_request: bool) -> Self {
        Self {
            grant_on_request,
            permission: Mutex::new(NotificationPermission::Default),
            inbox: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything dispatched so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.inbox
            .lock()
            .map(|inbox| inbox.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for InboxNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
            .lock()
            .map(|p| *p)
            .unwrap_or(NotificationPermission::Denied)
    }

    async fn request_permission(&self) -> NotificationPermission {
        let answer = if self.grant_on_request {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        };
        if let Ok(mut permission) = self.permission.lock() {
            *permission = answer;
        }
        answer
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let permission = self.permission();
        if permission != NotificationPermission::Granted {
            return Err(NotifyError::NotPermitted(permission.as_str()));
        }
        let mut inbox = self
            .inbox
            .lock()
            .map_err(|err| NotifyError::Backend(err.to_string()))?;
        tracing::info!(title = %notification.title, body = %notification.body, "notification");
        inbox.push(notification.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use medico_core::time::fixed_now;

    use super::*;

    fn sample() -> Notification {
        Notification {
            title: "Test".into(),
            body: "Test Deadline: Anatomy".into(),
            fired_at: fixed_now(),
        }
    }

    #[tokio::test]
    async fn notify_requires_granted_permission() {
        let notifier = InboxNotifier::new(true);
        assert_eq!(notifier.permission(), NotificationPermission::Default);
        assert_eq!(
            notifier.notify(&sample()),
            Err(NotifyError::NotPermitted("default"))
        );

        assert_eq!(
            notifier.request_permission().await,
            NotificationPermission::Granted
        );
        notifier.notify(&sample()).unwrap();
        assert_eq!(notifier.notifications(), vec![sample()]);
    }

    #[tokio::test]
    async fn denied_request_keeps_inbox_empty() {
        let notifier = InboxNotifier::new(false);
        assert_eq!(
            notifier.request_permission().await,
            NotificationPermission::Denied
        );
        assert!(notifier.notify(&sample()).is_err());
        assert!(notifier.notifications().is_empty());
    }
}
