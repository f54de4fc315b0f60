//! Desktop notification display.

use crate::{AppError, AppResult};

use std::{fmt, panic::Location, time::Duration};

use error_location::ErrorLocation;
use notify_rust::{Notification, Timeout};
use tracing::{debug, instrument};

/// Identifier the notification server assigns to a displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(pub u32);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that can put a transient message on screen.
pub trait Notifier {
    /// Show a notification, replacing `replaces` if the server still has it.
    ///
    /// Returns the id the server used, which may differ from `replaces`.
    fn show(
        &self,
        title: &str,
        body: &str,
        replaces: Option<NotificationId>,
        timeout: Duration,
    ) -> AppResult<NotificationId>;
}

/// [`Notifier`] talking to the freedesktop notification server.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    /// Create a notifier that reports itself as `app_name`.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Notifier for DesktopNotifier {
    #[track_caller]
    #[instrument(skip(self))]
    fn show(
        &self,
        title: &str,
        body: &str,
        replaces: Option<NotificationId>,
        timeout: Duration,
    ) -> AppResult<NotificationId> {
        let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(title)
            .body(body)
            .timeout(Timeout::Milliseconds(timeout_ms));

        if let Some(id) = replaces {
            notification.id(id.0);
        }

        let handle = notification
            .show()
            .map_err(|e| AppError::NotificationFailed {
                reason: format!("Failed to show notification: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let id = NotificationId(handle.id());

        debug!(%id, "Notification shown");

        Ok(id)
    }
}
