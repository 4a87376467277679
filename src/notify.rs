//! Notification seam.
//!
//! Scheduling and cancelling reminders is an OS capability this crate
//! treats as an opaque external service. The trait is the contract;
//! [`TracingNotifier`] is the shipped stand-in that records requests on
//! the log output instead of talking to a notification daemon.

use thiserror::Error;
use tracing::info;

/// Title of the daily reminder notification.
pub const REMINDER_TITLE: &str = "Food Log Reminder";

/// Body of the daily reminder notification.
pub const REMINDER_BODY: &str = "Did you log your meals today?";

/// Errors from the notification collaborator.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification service unavailable: {0}")]
    Unavailable(String),
}

/// The OS notification collaborator.
pub trait Notifier {
    /// Schedules the repeating daily reminder.
    fn schedule_daily_reminder(&self) -> Result<(), NotifyError>;

    /// Cancels every scheduled reminder.
    fn cancel_all(&self) -> Result<(), NotifyError>;
}

/// Stand-in notifier that records requests via tracing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn schedule_daily_reminder(&self) -> Result<(), NotifyError> {
        info!(
            title = REMINDER_TITLE,
            body = REMINDER_BODY,
            "scheduled daily reminder"
        );
        Ok(())
    }

    fn cancel_all(&self) -> Result<(), NotifyError> {
        info!("cancelled all scheduled reminders");
        Ok(())
    }
}
