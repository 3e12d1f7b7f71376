//! Completion notification
//!
//! Raises the desktop notification for a finished build and reports how the
//! user reacted as an explicit value instead of a callback.

use anyhow::{Context, Result};
use notify_rust::Notification;
use std::time::Duration;
use vigil_core::build::BuildStatus;
use vigil_core::job::JobRef;

/// User reaction to the completion notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The notification was activated (clicked).
    Clicked,
    /// The notification was closed without activation.
    Dismissed,
    /// Nobody reacted within the wait window.
    TimedOut,
}

/// Notification title for a job, e.g. "Jenkins myapp"
pub fn title(job: &JobRef) -> String {
    format!("Jenkins {}", job.short_name())
}

/// Notification body for a finished build, e.g. "Build SUCCESS"
///
/// A finished build can report no result when polling races a queue
/// transition; that reads as "Build UNKNOWN".
pub fn message(status: &BuildStatus) -> String {
    match status.result {
        Some(outcome) => format!("Build {}", outcome),
        None => "Build UNKNOWN".to_string(),
    }
}

/// Shows the completion notification and waits for a reaction
///
/// The wait runs on a blocking worker thread, bounded by `timeout`.
pub async fn show_finished(
    job: &JobRef,
    status: &BuildStatus,
    timeout: Duration,
) -> Result<Interaction> {
    let title = title(job);
    let body = message(status);

    let wait = tokio::task::spawn_blocking(move || show_and_wait(&title, &body));

    match tokio::time::timeout(timeout, wait).await {
        Ok(joined) => joined.context("Notification task failed")?,
        Err(_) => Ok(Interaction::TimedOut),
    }
}

/// Displays the notification and blocks for the outcome
///
/// The XDG notification server reports activation ("default") and close
/// events, so the reaction can be read back directly.
#[cfg(all(unix, not(target_os = "macos")))]
fn show_and_wait(title: &str, body: &str) -> Result<Interaction> {
    let handle = Notification::new()
        .summary(title)
        .body(body)
        .action("default", "Open console")
        .timeout(notify_rust::Timeout::Never)
        .show()
        .context("Failed to show desktop notification")?;

    let mut interaction = Interaction::Dismissed;
    handle.wait_for_action(|action| {
        if action == "default" {
            interaction = Interaction::Clicked;
        }
    });

    Ok(interaction)
}

/// Displays the notification without waiting
///
/// The macOS and Windows backends cannot report clicks, so the notification
/// is fire-and-forget and counts as dismissed.
#[cfg(any(target_os = "macos", target_os = "windows"))]
fn show_and_wait(title: &str, body: &str) -> Result<Interaction> {
    Notification::new()
        .summary(title)
        .body(body)
        .show()
        .context("Failed to show desktop notification")?;

    Ok(Interaction::Dismissed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::build::BuildOutcome;

    fn finished(result: Option<BuildOutcome>) -> BuildStatus {
        BuildStatus {
            building: false,
            result,
            number: Some(7),
            url: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_title_uses_short_name() {
        assert_eq!(title(&JobRef::new("/job/myapp")), "Jenkins myapp");
    }

    #[test]
    fn test_title_of_nested_job_uses_last_segment() {
        assert_eq!(title(&JobRef::new("/job/foo/job/bar")), "Jenkins bar");
    }

    #[test]
    fn test_message_carries_the_result() {
        assert_eq!(
            message(&finished(Some(BuildOutcome::Success))),
            "Build SUCCESS"
        );
        assert_eq!(
            message(&finished(Some(BuildOutcome::Failure))),
            "Build FAILURE"
        );
    }

    #[test]
    fn test_message_without_result() {
        assert_eq!(message(&finished(None)), "Build UNKNOWN");
    }
}
