//! Watcher configuration
//!
//! Defines the immutable runtime parameters for a watch: server URL, job
//! reference, and the polling and notification intervals.

use std::time::Duration;
use vigil_core::job::JobRef;

/// Watcher configuration
///
/// Composed once at startup from CLI arguments and immutable afterwards;
/// every poll cycle reads the same values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Jenkins base URL (e.g., "http://localhost:8080")
    pub server_url: String,

    /// The job to watch
    pub job: JobRef,

    /// How often to poll the job's last-build endpoint
    pub poll_interval: Duration,

    /// How long to wait for a reaction to the completion notification
    pub notify_timeout: Duration,

    /// Upper bound on a single status request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with default intervals
    pub fn new(server_url: String, job: JobRef) -> Self {
        Self {
            server_url,
            job,
            poll_interval: Duration::from_secs(15),
            notify_timeout: Duration::from_secs(60),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Overrides the poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Overrides the notification wait window
    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!("server_url cannot be empty");
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if self.job.path() == "/" {
            anyhow::bail!("job path must contain at least one segment");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.notify_timeout.as_secs() == 0 {
            anyhow::bail!("notify_timeout must be greater than 0");
        }

        Ok(())
    }
}
