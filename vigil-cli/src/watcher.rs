//! Build watcher
//!
//! Polls the job's last-build endpoint on a fixed cadence until the build
//! finishes, then hands the final snapshot back to the caller.

use anyhow::{Context, Result};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};
use vigil_client::JenkinsClient;
use vigil_core::build::{BuildStatus, PollOutcome};

use crate::config::Config;

/// Watcher that polls a single job until its current build completes
pub struct BuildWatcher {
    config: Config,
    client: JenkinsClient,
}

impl BuildWatcher {
    /// Creates a new build watcher
    pub fn new(config: Config, client: JenkinsClient) -> Self {
        Self { config, client }
    }

    /// Runs the polling loop until the build finishes
    ///
    /// Each tick performs exactly one poll cycle, awaited in place, so at
    /// most one request is in flight at a time. A cycle that outlasts the
    /// interval delays the next tick instead of letting ticks pile up.
    ///
    /// Any failed cycle (network error, error status, malformed JSON) aborts
    /// the run; there is no retry policy.
    pub async fn run(&self) -> Result<BuildStatus> {
        info!(
            "Starting build watcher for {} (interval: {:?})",
            self.config.job, self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            debug!("Polling {}", self.config.job);

            match self.poll_once().await? {
                PollOutcome::StillBuilding => {
                    debug!("Build still running");
                }
                PollOutcome::Finished(status) => {
                    info!(
                        "Build finished: {}",
                        status
                            .result
                            .map(|r| r.to_string())
                            .unwrap_or_else(|| "UNKNOWN".to_string())
                    );
                    return Ok(status);
                }
            }
        }
    }

    /// Performs a single poll cycle
    async fn poll_once(&self) -> Result<PollOutcome> {
        let status = match self.client.last_build(&self.config.job).await {
            Ok(status) => status,
            Err(e) if e.is_not_found() => {
                return Err(e).with_context(|| {
                    format!(
                        "No last build for {} (wrong job path, or the job has never been built?)",
                        self.config.job
                    )
                });
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to fetch build status for {}", self.config.job)
                });
            }
        };

        Ok(PollOutcome::from(status))
    }
}
