//! Build status types
//!
//! Wire model for the `lastBuild/api/json` endpoint and the poll-cycle
//! sentinel derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a job's most recent build
///
/// Decoded from `{job}/lastBuild/api/json`. The snapshot is transient:
/// it is valid for one poll cycle and discarded after the decision is made.
/// Fields the watcher does not consume are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStatus {
    pub building: bool,
    #[serde(default)]
    pub result: Option<BuildOutcome>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Outcome label of a finished build
///
/// A running build reports `result: null`; the labels below only appear
/// once `building` has gone false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildOutcome {
    Success,
    Failure,
    Unstable,
    Aborted,
    NotBuilt,
}

impl BuildOutcome {
    /// Wire label, exactly as Jenkins prints it
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildOutcome::Success => "SUCCESS",
            BuildOutcome::Failure => "FAILURE",
            BuildOutcome::Unstable => "UNSTABLE",
            BuildOutcome::Aborted => "ABORTED",
            BuildOutcome::NotBuilt => "NOT_BUILT",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Success)
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision taken from one poll cycle
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The last build is still running; wait for the next tick.
    StillBuilding,
    /// The last build has finished; carries the final snapshot.
    Finished(BuildStatus),
}

impl From<BuildStatus> for PollOutcome {
    fn from(status: BuildStatus) -> Self {
        if status.building {
            PollOutcome::StillBuilding
        } else {
            PollOutcome::Finished(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_build_is_still_building() {
        let status: BuildStatus =
            serde_json::from_str(r#"{"building": true, "result": null}"#).unwrap();
        assert!(status.building);
        assert_eq!(status.result, None);
        assert_eq!(PollOutcome::from(status), PollOutcome::StillBuilding);
    }

    #[test]
    fn test_finished_build_carries_the_snapshot() {
        // Extra fields mirror what a real lastBuild payload carries.
        let status: BuildStatus = serde_json::from_str(
            r#"{
                "building": false,
                "result": "SUCCESS",
                "number": 42,
                "url": "http://localhost:8080/job/myapp/42/",
                "timestamp": 1700000000000,
                "duration": 90210,
                "fullDisplayName": "myapp #42"
            }"#,
        )
        .unwrap();

        assert_eq!(status.result, Some(BuildOutcome::Success));
        assert_eq!(status.number, Some(42));

        match PollOutcome::from(status) {
            PollOutcome::Finished(snapshot) => {
                assert_eq!(snapshot.result, Some(BuildOutcome::Success));
            }
            PollOutcome::StillBuilding => panic!("finished build reported as building"),
        }
    }

    #[test]
    fn test_finished_build_may_lack_a_result() {
        let status: BuildStatus = serde_json::from_str(r#"{"building": false}"#).unwrap();
        assert_eq!(status.result, None);
        assert!(matches!(PollOutcome::from(status), PollOutcome::Finished(_)));
    }

    #[test]
    fn test_empty_body_is_a_decode_error() {
        assert!(serde_json::from_str::<BuildStatus>("").is_err());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(BuildOutcome::Success.to_string(), "SUCCESS");
        assert_eq!(BuildOutcome::Failure.to_string(), "FAILURE");
        assert_eq!(BuildOutcome::NotBuilt.to_string(), "NOT_BUILT");
        assert!(BuildOutcome::Success.is_success());
        assert!(!BuildOutcome::Unstable.is_success());
    }
}
