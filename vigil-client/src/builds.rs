//! Build status endpoints

use crate::JenkinsClient;
use crate::error::Result;
use tracing::debug;
use vigil_core::build::BuildStatus;
use vigil_core::job::JobRef;

impl JenkinsClient {
    /// URL of a job's last-build status endpoint
    pub fn last_build_url(&self, job: &JobRef) -> String {
        format!("{}{}/lastBuild/api/json", self.base_url, job.path())
    }

    /// URL of a job's last-build console page
    pub fn console_url(&self, job: &JobRef) -> String {
        format!("{}{}/lastBuild/console", self.base_url, job.path())
    }

    /// Fetch the status of a job's most recent build
    ///
    /// # Arguments
    /// * `job` - The job reference
    ///
    /// # Returns
    /// The decoded build status snapshot
    pub async fn last_build(&self, job: &JobRef) -> Result<BuildStatus> {
        let url = self.last_build_url(job);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_build_url() {
        let client = JenkinsClient::new("http://localhost:8080");
        let job = JobRef::new("/job/myapp");
        assert_eq!(
            client.last_build_url(&job),
            "http://localhost:8080/job/myapp/lastBuild/api/json"
        );
    }

    #[test]
    fn test_console_url() {
        let client = JenkinsClient::new("http://localhost:8080");
        let job = JobRef::new("/job/myapp");
        assert_eq!(
            client.console_url(&job),
            "http://localhost:8080/job/myapp/lastBuild/console"
        );
    }

    #[test]
    fn test_urls_for_nested_job() {
        let client = JenkinsClient::new("http://ci.example.com:8080/");
        let job = JobRef::new("/job/foo/job/bar");
        assert_eq!(
            client.last_build_url(&job),
            "http://ci.example.com:8080/job/foo/job/bar/lastBuild/api/json"
        );
        assert_eq!(
            client.console_url(&job),
            "http://ci.example.com:8080/job/foo/job/bar/lastBuild/console"
        );
    }
}
