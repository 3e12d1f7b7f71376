//! Vigil HTTP Client
//!
//! A small, type-safe client for the Jenkins JSON API.
//!
//! The watcher talks to Jenkins exclusively through this crate, keeping URL
//! composition and response handling in one place.
//!
//! # Example
//!
//! ```no_run
//! use vigil_client::JenkinsClient;
//! use vigil_core::job::JobRef;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JenkinsClient::new("http://localhost:8080");
//!     let job = JobRef::new("/job/myapp");
//!
//!     let status = client.last_build(&job).await?;
//!     println!("building: {}", status.building);
//!     Ok(())
//! }
//! ```

pub mod error;
mod builds;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Jenkins JSON API
///
/// Holds the server's base URL and the underlying HTTP client. All endpoint
/// URLs are derived from the base URL plus a [`JobRef`](vigil_core::job::JobRef)
/// path, so a reference composed once at startup is valid for every cycle.
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    /// Base URL of the Jenkins server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JenkinsClient {
    /// Create a new Jenkins client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Jenkins server (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use vigil_client::JenkinsClient;
    ///
    /// let client = JenkinsClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new Jenkins client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Jenkins server
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use vigil_client::JenkinsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = JenkinsClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the Jenkins server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JenkinsClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JenkinsClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = JenkinsClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
