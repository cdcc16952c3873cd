pub mod helper;
pub mod income;
pub mod progress;
pub mod skill;
pub mod user;

#[cfg(all(test, feature = "server"))]
mod test;

use reqwest::Client;
use url::Url;

use crate::client::model::error::ApiError;

/// HTTP client bound to one API server.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the API served at `base_url` (e.g. `http://localhost:8080`).
    ///
    /// # Returns
    /// - `Ok(ApiClient)` - Client ready for use
    /// - `Err(ApiError)` - `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError {
            status: 500,
            message: format!("Invalid API URL '{}': {}", base_url, e),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError {
                status: 500,
                message: format!("Invalid API URL '{}': not a base URL", base_url),
            });
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Builds the URL for `segments` below the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError {
                status: 500,
                message: format!("Invalid API URL '{}'", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
