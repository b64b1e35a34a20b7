//! HTTP gateway to the catalog server.
//!
//! Single point of contact with the remote resource: no caching, no retry,
//! purely a translation boundary between the wire and the typed error
//! taxonomy in [`crate::infra::services`].

use log::{info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::infra::config::ClientConfig;
use crate::infra::services::{ServiceError, ServiceResult};

/// HTTP client for the books resource.
///
/// Stateless with respect to entities; cheap to clone and safe to share
/// read-only across controllers.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        info!("[ApiClient] Created API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Create a client from runtime configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.server_url())
    }

    /// Build a full URL from a path relative to the base URL.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let path = path.as_ref();
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ServiceResult<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {url}");
        self.execute_request(self.client.get(url)).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> ServiceResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {url} (with query)");
        self.execute_request(self.client.get(url).query(query)).await
    }

    /// PUT a JSON body, returning the stored representation.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        log::debug!("[ApiClient] PUT {url}");
        self.execute_request(self.client.put(url).json(body)).await
    }

    /// Send a request and translate status and body into the error taxonomy.
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ServiceResult<T> {
        let response = request
            .send()
            .await
            .map_err(|error| ServiceError::Transport(error.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|error| ServiceError::Decode(error.to_string())),
            StatusCode::NOT_FOUND => {
                // The tail of the request path names the missing resource.
                let id = response
                    .url()
                    .path_segments()
                    .and_then(|mut segments| segments.next_back())
                    .unwrap_or_default()
                    .to_string();
                Err(ServiceError::NotFound { id })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let detail = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!("[ApiClient] Request rejected by server: {detail}");
                Err(ServiceError::Validation(detail))
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!("[ApiClient] Request failed with status {status}: {error_text}");
                Err(ServiceError::Transport(format!(
                    "status {status}: {error_text}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:4730");
        assert_eq!(
            client.build_url("/books/42"),
            "http://localhost:4730/books/42"
        );
        assert_eq!(client.build_url("books/42"), "http://localhost:4730/books/42");
    }

    #[test]
    fn build_url_tolerates_trailing_slash() {
        let client = ApiClient::new("http://localhost:4730/");
        assert_eq!(client.build_url("/books"), "http://localhost:4730/books");
    }

    #[test]
    fn build_url_passes_absolute_urls_through() {
        let client = ApiClient::new("http://localhost:4730");
        assert_eq!(
            client.build_url("https://elsewhere.example/books"),
            "https://elsewhere.example/books"
        );
    }

    #[test]
    fn from_config_uses_the_configured_endpoint() {
        let config = ClientConfig::new("http://catalog.test:9000");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.build_url("/books"), "http://catalog.test:9000/books");
    }
}
