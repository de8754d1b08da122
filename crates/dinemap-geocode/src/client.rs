//! HTTP transport for a Nominatim-compatible free-text search endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::Candidate;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Client for the `/search` endpoint.
///
/// Use [`NominatimClient::new`] for the public instance or
/// [`NominatimClient::with_base_url`] to point at a mock server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom search URL.
    ///
    /// `user_agent` identifies the application; Nominatim's usage policy
    /// rejects requests without one. A `timeout_secs` of `0` leaves requests
    /// unbounded, so callers must apply their own deadline.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`GeocodeError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        let base_url = Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Runs one free-text search and returns the candidates in response order.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network or TLS failure.
    /// - [`GeocodeError::UnexpectedStatus`] on any non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not a candidate array.
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, GeocodeError> {
        let url = self.search_url(query);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<Candidate>>(&body).map_err(|e| GeocodeError::Deserialize {
            context: format!("search(q={query})"),
            source: e,
        })
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("addressdetails", "1");
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> NominatimClient {
        NominatimClient::with_base_url("dinemap-test/0.1", 5, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_appends_fixed_params() {
        let client = test_client("https://nominatim.openstreetmap.org/search");
        let url = client.search_url("Sala Thai, CBD, Melbourne, Australia");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?q=Sala+Thai%2C+CBD%2C+Melbourne%2C+Australia&format=json&limit=1&addressdetails=1"
        );
    }

    #[test]
    fn default_client_targets_public_instance() {
        let client = NominatimClient::new("dinemap-test/0.1", 30)
            .expect("client construction should not fail");
        let url = client.search_url("Sala Thai");
        assert_eq!(url.host_str(), Some("nominatim.openstreetmap.org"));
        assert_eq!(url.path(), "/search");
        assert!(url.as_str().starts_with(DEFAULT_BASE_URL));
    }

    #[test]
    fn search_url_encodes_special_characters() {
        let client = test_client("http://localhost:8080/search");
        let url = client.search_url("Fish & Chips");
        assert!(
            url.as_str().contains("Fish+%26+Chips"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = NominatimClient::with_base_url("dinemap-test/0.1", 5, "not a url");
        assert!(
            matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })),
            "expected InvalidBaseUrl"
        );
    }
}
