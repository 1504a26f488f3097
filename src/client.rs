/*!
 * HTTP client for the NPI Registry API
 *
 * One [`RegistryClient`] owns one reusable connection handle. `search` is
 * the single read operation; there is no write path against the registry.
 */

use std::time::Duration;

use crate::config::RegistryConfig;
use crate::data_types::ProviderRecord;
use crate::response::RegistryEnvelope;
use crate::search::SearchParameters;
use crate::{NpiRegistryError, Result};

/// Client for the NPPES NPI Registry API
///
/// The underlying HTTP connection handle is acquired at construction and
/// reused across `search` calls; release it with [`RegistryClient::close`]
/// when finished. The client keeps no other state - each search is
/// independent.
#[derive(Debug)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client using the process-wide configuration
    pub fn new() -> Result<Self> {
        Self::with_config(crate::config::global_config())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http = builder
            .build()
            .map_err(|e| NpiRegistryError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                suggestion: Some("Check your network configuration".to_string()),
            })?;

        Ok(Self { config, http })
    }

    /// The registry endpoint this client queries
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Search the registry and return the normalized matches
    ///
    /// Issues a single GET against the configured endpoint and maps each
    /// result entry into a [`ProviderRecord`], preserving response order.
    /// A response without a `results` key yields an empty list. Any failure
    /// (transport, non-success status, malformed body, malformed entry)
    /// aborts the whole call; there are no partial results and no retries.
    pub async fn search(&self, params: &SearchParameters) -> Result<Vec<ProviderRecord>> {
        let query = params.to_query_pairs();
        tracing::debug!(url = %self.config.base_url, params = query.len(), "querying NPI registry");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| NpiRegistryError::unexpected("registry request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NpiRegistryError::http_status(
                status.as_u16(),
                &self.config.base_url,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NpiRegistryError::unexpected("failed reading registry response body", e))?;
        let envelope: RegistryEnvelope = serde_json::from_str(&body)?;

        let records = envelope
            .results
            .into_iter()
            .map(|entry| entry.into_record())
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(matches = records.len(), "mapped registry response");
        Ok(records)
    }

    /// Release the owned connection handle
    ///
    /// Consuming the client makes double-close unrepresentable; closing a
    /// never-used client is fine.
    pub fn close(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_on_a_never_used_client() {
        let client = RegistryClient::with_config(RegistryConfig::default()).unwrap();
        client.close();
    }

    #[test]
    fn transport_failure_surfaces_as_unexpected() {
        let config = RegistryConfig {
            // Nothing listens on the discard port
            base_url: "http://127.0.0.1:9/api/".to_string(),
            timeout_seconds: 5,
            ..RegistryConfig::default()
        };
        let client = RegistryClient::with_config(config).unwrap();
        let params = SearchParameters::default();

        let err = tokio_test::block_on(client.search(&params)).unwrap_err();
        match err {
            NpiRegistryError::Unexpected { source, .. } => {
                assert!(source.is_connect() || source.is_timeout());
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
    }
}
