//! Client for the variation annotation service.

use std::env;
use std::time::Duration;

use vartab_core::models::{Feature, VariationResponse};

use super::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_VARIATION_API, VARIATION_API_ENV};
use super::errors::ClientError;
use super::VariationSource;

/// Get the variation API base from the environment, falling back to the
/// public UniProt endpoint.
pub fn get_default_variation_api() -> String {
    env::var(VARIATION_API_ENV).unwrap_or_else(|_| DEFAULT_VARIATION_API.to_string())
}

/// Builder for constructing a [`VariationClient`] with custom configuration.
#[derive(Default)]
pub struct VariationClientBuilder {
    api: Option<String>,
    timeout: Option<Duration>,
}

impl VariationClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variation API base URL.
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a VariationClient.
    pub fn finish(self) -> VariationClient {
        let api = self.api.unwrap_or_else(get_default_variation_api);
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        VariationClient { api, agent }
    }
}

/// Client fetching variant features by protein accession.
pub struct VariationClient {
    api: String,
    agent: ureq::Agent,
}

impl VariationClient {
    pub fn builder() -> VariationClientBuilder {
        VariationClientBuilder::default()
    }

    fn accession_url(&self, accession: &str) -> String {
        format!("{}/{}?format=json", self.api, accession)
    }
}

impl VariationSource for VariationClient {
    /// Fetches the `features` list for one accession. A non-200 status is
    /// a hard failure for the accession; the caller records it and moves
    /// on.
    fn fetch_features(&self, accession: &str) -> Result<Vec<Feature>, ClientError> {
        let url = self.accession_url(accession);
        let response: VariationResponse = self.agent.get(&url).call()?.into_json()?;
        Ok(response.features)
    }
}
