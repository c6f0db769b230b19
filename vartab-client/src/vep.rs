//! Client for the VEP enrichment service.

use std::env;
use std::time::Duration;

use vartab_core::models::VepResult;

use super::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_VEP_API, VEP_API_ENV};
use super::errors::ClientError;
use super::EnrichmentSource;

/// Get the VEP API URL from the environment, falling back to the public
/// Ensembl endpoint.
pub fn get_default_vep_api() -> String {
    env::var(VEP_API_ENV).unwrap_or_else(|_| DEFAULT_VEP_API.to_string())
}

/// Request body for one enrichment call.
pub fn enrichment_body(locations: &[String]) -> serde_json::Value {
    serde_json::json!({ "hgvs_notations": locations })
}

/// Builder for constructing a [`VepClient`] with custom configuration.
#[derive(Default)]
pub struct VepClientBuilder {
    api: Option<String>,
    timeout: Option<Duration>,
}

impl VepClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the VEP API URL.
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates a VepClient.
    pub fn finish(self) -> VepClient {
        let api = self.api.unwrap_or_else(get_default_vep_api);
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        VepClient { api, agent }
    }
}

/// Client scoring chunks of HGVS notations through the VEP endpoint.
pub struct VepClient {
    api: String,
    agent: ureq::Agent,
}

impl VepClient {
    pub fn builder() -> VepClientBuilder {
        VepClientBuilder::default()
    }
}

impl EnrichmentSource for VepClient {
    /// Submits one chunk of locations and decodes the per-variant result
    /// list. The caller is responsible for keeping chunks within the
    /// service's 200-notation limit.
    fn score_locations(&self, locations: &[String]) -> Result<Vec<VepResult>, ClientError> {
        let results: Vec<VepResult> = self
            .agent
            .post(&self.api)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(enrichment_body(locations))?
            .into_json()?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn body_wraps_locations_under_hgvs_notations() {
        let locations = vec!["loc1".to_string(), "loc2".to_string()];
        assert_eq!(
            enrichment_body(&locations),
            serde_json::json!({ "hgvs_notations": ["loc1", "loc2"] })
        );
    }

    #[test]
    fn body_for_empty_chunk_is_an_empty_list() {
        assert_eq!(
            enrichment_body(&[]),
            serde_json::json!({ "hgvs_notations": [] })
        );
    }
}
