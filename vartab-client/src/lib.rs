//! Blocking HTTP clients for the two upstream annotation services.
//!
//! [`VariationClient`] fetches a protein accession's variant features from
//! the UniProt Proteins variation API; [`VepClient`] scores batches of
//! HGVS notations through the Ensembl VEP endpoint. Both are plain
//! sequential `ureq` clients with a fixed per-call timeout and no retry
//! or caching.
//!
//! The orchestrator in `vartab-pipeline` talks to the services through
//! the [`VariationSource`] and [`EnrichmentSource`] traits, keeping the
//! pipeline testable without a network.

pub mod consts;
pub mod errors;
pub mod variation;
pub mod vep;

pub use errors::ClientError;
pub use variation::{VariationClient, VariationClientBuilder};
pub use vep::{VepClient, VepClientBuilder};

use vartab_core::models::{Feature, VepResult};

/// Upstream source of variant features for one accession.
pub trait VariationSource {
    fn fetch_features(&self, accession: &str) -> Result<Vec<Feature>, ClientError>;
}

/// Upstream source of impact scores for a chunk of genomic locations.
pub trait EnrichmentSource {
    fn score_locations(&self, locations: &[String]) -> Result<Vec<VepResult>, ClientError>;
}
