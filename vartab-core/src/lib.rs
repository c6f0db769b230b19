//! # Variant annotation core pipeline
//!
//! This crate holds the pure data-transformation half of vartab:
//!
//! - serde models for the variation-service and VEP-service schemas
//! - extraction of normalized [`VariantRecord`] rows from raw features
//! - selection of enrichment-eligible genomic locations
//! - request-sized chunking of oversized location lists
//! - mapping of VEP responses to polyphen score rows
//!
//! Nothing here performs I/O; the HTTP clients live in `vartab-client`
//! and the table writer in `vartab-tables`.

pub mod chunk;
pub mod consts;
pub mod enrich;
pub mod errors;
pub mod extract;
pub mod filter;
pub mod models;

pub use chunk::chunk_locations;
pub use enrich::map_scores;
pub use errors::ExtractError;
pub use extract::extract_record;
pub use filter::enrichment_targets;
pub use models::{
    ClinicalSignificance, Description, EnrichmentScore, Feature, TranscriptConsequence,
    VariantRecord, VariationResponse, VepResult,
};
