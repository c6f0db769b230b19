//! Data models for the two upstream JSON schemas and the derived rows.
//!
//! Every field the upstream services may omit is an `Option` (or a
//! defaulted list); absence is decided at extraction time, never masked
//! with implicit empty strings.

use serde::Deserialize;

/// Body of a variation-service response for one accession.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariationResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One raw annotation entry from the variation service's `features` list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub clinical_significances: Option<Vec<ClinicalSignificance>>,
    pub descriptions: Option<Vec<Description>>,
    pub wild_type: Option<String>,
    /// Position of the variant, as the string the service sends it in.
    pub begin: Option<String>,
    pub mutated_type: Option<String>,
    pub genomic_location: Option<Vec<String>>,
}

/// One clinical significance classification attached to a feature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalSignificance {
    /// Classification label, e.g. "Pathogenic".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub sources: Vec<String>,
    pub review_status: Option<String>,
}

/// One free-text description attached to a feature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    pub value: Option<String>,
}

/// Normalized output row derived from one qualifying [`Feature`].
///
/// A record exists only for features carrying at least one clinical
/// significance of a qualifying type; all other features are dropped
/// entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    pub position: u64,
    /// Amino-acid change, composed as wildType + position + mutatedType
    /// (or the `missing` token when no mutated residue is given).
    pub change: String,
    /// Comma-joined description values; empty when the feature has none.
    pub description: String,
    /// HGVS location strings, or the `["unknown"]` sentinel.
    pub genomic_location: Vec<String>,
    /// Concatenation of every qualifying significance label seen.
    pub significance: String,
    pub sources: String,
    pub review_status: String,
}

/// One per-submitted-variant result object from the enrichment service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VepResult {
    /// The HGVS notation echoed back from the request.
    pub input: Option<String>,
    pub transcript_consequences: Option<Vec<TranscriptConsequence>>,
}

/// One transcript-level consequence within a [`VepResult`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptConsequence {
    pub polyphen_score: Option<f64>,
    #[serde(default)]
    pub consequence_terms: Vec<String>,
}

/// Pair of (genomic location as submitted, polyphen impact score).
///
/// Emitted once per qualifying transcript consequence; repeated locations
/// are kept as separate rows, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentScore {
    pub genomic_location: String,
    pub polyphen_score: f64,
}
