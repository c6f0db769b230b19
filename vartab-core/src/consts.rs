//! Constants shared across the extraction and enrichment pipeline.

// Clinical significance labels

/// Significance label for variants with established pathogenicity.
pub const PATHOGENIC: &str = "Pathogenic";

/// Significance label for variants with probable pathogenicity.
pub const LIKELY_PATHOGENIC: &str = "Likely pathogenic";

/// Significance label for variants of uncertain significance. Qualifies a
/// feature for extraction but excludes its record from enrichment.
pub const UNCERTAIN_SIGNIFICANCE: &str = "Variant of uncertain significance";

// Sentinels and tokens

/// Sentinel genomic location used when the variation service provides none.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Token appended to `change` when the feature carries no mutated residue.
pub const MISSING_MUTATION: &str = "missing";

/// Echo identifier used when a VEP result omits its `input` field, so a
/// mismatched echo stays visible in the output instead of being dropped.
pub const UNMATCHED_INPUT: &str = "?";

/// Consequence term that qualifies a transcript consequence for scoring.
pub const MISSENSE_VARIANT: &str = "missense_variant";

// Request shaping

/// Maximum HGVS notations the enrichment service accepts in one request.
pub const MAX_LOCATIONS_PER_REQUEST: usize = 200;
