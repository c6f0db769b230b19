//! Selection of enrichment-eligible genomic locations.

use crate::consts::{UNCERTAIN_SIGNIFICANCE, UNKNOWN_LOCATION};
use crate::models::VariantRecord;

/// Collects the genomic locations worth submitting for enrichment.
///
/// Records whose significance is exactly "Variant of uncertain
/// significance" are tracked for reporting but excluded from the costlier
/// secondary lookup. The `unknown` sentinel carries no coordinates and is
/// dropped from the submission; an empty result means enrichment is
/// skipped for the accession.
pub fn enrichment_targets(records: &[VariantRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.significance != UNCERTAIN_SIGNIFICANCE)
        .flat_map(|record| record.genomic_location.iter())
        .filter(|location| location.as_str() != UNKNOWN_LOCATION)
        .cloned()
        .collect()
}
