//! Mapping of enrichment-service responses to score rows.

use crate::consts::{MISSENSE_VARIANT, UNMATCHED_INPUT};
use crate::models::{EnrichmentScore, VepResult};

/// Converts decoded VEP results into [`EnrichmentScore`] rows.
///
/// A result contributes one row per transcript consequence that both
/// carries a polyphen score and lists `missense_variant` among its
/// consequence terms; zero, one, or many rows per result. Results whose
/// `input` echo is absent keep the `"?"` placeholder so a mismatched echo
/// stays visible in the output. Repeated locations are not deduplicated.
pub fn map_scores(results: &[VepResult]) -> Vec<EnrichmentScore> {
    let mut scores = Vec::new();

    for result in results {
        let input = result.input.as_deref().unwrap_or(UNMATCHED_INPUT);
        let Some(consequences) = &result.transcript_consequences else {
            continue;
        };
        for consequence in consequences {
            if let Some(score) = consequence.polyphen_score
                && consequence.consequence_terms.iter().any(|t| t == MISSENSE_VARIANT)
            {
                scores.push(EnrichmentScore {
                    genomic_location: input.to_string(),
                    polyphen_score: score,
                });
            }
        }
    }

    scores
}
