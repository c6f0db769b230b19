//! Extraction of normalized [`VariantRecord`] rows from raw features.

use crate::consts::{
    LIKELY_PATHOGENIC, MISSING_MUTATION, PATHOGENIC, UNCERTAIN_SIGNIFICANCE, UNKNOWN_LOCATION,
};
use crate::errors::ExtractError;
use crate::models::{Feature, VariantRecord};

/// Converts one raw feature into a normalized record, or signals that the
/// feature should be discarded.
///
/// Features without a `clinicalSignificances` list, or whose significance
/// types are all non-qualifying, yield `Ok(None)`. A qualifying feature
/// whose `begin` field is missing or non-numeric is malformed; the caller
/// decides whether to skip it, but no position is ever fabricated.
///
/// # Arguments
/// - feature: one entry of the variation service's `features` list
///
/// # Returns
/// - `Ok(Some(record))` for qualifying features, `Ok(None)` otherwise
pub fn extract_record(feature: &Feature) -> Result<Option<VariantRecord>, ExtractError> {
    let Some(significances) = &feature.clinical_significances else {
        return Ok(None);
    };

    let mut significance = String::new();
    let mut sources = String::new();
    let mut review_status = String::new();
    let mut qualifying = false;

    for entry in significances {
        // Non-qualifying entries contribute nothing but never disqualify
        // the feature on their own.
        if matches!(
            entry.kind.as_str(),
            PATHOGENIC | LIKELY_PATHOGENIC | UNCERTAIN_SIGNIFICANCE
        ) {
            qualifying = true;
            significance.push_str(&entry.kind);
            sources.push_str(&entry.sources.join(", "));
            if let Some(status) = &entry.review_status {
                review_status.push_str(status);
            }
        }
    }

    if !qualifying {
        return Ok(None);
    }

    let begin = feature
        .begin
        .as_deref()
        .ok_or(ExtractError::MissingPosition)?;
    let position: u64 = begin
        .parse()
        .map_err(|_| ExtractError::MalformedPosition(begin.to_string()))?;

    let wild_type = feature.wild_type.as_deref().unwrap_or_default();
    let mutated = feature.mutated_type.as_deref().unwrap_or(MISSING_MUTATION);
    let change = format!("{wild_type}{begin}{mutated}");

    let mut description = String::new();
    if let Some(descriptions) = &feature.descriptions {
        for entry in descriptions {
            if let Some(value) = &entry.value {
                description.push_str(value);
                description.push_str(", ");
            }
        }
    }

    let genomic_location = feature
        .genomic_location
        .clone()
        .unwrap_or_else(|| vec![UNKNOWN_LOCATION.to_string()]);

    Ok(Some(VariantRecord {
        position,
        change,
        description,
        genomic_location,
        significance,
        sources,
        review_status,
    }))
}
