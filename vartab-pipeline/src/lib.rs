//! Batch orchestration: one accession at a time, strictly sequential.
//!
//! Per accession the driver runs fetch → extract → write significances →
//! filter → chunk → enrich → append polyphen sheets. Failures are scoped:
//! a malformed feature or a failed chunk never aborts its accession, and
//! a failed accession never aborts the batch. The only cross-accession
//! state is the final [`BatchReport`].

use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use vartab_client::{ClientError, EnrichmentSource, VariationSource};
use vartab_core::models::VariantRecord;
use vartab_core::{chunk_locations, enrichment_targets, extract_record, map_scores};
use vartab_tables::AccessionWorkbook;

/// Primary fetch failure for one accession.
#[derive(Debug)]
pub struct FetchFailure {
    pub accession: String,
    pub error: ClientError,
}

/// Enrichment failure for one chunk of one accession. Sibling chunks
/// still proceed; the chunk's scores are simply absent from the output.
#[derive(Debug)]
pub struct EnrichmentFailure {
    pub accession: String,
    /// 1-based chunk number within the accession.
    pub chunk: usize,
    pub error: ClientError,
}

/// Outcome of a batch run. Fetch failures keep the order the accessions
/// were attempted in.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub fetch_failures: Vec<FetchFailure>,
    pub enrichment_failures: Vec<EnrichmentFailure>,
}

impl BatchReport {
    /// Identifiers of the accessions whose primary fetch failed, in
    /// attempt order. This is the batch's user-visible failure summary.
    pub fn failed_accessions(&self) -> Vec<&str> {
        self.fetch_failures
            .iter()
            .map(|f| f.accession.as_str())
            .collect()
    }
}

/// De-duplicates an accession list, keeping first occurrences in order.
/// Runs once, before the per-accession state machine is entered.
pub fn dedup_accessions(accessions: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(accessions.len());
    for accession in accessions {
        if !seen.iter().any(|s| s == accession) {
            seen.push(accession.clone());
        }
    }
    seen
}

/// Runs the whole batch: every accession in input order, one workbook
/// each, and a final report of what failed.
///
/// # Arguments
/// - variation: source of variant features per accession
/// - enrichment: source of impact scores per location chunk
/// - accessions: already de-duplicated accession identifiers
/// - out_dir: root output directory, one workbook per accession below it
pub fn run_batch<V: VariationSource, E: EnrichmentSource>(
    variation: &V,
    enrichment: &E,
    accessions: &[String],
    out_dir: &Path,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    let bar = ProgressBar::new(accessions.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        )
        .unwrap()
        .progress_chars("##-"),
    );

    for accession in accessions {
        bar.set_message(accession.clone());
        process_accession(variation, enrichment, accession, out_dir, &mut report)?;
        bar.inc(1);
    }
    bar.finish_with_message("done");

    Ok(report)
}

/// Drives one accession through the fetch → extract → filter → enrich
/// state machine. Only local I/O errors propagate; service failures are
/// recorded in the report.
fn process_accession<V: VariationSource, E: EnrichmentSource>(
    variation: &V,
    enrichment: &E,
    accession: &str,
    out_dir: &Path,
    report: &mut BatchReport,
) -> Result<()> {
    let features = match variation.fetch_features(accession) {
        Ok(features) => features,
        Err(error) => {
            eprintln!("Fetch failed for {accession}: {error}");
            report.fetch_failures.push(FetchFailure {
                accession: accession.to_string(),
                error,
            });
            return Ok(());
        }
    };

    let mut records: Vec<VariantRecord> = Vec::new();
    for feature in &features {
        match extract_record(feature) {
            // Non-qualifying features are not errors; drop them silently.
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(error) => {
                eprintln!("Skipping malformed feature in {accession}: {error}");
            }
        }
    }

    let workbook = AccessionWorkbook::create(out_dir, accession)?;
    workbook.write_significances(&records)?;
    println!(
        "{}: wrote {} significance row(s)",
        accession,
        records.len()
    );

    let targets = enrichment_targets(&records);
    if targets.is_empty() {
        // Nothing meaningful to submit; not an error.
        return Ok(());
    }

    for (index, chunk) in chunk_locations(&targets).enumerate() {
        let number = index + 1;
        match enrichment.score_locations(chunk) {
            Ok(results) => {
                let scores = map_scores(&results);
                workbook.append_polyphen_sheet(number, &scores)?;
                println!(
                    "{}: wrote {} polyphen score(s) for chunk {}",
                    accession,
                    scores.len(),
                    number
                );
            }
            Err(error) => {
                eprintln!("Enrichment failed for {accession} chunk {number}: {error}");
                report.enrichment_failures.push(EnrichmentFailure {
                    accession: accession.to_string(),
                    chunk: number,
                    error,
                });
            }
        }
    }

    Ok(())
}
