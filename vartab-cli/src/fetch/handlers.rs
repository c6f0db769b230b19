use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use vartab_client::{VariationClient, VepClient};
use vartab_pipeline::{dedup_accessions, run_batch};

/// Splits the comma-separated accession argument into a clean list:
/// trimmed, empties dropped, first occurrences kept in order.
pub fn parse_accessions(raw: &str) -> Vec<String> {
    let accessions: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    dedup_accessions(&accessions)
}

/// Execute the fetch command from CLI
/// # Arguments
/// - matches: matched items from CLAP args
pub fn run_fetch(matches: &ArgMatches) -> Result<()> {
    let raw = matches
        .get_one::<String>("accessions")
        .expect("Accession list is required");
    let accessions = parse_accessions(raw);
    if accessions.is_empty() {
        anyhow::bail!("No accessions given");
    }

    let out_dir = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tables"));

    let mut variation_builder = VariationClient::builder();
    if let Some(api) = matches.get_one::<String>("variation-api") {
        variation_builder = variation_builder.with_api(api.clone());
    }
    let variation = variation_builder.finish();

    let mut vep_builder = VepClient::builder();
    if let Some(api) = matches.get_one::<String>("vep-api") {
        vep_builder = vep_builder.with_api(api.clone());
    }
    let vep = vep_builder.finish();

    println!(
        "Processing {} accession(s) into {}",
        accessions.len(),
        out_dir.display()
    );
    let report = run_batch(&variation, &vep, &accessions, &out_dir)?;

    for failure in &report.enrichment_failures {
        println!(
            "Missing polyphen scores for {} chunk {}: {}",
            failure.accession, failure.chunk, failure.error
        );
    }

    let failed = report.failed_accessions();
    if failed.is_empty() {
        println!("All accessions processed.");
    } else {
        println!("Failed accessions: {}", failed.join(", "));
    }

    Ok(())
}
