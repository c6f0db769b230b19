//! End-to-end batch tests driven by in-memory service fakes: no network,
//! real workbooks in a temp directory.

use std::cell::RefCell;
use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use vartab_client::{ClientError, EnrichmentSource, VariationSource};
use vartab_core::models::{Feature, VepResult};
use vartab_pipeline::{dedup_accessions, run_batch};

/// Variation service fake: canned features per accession, or a status
/// code to fail with.
struct FakeVariation {
    responses: HashMap<String, Result<Vec<Feature>, u16>>,
}

impl VariationSource for FakeVariation {
    fn fetch_features(&self, accession: &str) -> Result<Vec<Feature>, ClientError> {
        match self.responses.get(accession) {
            Some(Ok(features)) => Ok(features.clone()),
            Some(Err(code)) => Err(ClientError::Status { code: *code }),
            None => Err(ClientError::Status { code: 404 }),
        }
    }
}

/// Enrichment service fake: echoes every submitted location back with a
/// fixed missense score, recording each chunk it was called with.
/// Chunk numbers listed in `fail_chunks` (1-based) fail instead.
struct FakeEnrichment {
    calls: RefCell<Vec<Vec<String>>>,
    fail_chunks: Vec<usize>,
}

impl FakeEnrichment {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_chunks: Vec::new(),
        }
    }

    fn failing_on(chunks: &[usize]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_chunks: chunks.to_vec(),
        }
    }
}

impl EnrichmentSource for FakeEnrichment {
    fn score_locations(&self, locations: &[String]) -> Result<Vec<VepResult>, ClientError> {
        self.calls.borrow_mut().push(locations.to_vec());
        let call_number = self.calls.borrow().len();
        if self.fail_chunks.contains(&call_number) {
            return Err(ClientError::Status { code: 503 });
        }
        Ok(locations
            .iter()
            .map(|location| {
                serde_json::from_value(serde_json::json!({
                    "input": location,
                    "transcript_consequences": [
                        {"polyphen_score": 0.8, "consequence_terms": ["missense_variant"]}
                    ]
                }))
                .unwrap()
            })
            .collect())
    }
}

fn pathogenic_feature(begin: u64, locations: &[&str]) -> Feature {
    serde_json::from_value(serde_json::json!({
        "wildType": "A",
        "begin": begin.to_string(),
        "mutatedType": "G",
        "clinicalSignificances": [
            {"type": "Pathogenic", "sources": ["ClinVar"], "reviewStatus": "reviewed"}
        ],
        "genomicLocation": locations,
    }))
    .unwrap()
}

fn uncertain_feature(begin: u64, locations: &[&str]) -> Feature {
    serde_json::from_value(serde_json::json!({
        "wildType": "A",
        "begin": begin.to_string(),
        "clinicalSignificances": [
            {"type": "Variant of uncertain significance", "sources": ["ClinVar"]}
        ],
        "genomicLocation": locations,
    }))
    .unwrap()
}

fn accessions(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn successful_accession_gets_both_sheets() {
    let out = tempdir().unwrap();
    let variation = FakeVariation {
        responses: HashMap::from([(
            "P1".to_string(),
            Ok(vec![
                pathogenic_feature(5, &["loc1"]),
                uncertain_feature(9, &["loc2"]),
            ]),
        )]),
    };
    let enrichment = FakeEnrichment::new();

    let report = run_batch(&variation, &enrichment, &accessions(&["P1"]), out.path()).unwrap();

    assert!(report.fetch_failures.is_empty());
    assert!(report.enrichment_failures.is_empty());
    assert!(out.path().join("P1/significances.csv").exists());
    assert!(out.path().join("P1/polyphen_scores_1.csv").exists());

    // The uncertain record is reported but never submitted for scoring.
    assert_eq!(*enrichment.calls.borrow(), vec![vec!["loc1".to_string()]]);

    let significances = std::fs::read_to_string(out.path().join("P1/significances.csv")).unwrap();
    assert_eq!(significances.lines().count(), 3);
}

#[test]
fn failed_fetch_is_recorded_and_siblings_proceed() {
    let out = tempdir().unwrap();
    let variation = FakeVariation {
        responses: HashMap::from([
            ("P1".to_string(), Ok(vec![pathogenic_feature(5, &["loc1"])])),
            ("P2".to_string(), Err(500)),
        ]),
    };
    let enrichment = FakeEnrichment::new();

    let report = run_batch(
        &variation,
        &enrichment,
        &accessions(&["P1", "P2"]),
        out.path(),
    )
    .unwrap();

    assert_eq!(report.failed_accessions(), vec!["P2"]);
    assert!(out.path().join("P1/significances.csv").exists());
    assert!(!out.path().join("P2").exists());
}

#[test]
fn uncertain_only_accession_skips_enrichment() {
    let out = tempdir().unwrap();
    let variation = FakeVariation {
        responses: HashMap::from([(
            "P1".to_string(),
            Ok(vec![uncertain_feature(5, &["loc1"])]),
        )]),
    };
    let enrichment = FakeEnrichment::new();

    let report = run_batch(&variation, &enrichment, &accessions(&["P1"]), out.path()).unwrap();

    assert!(report.fetch_failures.is_empty());
    assert!(enrichment.calls.borrow().is_empty());
    assert!(out.path().join("P1/significances.csv").exists());
    assert!(!out.path().join("P1/polyphen_scores_1.csv").exists());
}

#[test]
fn unknown_only_locations_skip_enrichment() {
    let out = tempdir().unwrap();
    let variation = FakeVariation {
        responses: HashMap::from([(
            "P1".to_string(),
            Ok(vec![pathogenic_feature(5, &["unknown"])]),
        )]),
    };
    let enrichment = FakeEnrichment::new();

    run_batch(&variation, &enrichment, &accessions(&["P1"]), out.path()).unwrap();

    assert!(enrichment.calls.borrow().is_empty());
}

#[test]
fn oversized_target_list_is_chunked_and_chunk_failures_are_scoped() {
    let out = tempdir().unwrap();

    // One record with 250 locations forces two chunks of 200 and 50.
    let locations: Vec<String> = (0..250).map(|i| format!("loc{i}")).collect();
    let location_refs: Vec<&str> = locations.iter().map(String::as_str).collect();
    let variation = FakeVariation {
        responses: HashMap::from([(
            "P1".to_string(),
            Ok(vec![pathogenic_feature(5, &location_refs)]),
        )]),
    };
    let enrichment = FakeEnrichment::failing_on(&[1]);

    let report = run_batch(&variation, &enrichment, &accessions(&["P1"]), out.path()).unwrap();

    let calls = enrichment.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].len(), 200);
    assert_eq!(calls[1].len(), 50);

    // First chunk failed: its sheet is absent, the sibling's is present,
    // and nothing lands in the fetch-failure summary.
    assert_eq!(report.enrichment_failures.len(), 1);
    assert_eq!(report.enrichment_failures[0].chunk, 1);
    assert!(report.fetch_failures.is_empty());
    assert!(!out.path().join("P1/polyphen_scores_1.csv").exists());
    assert!(out.path().join("P1/polyphen_scores_2.csv").exists());
}

#[test]
fn malformed_feature_is_skipped_not_fatal() {
    let out = tempdir().unwrap();
    let malformed: Feature = serde_json::from_value(serde_json::json!({
        "wildType": "A",
        "begin": "not-a-number",
        "clinicalSignificances": [{"type": "Pathogenic", "sources": []}],
    }))
    .unwrap();
    let variation = FakeVariation {
        responses: HashMap::from([(
            "P1".to_string(),
            Ok(vec![malformed, pathogenic_feature(5, &["loc1"])]),
        )]),
    };
    let enrichment = FakeEnrichment::new();

    let report = run_batch(&variation, &enrichment, &accessions(&["P1"]), out.path()).unwrap();

    assert!(report.fetch_failures.is_empty());
    let significances = std::fs::read_to_string(out.path().join("P1/significances.csv")).unwrap();
    // Header plus the one well-formed record.
    assert_eq!(significances.lines().count(), 2);
}

#[test]
fn accession_list_is_deduplicated_before_orchestration() {
    let input = accessions(&["P1", "P2", "P1"]);
    assert_eq!(dedup_accessions(&input), vec!["P1", "P2"]);
}
