//! Per-accession tabular output.
//!
//! Each accession gets a "workbook": a directory named after the
//! accession holding one CSV sheet per table. The significances sheet is
//! written once per accession; each enrichment chunk appends its own
//! numbered polyphen sheet. Sheets are never reopened once the accession's
//! processing moves on.
//!
//! ```text
//! <out>/P04637/significances.csv
//! <out>/P04637/polyphen_scores_1.csv
//! <out>/P04637/polyphen_scores_2.csv
//! ```

use std::fs::{create_dir_all, read_dir, remove_file};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vartab_core::models::{EnrichmentScore, VariantRecord};

/// File name of the significances sheet.
pub const SIGNIFICANCES_SHEET: &str = "significances.csv";

/// Prefix of the numbered polyphen sheets.
pub const POLYPHEN_SHEET_PREFIX: &str = "polyphen_scores";

/// Column headers of the significances sheet.
pub const SIGNIFICANCE_HEADERS: [&str; 7] = [
    "Position",
    "Change",
    "Description",
    "Genomic Location",
    "Significance",
    "Source(s) of Significance",
    "Significance Review Status",
];

/// Column headers of a polyphen sheet.
pub const POLYPHEN_HEADERS: [&str; 2] = ["Genomic Location", "Polyphen Score"];

/// Output workbook for one accession.
///
/// Creating the workbook clears any sheets left over from a previous run
/// of the same accession, mirroring an overwritten workbook file.
pub struct AccessionWorkbook {
    dir: PathBuf,
}

impl AccessionWorkbook {
    /// Creates (or resets) the workbook directory for an accession.
    ///
    /// # Arguments
    /// - out_dir: root output directory, one workbook per accession below it
    /// - accession: the accession identifier, used as the directory name
    pub fn create(out_dir: &Path, accession: &str) -> Result<Self> {
        let dir = out_dir.join(accession);
        create_dir_all(&dir)
            .with_context(|| format!("Failed to create workbook directory {}", dir.display()))?;

        // Stale sheets from a prior run would otherwise survive next to
        // the fresh ones.
        for entry in read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                remove_file(&path)?;
            }
        }

        Ok(Self { dir })
    }

    /// Path of the workbook directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the significances sheet, one row per record. An accession
    /// with no qualifying records still gets a header-only sheet.
    pub fn write_significances(&self, records: &[VariantRecord]) -> Result<PathBuf> {
        let path = self.dir.join(SIGNIFICANCES_SHEET);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(SIGNIFICANCE_HEADERS)?;
        for record in records {
            writer.write_record([
                record.position.to_string(),
                record.change.clone(),
                record.description.clone(),
                record.genomic_location.join(", "),
                record.significance.clone(),
                record.sources.clone(),
                record.review_status.clone(),
            ])?;
        }
        writer.flush()?;

        Ok(path)
    }

    /// Appends one numbered polyphen sheet for an enrichment chunk.
    ///
    /// # Arguments
    /// - chunk: 1-based chunk number, keeps sibling sheets distinct
    /// - scores: score rows produced from that chunk's response
    pub fn append_polyphen_sheet(
        &self,
        chunk: usize,
        scores: &[EnrichmentScore],
    ) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{POLYPHEN_SHEET_PREFIX}_{chunk}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(POLYPHEN_HEADERS)?;
        for score in scores {
            writer.write_record([
                score.genomic_location.clone(),
                score.polyphen_score.to_string(),
            ])?;
        }
        writer.flush()?;

        Ok(path)
    }
}
