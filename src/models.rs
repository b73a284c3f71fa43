//! Core data structures for CVE dataset processing.
//!
//! Defines the vulnerability record, the ranked output bundle,
//! and the processing statistics reported after a run.

use std::fmt;
use std::io::{self, Write};

/// One vulnerability entry from the NVD export.
///
/// Fields are kept as opaque strings in the dataset's column order.
/// A record is built once from a fully reassembled logical row and is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnRecord {
    pub cve_id: String,
    pub modified_date: String,
    pub published_date: String,
    pub cvss_score: String,
    pub cwe_code: String,
    pub cwe_name: String,
    pub summary: String,
    pub access_authentication: String,
    pub access_complexity: String,
    pub access_vector: String,
    pub impact_availability: String,
    pub impact_confidentiality: String,
    pub impact_integrity: String,
}

impl fmt::Display for VulnRecord {
    /// Render the record as one CSV line: the 13 fields in dataset order,
    /// comma-joined with no re-quoting. Quoting stripped during parsing
    /// does not survive the round trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.cve_id,
            self.modified_date,
            self.published_date,
            self.cvss_score,
            self.cwe_code,
            self.cwe_name,
            self.summary,
            self.access_authentication,
            self.access_complexity,
            self.access_vector,
            self.impact_availability,
            self.impact_confidentiality,
            self.impact_integrity
        )
    }
}

/// Processing statistics for one ranking run
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub physical_lines: usize,
    pub continuations_merged: usize,
    pub records_ranked: usize,
    pub processing_time_ms: u128,
}

/// The sorted dataset produced by a processing run: the unchanged header
/// line plus the records in ascending impact-to-access order.
#[derive(Debug)]
pub struct RankedDataset {
    pub header: String,
    pub records: Vec<VulnRecord>,
    pub stats: ProcessingStats,
}

impl RankedDataset {
    /// Write the header followed by one CSV line per record
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", self.header)?;
        for record in &self.records {
            writeln!(writer, "{}", record)?;
        }
        Ok(())
    }
}
