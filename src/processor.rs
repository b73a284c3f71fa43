//! Dataset processing pipeline.
//!
//! Orchestrates the complete ranking workflow: read the dataset file,
//! split off the header, reassemble logical rows, parse records, and
//! sort by impact-to-access ratio. The whole dataset is held in memory
//! for the duration of the run.

use crate::error::{RankerError, Result};
use crate::models::{ProcessingStats, RankedDataset, VulnRecord};
use crate::parser::parse_record;
use crate::ranking::sort_by_ratio;
use crate::reassembly::merge_continuations;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Processor for one CVE dataset file
pub struct DatasetProcessor {
    dataset_path: PathBuf,
}

impl DatasetProcessor {
    /// Create a processor for the given dataset path
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
        }
    }

    /// Run the full pipeline and return the ranked dataset.
    ///
    /// Any failure (missing file, orphan continuation, malformed record)
    /// aborts the run; there is no partial output.
    pub fn process(&self) -> Result<RankedDataset> {
        let start_time = Instant::now();

        if !self.dataset_path.exists() {
            return Err(RankerError::DatasetNotFound {
                path: self.dataset_path.clone(),
            });
        }

        let (header, lines) = self.read_dataset()?;
        let physical_lines = lines.len();
        debug!(
            "Read {} data lines from {}",
            physical_lines,
            self.dataset_path.display()
        );

        let rows = merge_continuations(lines)?;
        let continuations_merged = physical_lines - rows.len();

        let mut records = rows
            .iter()
            .map(|row| parse_record(row))
            .collect::<Result<Vec<VulnRecord>>>()?;

        sort_by_ratio(&mut records);

        let stats = ProcessingStats {
            physical_lines,
            continuations_merged,
            records_ranked: records.len(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };
        debug!(
            "Ranked {} records ({} continuations merged) in {}ms",
            stats.records_ranked, stats.continuations_merged, stats.processing_time_ms
        );

        Ok(RankedDataset {
            header,
            records,
            stats,
        })
    }

    /// Read the dataset file, returning the header line and the raw data
    /// lines. The file handle is released when this returns, on success
    /// or failure.
    fn read_dataset(&self) -> Result<(String, Vec<String>)> {
        let file = File::open(&self.dataset_path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => strip_carriage_return(line?),
            None => {
                return Err(RankerError::MissingHeader {
                    path: self.dataset_path.clone(),
                });
            }
        };

        let mut data = Vec::new();
        for line in lines {
            data.push(strip_carriage_return(line?));
        }

        Ok((header, data))
    }
}

/// `BufRead::lines` keeps the `\r` of CRLF line endings; drop it so
/// Windows-saved datasets tokenize identically.
fn strip_carriage_return(line: String) -> String {
    match line.strip_suffix('\r') {
        Some(stripped) => stripped.to_string(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_dataset_is_reported() {
        let err = DatasetProcessor::new("no-such-dataset.csv")
            .process()
            .unwrap_err();
        assert!(matches!(err, RankerError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_empty_dataset_has_no_header() {
        let file = NamedTempFile::new().unwrap();
        let err = DatasetProcessor::new(file.path()).process().unwrap_err();
        assert!(matches!(err, RankerError::MissingHeader { .. }));
    }

    #[test]
    fn test_header_only_dataset_ranks_nothing() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ID,MOD,PUB,CVSS,CODE,NAME,SUMMARY,AUTH,COMPLEXITY,VECTOR,AVAIL,CONF,INTEG")
            .unwrap();

        let dataset = DatasetProcessor::new(file.path()).process().unwrap();
        assert!(dataset.header.starts_with("ID,MOD"));
        assert!(dataset.records.is_empty());
        assert_eq!(dataset.stats.records_ranked, 0);
    }

    #[test]
    fn test_crlf_dataset_reads_cleanly() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "ID,MOD,PUB,CVSS,CODE,NAME,SUMMARY,AUTH,COMPLEXITY,VECTOR,AVAIL,CONF,INTEG\r\n\
             CVE-1,m,p,5.0,CWE-79,XSS,summary,NONE,LOW,NETWORK,NONE,NONE,NONE\r\n"
        )
        .unwrap();

        let dataset = DatasetProcessor::new(file.path()).process().unwrap();
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.records[0].impact_integrity, "NONE");
    }
}
