//! Logical row reassembly for line-split records.
//!
//! Naive line-based reading breaks CVE rows whose quoted summary field
//! contains embedded newlines: one logical record arrives as several
//! physical lines. Only the first of those lines carries the `CVE-`
//! identifier prefix, so any line without the prefix is a continuation
//! of the row before it and is merged back, joined by a newline.

use crate::constants::is_record_start;
use crate::error::{RankerError, Result};
use tracing::debug;

/// Merge continuation lines into their owning logical rows.
///
/// Takes the data lines of the dataset (header already removed) and
/// returns one string per logical record. Every returned row starts
/// with the identifier prefix and the output length is at most the
/// input length.
///
/// The first data line must itself start a record; a continuation with
/// no predecessor is a fatal [`RankerError::OrphanContinuation`].
pub fn merge_continuations(lines: Vec<String>) -> Result<Vec<String>> {
    let mut rows: Vec<String> = Vec::with_capacity(lines.len());
    let mut current: Option<String> = None;
    let mut merged = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        if is_record_start(&line) {
            if let Some(row) = current.take() {
                rows.push(row);
            }
            current = Some(line);
        } else {
            match current.as_mut() {
                Some(row) => {
                    row.push('\n');
                    row.push_str(&line);
                    merged += 1;
                }
                None => {
                    return Err(RankerError::OrphanContinuation {
                        line_number: index + 1,
                        line,
                    });
                }
            }
        }
    }

    if let Some(row) = current {
        rows.push(row);
    }

    if merged > 0 {
        debug!("Merged {} continuation lines into {} rows", merged, rows.len());
    }

    Ok(rows)
}
