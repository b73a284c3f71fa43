//! Record parsing for logical CSV rows.
//!
//! Splits one reassembled row into the 13 record fields, handling quoted
//! fields that contain embedded commas and the newlines re-joined by
//! reassembly. Closing-quote detection deliberately follows the dataset's
//! observed quote balance rather than strict CSV semantics: a token ending
//! in an escaped `""` pair keeps the field open, while a single trailing
//! quote (or an escaped pair followed by the closing quote, `"""`) ends it.

use crate::constants::RECORD_FIELD_COUNT;
use crate::error::{RankerError, Result};
use crate::models::VulnRecord;
use tracing::warn;

/// Parse one logical row into a [`VulnRecord`].
///
/// Fewer than 13 fields is a fatal [`RankerError::MalformedRecord`].
/// Surplus fields are dropped with a warning, matching the dataset's
/// fixed 13-column layout.
pub fn parse_record(row: &str) -> Result<VulnRecord> {
    let fields = split_fields(row);

    if fields.len() < RECORD_FIELD_COUNT {
        return Err(RankerError::MalformedRecord {
            row_id: row.split(',').next().unwrap_or_default().to_string(),
            expected: RECORD_FIELD_COUNT,
            found: fields.len(),
        });
    }

    if fields.len() > RECORD_FIELD_COUNT {
        warn!(
            "Record '{}' has {} fields, dropping {} surplus",
            fields[0],
            fields.len(),
            fields.len() - RECORD_FIELD_COUNT
        );
    }

    let mut fields = fields.into_iter();
    let mut next = move || fields.next().unwrap_or_default();

    Ok(VulnRecord {
        cve_id: next(),
        modified_date: next(),
        published_date: next(),
        cvss_score: next(),
        cwe_code: next(),
        cwe_name: next(),
        summary: next(),
        access_authentication: next(),
        access_complexity: next(),
        access_vector: next(),
        impact_availability: next(),
        impact_confidentiality: next(),
        impact_integrity: next(),
    })
}

/// Split a row on commas, re-joining the pieces of quoted fields.
///
/// A token opening with `"` absorbs subsequent tokens until the quoting
/// closes, re-inserting the comma the split removed and trimming each
/// continuation piece. The enclosing quote pair of an absorbed field is
/// stripped; inner `""` escapes are kept as-is.
fn split_fields(row: &str) -> Vec<String> {
    let tokens: Vec<&str> = row.split(',').collect();
    let mut fields = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if token.starts_with('"') {
            let mut field = String::from(token);
            let mut tail = token;
            while quote_still_open(tail) && i + 1 < tokens.len() {
                i += 1;
                tail = tokens[i].trim();
                field.push(',');
                field.push_str(tail);
            }
            fields.push(strip_enclosing_quotes(&field));
        } else {
            fields.push(token.to_string());
        }
        i += 1;
    }

    fields
}

/// Quote-balance check on the last piece of a quoted field.
///
/// Open: no trailing quote, or a trailing escaped `""` pair.
/// Closed: a single trailing quote, or `"""` (escape then close).
fn quote_still_open(token: &str) -> bool {
    !token.ends_with("\"\"\"") && (token.ends_with("\"\"") || !token.ends_with('"'))
}

fn strip_enclosing_quotes(field: &str) -> String {
    let inner = field.strip_prefix('"').unwrap_or(field);
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}
