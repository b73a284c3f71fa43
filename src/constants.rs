//! Application constants for the CVE ranker.
//!
//! This module contains the fixed dataset layout values and the
//! categorical level names used by the scoring tables.

// =============================================================================
// Dataset Layout
// =============================================================================

/// Input dataset filename, resolved against the working directory
pub const DATASET_FILENAME: &str = "dataset.csv";

/// Prefix that marks the start of a new logical record row
pub const ROW_ID_PREFIX: &str = "CVE-";

/// Number of fields in every data record
pub const RECORD_FIELD_COUNT: usize = 13;

// =============================================================================
// Categorical Levels
// =============================================================================

/// Impact levels found in the availability, confidentiality and integrity
/// columns. Anything else scores zero.
pub mod impact_levels {
    pub const COMPLETE: &str = "COMPLETE";
    pub const PARTIAL: &str = "PARTIAL";
    pub const NONE: &str = "NONE";
}

/// Access complexity levels. Anything else scores zero.
pub mod access_levels {
    pub const HIGH: &str = "HIGH";
    pub const MEDIUM: &str = "MEDIUM";
    pub const LOW: &str = "LOW";
}

/// Check whether a line opens a new logical record row
pub fn is_record_start(line: &str) -> bool {
    line.starts_with(ROW_ID_PREFIX)
}
