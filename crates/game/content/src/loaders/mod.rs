//! Loaders turning content files into catalogs and registries.
//!
//! Record files are line oriented: one record per line, fields separated by
//! a literal comma-space, each field introduced by its label. The parsers
//! here validate structure before values and report failures through error
//! types whose `Display` output is the exact text logged for the skipped
//! record.

pub mod abilities;
pub mod moves;
pub mod reader;
pub mod types;

pub use abilities::{AbilityParser, AbilityRecordError};
pub use moves::{MoveParser, MoveRecordError};
pub use reader::ContentReader;
pub use types::TypeCatalog;

/// Field separator between record segments.
pub(crate) const FIELD_SEPARATOR: &str = ", ";

/// Segments in a well-formed record line.
pub(crate) const RECORD_SEGMENTS: usize = 4;

/// Sentinel marking an absent energy list or behavior function.
pub(crate) const NONE_SENTINEL: &str = "None";

/// Split one record line on the field separator.
pub(crate) fn split_record(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Strip a segment's label and trim the remaining value.
///
/// Returns `None` when the segment does not start with `label`.
pub(crate) fn field_value<'a>(segment: &'a str, label: &str) -> Option<&'a str> {
    segment.strip_prefix(label).map(str::trim)
}
