//! Header-vs-data resolution for the first line of a paste.

use planner_model::GuestField;
use tracing::debug;

/// Keywords that mark a line as a header row when any field contains one
/// (case-insensitive).
const HEADER_KEYWORDS: [&str; 11] = [
    "room",
    "guest",
    "arrival",
    "departure",
    "plan",
    "company",
    "adult",
    "child",
    "infant",
    "notes",
    "rate",
];

/// What one column of the paste maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTarget {
    Field(GuestField),
    /// Header outside the synonym table, kept by its cleaned lower-case
    /// form. The normalizer never reads these columns.
    Ignored(String),
}

/// Resolved column layout for one paste.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub columns: Vec<ColumnTarget>,
    /// Index of the first data line (1 after a header row, else 0).
    pub data_start: usize,
}

fn looks_like_header(fields: &[String]) -> bool {
    fields.iter().any(|field| {
        let lower = field.to_lowercase();
        HEADER_KEYWORDS
            .iter()
            .any(|keyword| lower.contains(keyword))
    })
}

/// Decide whether the already-split first line is a header row and build the
/// column layout accordingly.
///
/// Without a keyword match the paste is assumed headerless and the fixed
/// canonical column order applies, starting at line 0.
pub fn resolve_columns(first_line: &[String]) -> ColumnLayout {
    if looks_like_header(first_line) {
        let columns = first_line
            .iter()
            .map(|raw| match GuestField::resolve_header(raw) {
                Some(field) => ColumnTarget::Field(field),
                None => ColumnTarget::Ignored(GuestField::clean_header(raw)),
            })
            .collect();
        debug!(columns = first_line.len(), "header row detected");
        ColumnLayout {
            columns,
            data_start: 1,
        }
    } else {
        debug!("no header row, assuming canonical column order");
        ColumnLayout {
            columns: GuestField::CANONICAL_ORDER
                .iter()
                .map(|field| ColumnTarget::Field(*field))
                .collect(),
            data_start: 0,
        }
    }
}
