//! Tabular guest-record importer.
//!
//! Converts pasted CSV/TSV/semicolon-delimited text into a normalized list
//! of [`planner_model::GuestRecord`]s: detect the delimiter over the whole
//! paste, split each line, resolve the first line as header or data, coerce
//! raw fields, and drop fully blank rows. One pass, no retained state.

pub mod delimiter;
pub mod error;
pub mod header;
pub mod importer;
pub mod line;
pub mod normalize;

pub use delimiter::{Delimiter, detect_delimiter};
pub use error::{ImportError, Result};
pub use header::{ColumnLayout, ColumnTarget, resolve_columns};
pub use importer::{accept_json, import};
pub use line::split_line;
pub use normalize::{RawRecord, normalize_date, normalize_record, strip_outer_quotes};
