//! Single-pass import orchestration.

use planner_model::{GuestField, GuestRecord};
use serde_json::Value;
use tracing::debug;

use crate::delimiter::detect_delimiter;
use crate::error::{ImportError, Result};
use crate::header::{ColumnTarget, resolve_columns};
use crate::line::split_line;
use crate::normalize::{RawRecord, normalize_record, strip_outer_quotes};

/// Convert free-form pasted CSV/TSV/semicolon-delimited text into a
/// normalized guest list.
///
/// Pure and deterministic: no state survives between invocations and
/// re-running with the same input always yields the same output. Either the
/// full normalized list is returned or an error; never partial results.
/// Rows whose `room` and `guestName` are both blank are dropped silently in
/// source order; everything else is kept in source row order.
pub fn import(raw: &str) -> Result<Vec<GuestRecord>> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let delimiter = detect_delimiter(text);
    debug!(%delimiter, "delimiter detected");

    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = split_line(lines[0], delimiter);
    let layout = resolve_columns(&first);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for line in &lines[layout.data_start..] {
        let parts = split_line(line, delimiter);
        if parts.len() == 1 && parts[0].is_empty() {
            continue;
        }

        let mut row = RawRecord::default();
        for (idx, column) in layout.columns.iter().enumerate() {
            let ColumnTarget::Field(field) = column else {
                continue;
            };
            let value = parts.get(idx).map(String::as_str).unwrap_or("");
            row.set(*field, strip_outer_quotes(value.trim()).to_string());
        }

        let record = normalize_record(&row);
        if record.is_retained() {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped fully blank rows");
    }
    Ok(records)
}

/// Accept an edited JSON guest list back into normalized records.
///
/// This is the return path for a list the user round-tripped through the
/// JSON output area: structure is enforced (an array of objects), field
/// values get the same lenient coercion as pasted cells, and the retention
/// filter applies.
pub fn accept_json(text: &str) -> Result<Vec<GuestRecord>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| ImportError::structural(format!("invalid guest JSON: {err}")))?;
    let Some(items) = value.as_array() else {
        return Err(ImportError::structural(
            "guest JSON must be an array of guest objects",
        ));
    };

    let mut records = Vec::new();
    for item in items {
        let mut row = RawRecord::default();
        if let Some(object) = item.as_object() {
            for field in GuestField::CANONICAL_ORDER {
                if let Some(raw) = object.get(field.json_name()) {
                    row.set(field, json_value_to_string(raw));
                }
            }
        }
        let record = normalize_record(&row);
        if record.is_retained() {
            records.push(record);
        }
    }
    Ok(records)
}

fn json_value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
