//! JSON and CSV export of accepted lists.

use anyhow::{Context, Result};

use planner_model::{Event, GuestField, GuestRecord};

/// Pretty JSON for the output area / download surface.
pub fn guests_to_json(records: &[GuestRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serialize guest list")
}

pub fn events_to_json(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("serialize event catalog")
}

/// CSV export with the canonical column order as the header row.
pub fn guests_to_csv(records: &[GuestRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(GuestField::CANONICAL_ORDER.iter().map(GuestField::json_name))
        .context("write csv header")?;
    for record in records {
        writer
            .write_record([
                record.room.as_str(),
                record.guest_name.as_str(),
                record.arrival_date.as_str(),
                record.departure_date.as_str(),
                record.rate_code.as_str(),
                record.meal_plan.as_str(),
                record.company.as_str(),
                &record.adults.to_string(),
                &record.children.to_string(),
                &record.infants.to_string(),
                record.notes.as_str(),
            ])
            .context("write csv row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flush csv writer: {err}"))?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}
