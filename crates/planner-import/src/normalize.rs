//! Coercion of raw row fields into a normalized guest record.

use planner_model::{Count, GuestField, GuestRecord};

/// Raw string values for one row, keyed by canonical field.
///
/// Missing columns read as the empty string, matching how short rows are
/// padded during assembly.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    values: [Option<String>; GuestField::CANONICAL_ORDER.len()],
}

impl RawRecord {
    pub fn set(&mut self, field: GuestField, value: String) {
        self.values[field.index()] = Some(value);
    }

    pub fn get(&self, field: GuestField) -> &str {
        self.values[field.index()].as_deref().unwrap_or("")
    }
}

/// Strip exactly one leading and one trailing literal `"` if present.
///
/// Doubled internal quotes are NOT collapsed; accepted fixtures depend on
/// that, so the incomplete unescaping is kept as-is.
pub fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && all_digits(&value[0..4])
        && all_digits(&value[5..7])
        && all_digits(&value[8..10])
}

fn rewrite_day_first(value: &str, separator: char) -> Option<String> {
    let mut parts = value.split(separator);
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if day.len() == 2
        && month.len() == 2
        && year.len() == 4
        && all_digits(day)
        && all_digits(month)
        && all_digits(year)
    {
        Some(format!("{year}-{month}-{day}"))
    } else {
        None
    }
}

/// Normalize a date cell to `YYYY-MM-DD` where the format is recognized.
///
/// `DD.MM.YYYY` and `DD/MM/YYYY` are rewritten; already-ISO values pass
/// through; any other non-empty value passes through verbatim rather than
/// being rejected.
pub fn normalize_date(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }
    if is_iso_date(value) {
        return value.to_string();
    }
    if let Some(rewritten) = rewrite_day_first(value, '.') {
        return rewritten;
    }
    if let Some(rewritten) = rewrite_day_first(value, '/') {
        return rewritten;
    }
    value.to_string()
}

/// Build one guest record from raw row values.
pub fn normalize_record(raw: &RawRecord) -> GuestRecord {
    GuestRecord {
        room: raw.get(GuestField::Room).trim().to_string(),
        guest_name: raw.get(GuestField::GuestName).trim().to_string(),
        arrival_date: normalize_date(raw.get(GuestField::ArrivalDate)),
        departure_date: normalize_date(raw.get(GuestField::DepartureDate)),
        rate_code: raw.get(GuestField::RateCode).trim().to_string(),
        meal_plan: raw.get(GuestField::MealPlan).trim().to_uppercase(),
        company: raw.get(GuestField::Company).trim().to_string(),
        adults: Count::parse(raw.get(GuestField::Adults)),
        children: Count::parse(raw.get(GuestField::Children)),
        infants: Count::parse(raw.get(GuestField::Infants)),
        notes: raw.get(GuestField::Notes).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_rewrites() {
        assert_eq!(normalize_date("21.12.2025"), "2025-12-21");
        assert_eq!(normalize_date("21/12/2025"), "2025-12-21");
        assert_eq!(normalize_date("2025-12-21"), "2025-12-21");
        assert_eq!(normalize_date("Dec 21"), "Dec 21");
        assert_eq!(normalize_date("  "), "");
    }

    #[test]
    fn outer_quotes_stripped_once() {
        assert_eq!(strip_outer_quotes("\"Garcia, Maria\""), "Garcia, Maria");
        assert_eq!(strip_outer_quotes("\"open"), "open");
        assert_eq!(strip_outer_quotes("say \"\"hi\"\""), "say \"\"hi\"");
    }

    #[test]
    fn counts_coerce_with_sentinel() {
        let mut raw = RawRecord::default();
        raw.set(GuestField::Room, "101".to_string());
        raw.set(GuestField::Adults, "2".to_string());
        raw.set(GuestField::Children, "two".to_string());
        let record = normalize_record(&raw);
        assert_eq!(record.adults, Count::Known(2));
        assert_eq!(record.children, Count::Unknown);
        assert_eq!(record.infants, Count::Unknown);
    }
}
