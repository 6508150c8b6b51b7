//! Enumerated guest-record field names and header synonym resolution.
//!
//! Pasted exports name their columns inconsistently (`Room No`, `Guest Name`,
//! `Arrival`, ...). Rather than carrying free-form header strings through the
//! importer, every column is resolved to a `GuestField` up front via a fixed
//! synonym table; columns that resolve to nothing are ignored downstream.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eleven canonical guest-record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestField {
    Room,
    GuestName,
    ArrivalDate,
    DepartureDate,
    RateCode,
    MealPlan,
    Company,
    Adults,
    Children,
    Infants,
    Notes,
}

impl GuestField {
    /// Fixed fallback column order assumed when the pasted text has no
    /// header row.
    pub const CANONICAL_ORDER: [GuestField; 11] = [
        GuestField::Room,
        GuestField::GuestName,
        GuestField::ArrivalDate,
        GuestField::DepartureDate,
        GuestField::RateCode,
        GuestField::MealPlan,
        GuestField::Company,
        GuestField::Adults,
        GuestField::Children,
        GuestField::Infants,
        GuestField::Notes,
    ];

    /// Position of this field within the canonical column order.
    pub fn index(&self) -> usize {
        match self {
            GuestField::Room => 0,
            GuestField::GuestName => 1,
            GuestField::ArrivalDate => 2,
            GuestField::DepartureDate => 3,
            GuestField::RateCode => 4,
            GuestField::MealPlan => 5,
            GuestField::Company => 6,
            GuestField::Adults => 7,
            GuestField::Children => 8,
            GuestField::Infants => 9,
            GuestField::Notes => 10,
        }
    }

    /// The field name as it appears in exported JSON documents.
    pub fn json_name(&self) -> &'static str {
        match self {
            GuestField::Room => "room",
            GuestField::GuestName => "guestName",
            GuestField::ArrivalDate => "arrivalDate",
            GuestField::DepartureDate => "departureDate",
            GuestField::RateCode => "rateCode",
            GuestField::MealPlan => "mealPlan",
            GuestField::Company => "company",
            GuestField::Adults => "adults",
            GuestField::Children => "children",
            GuestField::Infants => "infants",
            GuestField::Notes => "notes",
        }
    }

    /// Strip whitespace and hyphens from a raw header cell and lower-case it.
    ///
    /// This is the cleaned form both the synonym table and ignored-column
    /// reporting operate on.
    pub fn clean_header(raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '-')
            .collect::<String>()
            .to_lowercase()
    }

    /// Resolve an arbitrary header spelling to a canonical field.
    ///
    /// Returns `None` for headers outside the synonym table; the importer
    /// keeps those columns around by their cleaned name but never reads them.
    pub fn resolve_header(raw: &str) -> Option<GuestField> {
        let cleaned = Self::clean_header(raw);
        let field = match cleaned.as_str() {
            "room" | "roomno" => GuestField::Room,
            "guest" | "guestname" | "name" => GuestField::GuestName,
            "arrival" | "arrivaldate" => GuestField::ArrivalDate,
            "departure" | "departuredate" => GuestField::DepartureDate,
            "ratecode" => GuestField::RateCode,
            "plan" | "mealplan" => GuestField::MealPlan,
            "company" => GuestField::Company,
            "adult" | "adults" => GuestField::Adults,
            "child" | "children" => GuestField::Children,
            "infant" | "infants" => GuestField::Infants,
            "notes" => GuestField::Notes,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_name())
    }
}
