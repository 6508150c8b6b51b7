//! Breakfast-checklist directory: filtering, counts, ordering, keys.

use std::cmp::Ordering;

use planner_model::{CheckedState, GuestRecord, MealService};

/// Meal-plan filter choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlanFilter {
    #[default]
    All,
    /// Match a specific upper-cased plan code (`BB`, `RO`, ...).
    Code(String),
}

/// Checked-status filter choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Checked,
    NotChecked,
}

/// Combined directory filter, mirroring the search box and the two selects.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub query: String,
    pub plan: PlanFilter,
    pub status: StatusFilter,
}

/// Counts shown in the directory's summary pills, computed over the
/// filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryCounts {
    pub total: usize,
    pub breakfast: usize,
    pub room_only: usize,
    pub checked: usize,
}

/// Stable-ish identity for a guest within the checked-state store:
/// room, lower-cased name, and arrival date. A booking id from the property
/// system would be a better key if one were available.
pub fn guest_key(guest: &GuestRecord) -> String {
    format!(
        "{}|{}|{}",
        guest.room.trim(),
        guest.guest_name.trim().to_lowercase(),
        guest.arrival_date.trim()
    )
}

/// Every field joined into one lower-cased haystack for substring search.
pub fn searchable_string(guest: &GuestRecord) -> String {
    [
        guest.room.as_str(),
        guest.guest_name.as_str(),
        guest.arrival_date.as_str(),
        guest.departure_date.as_str(),
        guest.rate_code.as_str(),
        guest.meal_plan.as_str(),
        guest.company.as_str(),
        &guest.adults.to_string(),
        &guest.children.to_string(),
        &guest.infants.to_string(),
        guest.notes.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Apply the directory filter over the full guest list.
pub fn filter<'a>(
    records: &'a [GuestRecord],
    filter: &DirectoryFilter,
    checked: &CheckedState,
) -> Vec<&'a GuestRecord> {
    let query = filter.query.trim().to_lowercase();
    records
        .iter()
        .filter(|guest| {
            if let PlanFilter::Code(code) = &filter.plan
                && guest.meal_plan.to_uppercase() != *code
            {
                return false;
            }
            let is_checked = checked.is_checked(&guest_key(guest));
            match filter.status {
                StatusFilter::Checked if !is_checked => return false,
                StatusFilter::NotChecked if is_checked => return false,
                _ => {}
            }
            query.is_empty() || searchable_string(guest).contains(&query)
        })
        .collect()
}

/// Summary pill counts over an already-filtered view.
pub fn counts(filtered: &[&GuestRecord], checked: &CheckedState) -> DirectoryCounts {
    DirectoryCounts {
        total: filtered.len(),
        breakfast: filtered
            .iter()
            .filter(|g| MealService::classify(&g.meal_plan) == MealService::Breakfast)
            .count(),
        room_only: filtered
            .iter()
            .filter(|g| MealService::classify(&g.meal_plan) == MealService::RoomOnly)
            .count(),
        checked: filtered
            .iter()
            .filter(|g| checked.is_checked(&guest_key(g)))
            .count(),
    }
}

/// Numeric-aware comparison so room `9` sorts before room `10` and mixed
/// identifiers (`2A`, `10B`) still order sensibly.
pub fn compare_rooms(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lc), Some(rc)) => {
                if lc.is_ascii_digit() && rc.is_ascii_digit() {
                    let lnum = take_digits(&mut left);
                    let rnum = take_digits(&mut right);
                    let ordering = compare_digit_runs(&lnum, &rnum);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                } else {
                    let ordering = lc.cmp(&rc);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                    left.next();
                    right.next();
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        run.push(ch);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Sort a filtered view by room for display.
pub fn sort_by_room(view: &mut [&GuestRecord]) {
    view.sort_by(|a, b| compare_rooms(&a.room, &b.room));
}

/// One-line summary suitable for the clipboard.
pub fn summary_line(guest: &GuestRecord) -> String {
    let plan = guest.meal_plan.to_uppercase();
    let payment = match MealService::classify(&plan) {
        MealService::RoomOnly => "PAY",
        MealService::Breakfast => "FREE",
        MealService::Other => "UNKNOWN",
    };
    format!(
        "Room {} · {} · {} · Breakfast: {}",
        guest.room, guest.guest_name, plan, payment
    )
}
