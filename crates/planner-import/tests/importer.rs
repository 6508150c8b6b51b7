//! End-to-end importer behavior over pasted text.

use planner_import::{ImportError, accept_json, import};
use planner_model::Count;

#[test]
fn header_paste_normalizes_and_drops_blank_rows() {
    let text = "Room,Guest,Arrival,Plan\n\
                101,Smith John,21/12/2025,bb\n\
                ,,, \n\
                102,\"Garcia, Maria\",2025-12-20,ro\n";

    let records = import(text).expect("import paste");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].room, "101");
    assert_eq!(records[0].guest_name, "Smith John");
    assert_eq!(records[0].arrival_date, "2025-12-21");
    assert_eq!(records[0].meal_plan, "BB");

    assert_eq!(records[1].room, "102");
    assert_eq!(records[1].guest_name, "Garcia, Maria");
    assert_eq!(records[1].arrival_date, "2025-12-20");
    assert_eq!(records[1].meal_plan, "RO");
}

#[test]
fn headerless_paste_uses_canonical_column_order() {
    let records = import("101,SMITH,2025-01-01").expect("import data row");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].room, "101");
    assert_eq!(records[0].guest_name, "SMITH");
    assert_eq!(records[0].arrival_date, "2025-01-01");
}

#[test]
fn tab_delimiter_wins_even_with_commas_present() {
    let text = "Room\tGuest\tCompany\n101\tSmith, John\tBOOKING.COM B.V.";
    let records = import(text).expect("import tsv");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].guest_name, "Smith, John");
    assert_eq!(records[0].company, "BOOKING.COM B.V.");
}

#[test]
fn semicolon_paste_without_commas() {
    let text = "Room;Guest;Plan\n201;NOVAK PETRA;ro";
    let records = import(text).expect("import semicolons");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].room, "201");
    assert_eq!(records[0].meal_plan, "RO");
}

#[test]
fn crlf_line_endings_are_accepted() {
    let text = "Room,Guest\r\n101,Smith\r\n102,Garcia\r\n";
    let records = import(text).expect("import crlf");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].guest_name, "Garcia");
}

#[test]
fn row_with_only_notes_is_dropped() {
    let text = "Room,Guest,Arrival,Departure,Rate,Plan,Company,Adults,Children,Infants,Notes\n\
                ,,,,,,,,,,wake-up call";
    let records = import(text).expect("import notes-only row");
    assert!(records.is_empty());
}

#[test]
fn non_numeric_count_yields_sentinel_not_zero() {
    let text = "Room,Guest,Adults\n101,Smith,two";
    let records = import(text).expect("import bad count");
    assert_eq!(records[0].adults, Count::Unknown);
    let json = serde_json::to_value(&records[0]).expect("serialize record");
    assert_eq!(json["adults"], "");
}

#[test]
fn unparseable_dates_pass_through_verbatim() {
    // Lenient by design: malformed dates are accepted, not rejected.
    let text = "Room,Guest,Arrival\n101,Smith,Dec 21st";
    let records = import(text).expect("import odd date");
    assert_eq!(records[0].arrival_date, "Dec 21st");
}

#[test]
fn unknown_headers_are_ignored_without_error() {
    let text = "Room,Booking Ref,Guest\n101,XK-441,Smith";
    let records = import(text).expect("import extra column");
    assert_eq!(records[0].room, "101");
    assert_eq!(records[0].guest_name, "Smith");
}

#[test]
fn short_rows_pad_with_empty_fields() {
    let text = "Room,Guest,Arrival,Plan\n101,Smith";
    let records = import(text).expect("import short row");
    assert_eq!(records[0].arrival_date, "");
    assert_eq!(records[0].meal_plan, "");
}

#[test]
fn empty_paste_is_a_descriptive_error() {
    let err = import("   \n \t \n").expect_err("empty paste");
    assert!(matches!(err, ImportError::EmptyInput));
    assert_eq!(err.to_string(), "nothing to import: pasted text is empty");
}

#[test]
fn import_is_deterministic() {
    let text = "Room,Guest,Arrival\n101,Smith,21.12.2025\n102,Garcia,2025-12-20";
    assert_eq!(import(text).unwrap(), import(text).unwrap());
}

#[test]
fn accepts_edited_json_back() {
    let json = r#"[
        {"room": 101, "guestName": "SMITH, JOHN", "mealPlan": "bb", "adults": 2},
        {"room": "", "guestName": "  ", "notes": "blank row"}
    ]"#;
    let records = accept_json(json).expect("accept json");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].room, "101");
    assert_eq!(records[0].meal_plan, "BB");
    assert_eq!(records[0].adults, Count::Known(2));
}

#[test]
fn rejects_non_array_json() {
    let err = accept_json("{\"room\": \"101\"}").expect_err("object, not array");
    assert_eq!(
        err.to_string(),
        "guest JSON must be an array of guest objects"
    );
}
