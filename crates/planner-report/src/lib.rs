//! Rendering and export for the planning-desk CLI: comfy-table views,
//! printable plain text, and JSON/CSV exports.

pub mod directory;
pub mod events_view;
pub mod export;
pub mod menu_view;
pub mod quests_view;
pub mod schedule_view;
pub mod style;
pub mod timeline_view;

pub use directory::{directory_table, guest_detail, pills_line};
pub use events_view::{event_card, events_summary, events_table, format_arrival,
    format_event_date};
pub use export::{events_to_json, guests_to_csv, guests_to_json};
pub use menu_view::printable_menu;
pub use quests_view::{quest_detail, quest_list};
pub use schedule_view::{schedule_summary, schedule_table};
pub use timeline_view::{timeline_summary, timeline_text};
