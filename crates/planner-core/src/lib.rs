//! Domain logic behind each planning-desk view.
//!
//! Everything here is pure, synchronous transformation over in-memory
//! lists; persistence and rendering live in the neighboring crates.

pub mod events;
pub mod fnb;
pub mod guests;
pub mod menu;
pub mod quests;
pub mod schedule;

pub use events::{EventDraft, EventFilter};
pub use fnb::TimelineItem;
pub use guests::{DirectoryCounts, DirectoryFilter, PlanFilter, StatusFilter};
pub use menu::{MenuEntry, MenuSection, MenuSelection};
pub use schedule::{ScheduleEntry, ScheduleGrid};
