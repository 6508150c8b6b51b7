pub mod repository;

pub use repository::{CheckedRepository, GuestRepository, QuestRepository};
