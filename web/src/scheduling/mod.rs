pub mod conflict;
pub mod grid;
pub mod layout;

pub use conflict::{conflict_message, find_conflict};
pub use grid::{GridConfig, Slot};
pub use layout::{layout_events, LaidOutEvent, ScheduleEvent};
