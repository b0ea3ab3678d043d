//! Domain layer for the scheduling system.
//!
//! This crate provides the entity records shared by the store and the view
//! resolver:
//! - [`Member`] identity/profile records
//! - [`Event`] scheduling units with embedded [`PositionAssignment`] slots
//! - the [`assignment`] index: pure functions answering which assignment in
//!   an event references a given member, and expanding an event's slots
//!   against resolved member profiles

pub mod assignment;
pub mod event;
pub mod member;

pub use assignment::ResolvedAssignment;
pub use event::{Event, PositionAssignment, ReminderInterval};
pub use member::Member;
