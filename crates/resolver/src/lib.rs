//! Query-side view resolution for the scheduling system.
//!
//! This crate turns the raw member/event records of a [`store::ScheduleStore`]
//! into the two denormalized projections consumers work with:
//! - [`MemberSchedule`]: the events one member is assigned to, with that
//!   member's position label flattened onto each event
//! - [`EventRoster`]: one event's position slots with full member profiles
//!   attached, unfilled slots preserved
//!
//! plus [`PositionGroup`], the roster re-keyed by position name.
//!
//! Resolution is read-only and stateless: every call is a pure function of
//! the store contents at the time of its fetches. No snapshot atomicity is
//! assumed between fetches; under concurrent writes the result is a
//! best-effort view, not a linearizable one.

pub mod error;
pub mod resolver;
pub mod views;

pub use error::{ResolveError, Result};
pub use resolver::ScheduleResolver;
pub use views::{
    EventRoster, MemberSchedule, PositionGroup, PositionGroupEvent, RosterSlot, ScheduledEvent,
};
