//! Output shapes of the resolved views.

pub mod event_roster;
pub mod member_schedule;
pub mod position_groups;

pub use event_roster::{EventRoster, RosterSlot};
pub use member_schedule::{MemberSchedule, ScheduledEvent};
pub use position_groups::{PositionGroup, PositionGroupEvent};
