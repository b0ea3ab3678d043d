//! Member-centric projection: the events one member is assigned to.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use common::{EventId, TeamId, TemplateId};
use domain::{Event, Member, ReminderInterval};
use serde::{Deserialize, Serialize};

/// An event as seen from one member's schedule.
///
/// The event's assignment list is never carried here: the single assignment
/// matching the schedule's member is collapsed into `position_name`, so a
/// view scoped to one member cannot leak other members' slot data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub event_id: EventId,
    pub name: String,
    pub description: String,
    pub template: Option<TemplateId>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reminder_interval: ReminderInterval,
    pub reminder_enabled: bool,
    pub team_id: TeamId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub position_name: String,
}

impl ScheduledEvent {
    /// Flattens an event and the member's matched position label.
    pub(crate) fn from_event(event: Event, position_name: String) -> Self {
        Self {
            event_id: event.id,
            name: event.name,
            description: event.description,
            template: event.template,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            reminder_interval: event.reminder_interval,
            reminder_enabled: event.reminder_enabled,
            team_id: event.team_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
            position_name,
        }
    }
}

/// A member's profile with their assigned events, ascending by
/// (date, startTime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSchedule {
    pub member: Member,
    pub events: Vec<ScheduledEvent>,
}
