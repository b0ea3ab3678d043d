//! Event-centric projection: one event's slots with member profiles.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use common::{AssignmentId, EventId, MemberId, TemplateId};
use domain::{Event, Member, assignment};
use serde::{Deserialize, Serialize};

/// One position slot with its resolved member.
///
/// `member` is `None` for an unfilled slot and for a reference that no
/// longer resolves; the slot is present either way (outer-join, not inner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSlot {
    pub assignment_id: AssignmentId,
    pub description: String,
    pub position_name: String,
    pub member: Option<Member>,
}

/// An event with its fully resolved roster, slots in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRoster {
    pub event_id: EventId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub template: Option<TemplateId>,
    pub roster: Vec<RosterSlot>,
}

impl EventRoster {
    /// Reassembles an event with its roster from a prefetched member map.
    pub(crate) fn assemble(event: Event, members: &HashMap<MemberId, Member>) -> Self {
        let roster = assignment::expand(&event, members)
            .into_iter()
            .map(|resolved| RosterSlot {
                assignment_id: resolved.assignment.id,
                description: resolved.assignment.description,
                position_name: resolved.assignment.position_name,
                member: resolved.member,
            })
            .collect();

        Self {
            event_id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            created_at: event.created_at,
            updated_at: event.updated_at,
            template: event.template,
            roster,
        }
    }
}
