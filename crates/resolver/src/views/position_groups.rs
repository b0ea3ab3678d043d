//! Position-centric projection: events re-keyed by position name.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use common::{EventId, MemberId, TemplateId};
use domain::{Event, Member, assignment};
use serde::{Deserialize, Serialize};

/// An event occurrence under a position heading, with the member holding
/// that position (empty when the slot is unfilled or unresolvable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionGroupEvent {
    pub event_id: EventId,
    pub name: String,
    pub description: String,
    pub template: Option<TemplateId>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member: Option<Member>,
}

/// All occurrences of one position name across events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionGroup {
    pub position_name: String,
    pub events: Vec<PositionGroupEvent>,
}

impl PositionGroup {
    /// Groups every assignment slot across `events` by position name.
    ///
    /// Groups come out ascending by name; within a group, events keep the
    /// order of the input slice. Events with no assignments contribute to
    /// no group.
    pub(crate) fn group(
        events: Vec<Event>,
        members: &HashMap<MemberId, Member>,
    ) -> Vec<PositionGroup> {
        let mut groups: BTreeMap<String, Vec<PositionGroupEvent>> = BTreeMap::new();

        for event in events {
            for resolved in assignment::expand(&event, members) {
                groups
                    .entry(resolved.assignment.position_name)
                    .or_default()
                    .push(PositionGroupEvent {
                        event_id: event.id.clone(),
                        name: event.name.clone(),
                        description: event.description.clone(),
                        template: event.template.clone(),
                        date: event.date,
                        start_time: event.start_time,
                        end_time: event.end_time,
                        created_at: event.created_at,
                        updated_at: event.updated_at,
                        member: resolved.member,
                    });
            }
        }

        groups
            .into_iter()
            .map(|(position_name, events)| PositionGroup {
                position_name,
                events,
            })
            .collect()
    }
}
