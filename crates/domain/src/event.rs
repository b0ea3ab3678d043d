//! Event scheduling units and their embedded position assignments.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use common::{AssignmentId, EventId, MemberId, TeamId, TemplateId};
use serde::{Deserialize, Serialize};

/// Lead time before an event at which a reminder fires, in minutes.
///
/// Any non-negative minute count is representable; the named constants are
/// the intervals the scheduling UI offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReminderInterval(i64);

impl ReminderInterval {
    pub const FIFTEEN_MINUTES: Self = Self(15);
    pub const THIRTY_MINUTES: Self = Self(30);
    pub const ONE_HOUR: Self = Self(60);
    pub const TWO_HOURS: Self = Self(120);
    pub const THREE_HOURS: Self = Self(180);
    pub const ONE_DAY: Self = Self(24 * 60);
    pub const TWO_DAYS: Self = Self(48 * 60);
    pub const ONE_WEEK: Self = Self(7 * 24 * 60);

    /// Creates an interval from a raw minute count.
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Returns the interval in minutes.
    pub fn minutes(&self) -> i64 {
        self.0
    }

    /// Returns the interval as a chrono duration.
    pub fn as_duration(&self) -> Duration {
        Duration::minutes(self.0)
    }
}

impl std::fmt::Display for ReminderInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.0)
    }
}

/// A named slot within an event, optionally filled by a member reference.
///
/// Owned exclusively by its parent event; the id is only unique within that
/// event. An unfilled slot has no member reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAssignment {
    pub id: AssignmentId,
    pub position_name: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_member_ref")]
    pub member_id: Option<MemberId>,
}

impl PositionAssignment {
    /// Creates an unfilled slot with a generated id.
    pub fn new(position_name: impl Into<String>) -> Self {
        Self {
            id: AssignmentId::generate(),
            position_name: position_name.into(),
            description: String::new(),
            member_id: None,
        }
    }

    /// Sets the slot description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Fills the slot with a member reference.
    pub fn assigned_to(mut self, member_id: MemberId) -> Self {
        self.member_id = Some(member_id);
        self
    }

    /// Returns true if the slot holds a member reference.
    pub fn is_filled(&self) -> bool {
        self.member_id.is_some()
    }
}

/// Unassignment is stored as an empty string in legacy documents; normalize
/// both null and "" to an unfilled slot.
fn deserialize_member_ref<'de, D>(deserializer: D) -> Result<Option<MemberId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(MemberId::from))
}

/// A scheduled occurrence with a date, a time window, and position needs.
///
/// The assignment list preserves insertion order on output, but order
/// carries no meaning for matching; it is treated as a set, with a
/// deterministic first-match tie-break where duplicates violate the
/// one-assignment-per-member invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub template: Option<TemplateId>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reminder_interval: ReminderInterval,
    pub reminder_enabled: bool,
    pub team_id: TeamId,
    #[serde(default)]
    pub position_assignments: Vec<PositionAssignment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Creates an event with no assignments and freshly stamped timestamps.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        team_id: TeamId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: String::new(),
            template: None,
            date,
            start_time,
            end_time,
            reminder_interval: ReminderInterval::default(),
            reminder_enabled: false,
            team_id,
            position_assignments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a position assignment slot.
    pub fn with_assignment(mut self, assignment: PositionAssignment) -> Self {
        self.position_assignments.push(assignment);
        self
    }

    /// Returns true if any assignment in this event references the member.
    pub fn references_member(&self, member_id: &MemberId) -> bool {
        crate::assignment::find_for_member(self, member_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event::new(
            EventId::new("e-1"),
            "Sunday AM Service",
            NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            TeamId::new("t-1"),
        )
    }

    #[test]
    fn reminder_interval_constants() {
        assert_eq!(ReminderInterval::FIFTEEN_MINUTES.minutes(), 15);
        assert_eq!(ReminderInterval::ONE_DAY.minutes(), 1440);
        assert_eq!(ReminderInterval::ONE_WEEK.as_duration(), Duration::weeks(1));
    }

    #[test]
    fn new_event_has_no_assignments() {
        assert!(sample_event().position_assignments.is_empty());
    }

    #[test]
    fn references_member_matches_assigned_slot() {
        let member_id = MemberId::new("m-1");
        let event = sample_event()
            .with_assignment(PositionAssignment::new("Usher").assigned_to(member_id.clone()));

        assert!(event.references_member(&member_id));
        assert!(!event.references_member(&MemberId::new("m-2")));
    }

    #[test]
    fn unfilled_slot_is_not_a_reference() {
        let event = sample_event().with_assignment(PositionAssignment::new("Usher"));
        assert!(!event.references_member(&MemberId::new("m-1")));
    }

    #[test]
    fn empty_string_member_ref_deserializes_as_unfilled() {
        let json = r#"{
            "id": "pa-1",
            "positionName": "Usher",
            "description": "",
            "memberId": ""
        }"#;
        let slot: PositionAssignment = serde_json::from_str(json).unwrap();
        assert!(!slot.is_filled());

        let json_null = r#"{"id": "pa-2", "positionName": "Greeter", "description": ""}"#;
        let slot: PositionAssignment = serde_json::from_str(json_null).unwrap();
        assert!(slot.member_id.is_none());
    }

    #[test]
    fn event_serializes_with_camel_case_fields() {
        let event = sample_event();
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("startTime").is_some());
        assert!(json.get("reminderEnabled").is_some());
        assert!(json.get("positionAssignments").is_some());
        assert!(json.get("start_time").is_none());
    }

    #[test]
    fn event_serialization_roundtrip_preserves_assignment_order() {
        let event = sample_event()
            .with_assignment(PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")))
            .with_assignment(PositionAssignment::new("Greeter"))
            .with_assignment(PositionAssignment::new("Sound").assigned_to(MemberId::new("m-2")));

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
        assert_eq!(back.position_assignments[1].position_name, "Greeter");
    }
}
