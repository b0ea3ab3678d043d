//! Assignment index: the member/event mapping implied by each event's
//! embedded assignment list.
//!
//! All operations here are total: a lookup that matches nothing returns an
//! absent value, and malformed data (duplicate member references within one
//! event) resolves deterministically rather than erroring.

use std::collections::HashMap;

use common::MemberId;
use serde::{Deserialize, Serialize};

use crate::event::{Event, PositionAssignment};
use crate::member::Member;

/// An assignment slot paired with its resolved member profile.
///
/// `member` is `None` both for an unfilled slot and for a reference that no
/// longer resolves; either way the slot itself is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssignment {
    pub assignment: PositionAssignment,
    pub member: Option<Member>,
}

/// Returns the assignment within `event` that references `member_id`.
///
/// Duplicate references to the same member violate the data model but must
/// not crash: the first match in insertion order wins. Returns `None` when
/// no assignment references the member; never an error.
pub fn find_for_member<'a>(
    event: &'a Event,
    member_id: &MemberId,
) -> Option<&'a PositionAssignment> {
    event
        .position_assignments
        .iter()
        .find(|pa| pa.member_id.as_ref() == Some(member_id))
}

/// Expands every assignment in `event` against a prefetched member map.
///
/// Outer-join semantics: the output has exactly one entry per assignment,
/// in insertion order. A slot whose member reference is absent, or whose
/// lookup misses, carries `member: None` instead of being dropped.
pub fn expand(event: &Event, members: &HashMap<MemberId, Member>) -> Vec<ResolvedAssignment> {
    event
        .position_assignments
        .iter()
        .map(|pa| ResolvedAssignment {
            assignment: pa.clone(),
            member: pa
                .member_id
                .as_ref()
                .and_then(|id| members.get(id))
                .cloned(),
        })
        .collect()
}

/// Collects the distinct member ids referenced across `events`.
///
/// Used to batch the member fetch for roster expansion: gather ids once,
/// fetch once, then zip, instead of a lookup per assignment.
pub fn referenced_member_ids(events: &[Event]) -> Vec<MemberId> {
    let mut seen = std::collections::HashSet::new();
    events
        .iter()
        .flat_map(|e| e.position_assignments.iter())
        .filter_map(|pa| pa.member_id.clone())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use common::{EventId, TeamId};

    fn event_with(assignments: Vec<PositionAssignment>) -> Event {
        let mut event = Event::new(
            EventId::new("e-1"),
            "Sunday AM Service",
            NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            TeamId::new("t-1"),
        );
        event.position_assignments = assignments;
        event
    }

    fn member(id: &str) -> Member {
        Member::new(MemberId::new(id), "First", "Last", "f@l.example", "555")
    }

    #[test]
    fn find_returns_none_when_no_assignment_references_member() {
        let event = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")),
        ]);
        assert!(find_for_member(&event, &MemberId::new("m-2")).is_none());
    }

    #[test]
    fn find_matches_the_referencing_assignment() {
        let event = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")),
            PositionAssignment::new("Greeter").assigned_to(MemberId::new("m-2")),
        ]);

        let pa = find_for_member(&event, &MemberId::new("m-2")).unwrap();
        assert_eq!(pa.position_name, "Greeter");
    }

    #[test]
    fn find_with_duplicate_member_takes_first_in_insertion_order() {
        let event = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")),
            PositionAssignment::new("Greeter").assigned_to(MemberId::new("m-1")),
        ]);

        let pa = find_for_member(&event, &MemberId::new("m-1")).unwrap();
        assert_eq!(pa.position_name, "Usher");
    }

    #[test]
    fn find_skips_unfilled_slots() {
        let event = event_with(vec![PositionAssignment::new("Usher")]);
        assert!(find_for_member(&event, &MemberId::new("m-1")).is_none());
    }

    #[test]
    fn expand_yields_one_entry_per_assignment_preserving_order_and_ids() {
        let event = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")),
            PositionAssignment::new("Greeter"),
            PositionAssignment::new("Sound").assigned_to(MemberId::new("m-2")),
        ]);
        let members: HashMap<_, _> = [(MemberId::new("m-1"), member("m-1"))].into();

        let resolved = expand(&event, &members);

        assert_eq!(resolved.len(), event.position_assignments.len());
        for (entry, pa) in resolved.iter().zip(&event.position_assignments) {
            assert_eq!(entry.assignment.id, pa.id);
        }
        assert_eq!(resolved[0].member.as_ref().unwrap().id, MemberId::new("m-1"));
    }

    #[test]
    fn expand_preserves_unfilled_slot_with_empty_member() {
        let event = event_with(vec![PositionAssignment::new("Greeter")]);
        let resolved = expand(&event, &HashMap::new());

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].member.is_none());
    }

    #[test]
    fn expand_treats_unresolvable_reference_as_empty_member() {
        // Slot references a member the lookup does not know (deleted member).
        let event = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-gone")),
        ]);
        let resolved = expand(&event, &HashMap::new());

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].assignment.is_filled());
        assert!(resolved[0].member.is_none());
    }

    #[test]
    fn expand_of_event_with_no_assignments_is_empty() {
        let event = event_with(vec![]);
        assert!(expand(&event, &HashMap::new()).is_empty());
    }

    #[test]
    fn expand_filtered_to_member_agrees_with_find() {
        let target = MemberId::new("m-1");
        let event = event_with(vec![
            PositionAssignment::new("Greeter").assigned_to(MemberId::new("m-2")),
            PositionAssignment::new("Usher").assigned_to(target.clone()),
            PositionAssignment::new("Sound"),
        ]);

        let from_expand: Vec<_> = expand(&event, &HashMap::new())
            .into_iter()
            .filter(|r| r.assignment.member_id.as_ref() == Some(&target))
            .collect();
        let from_find = find_for_member(&event, &target).unwrap();

        assert_eq!(from_expand.len(), 1);
        assert_eq!(from_expand[0].assignment, *from_find);
    }

    #[test]
    fn referenced_member_ids_dedups_across_events() {
        let e1 = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-1")),
            PositionAssignment::new("Greeter").assigned_to(MemberId::new("m-2")),
        ]);
        let e2 = event_with(vec![
            PositionAssignment::new("Usher").assigned_to(MemberId::new("m-2")),
            PositionAssignment::new("Sound"),
        ]);

        let ids = referenced_member_ids(&[e1, e2]);
        assert_eq!(ids, vec![MemberId::new("m-1"), MemberId::new("m-2")]);
    }
}
