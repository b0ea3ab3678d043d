//! The view resolver: store fetches, filtering, sorting, reassembly.

use common::{DateRange, EventId, MemberId};
use domain::{Event, assignment};
use store::ScheduleStore;

use crate::error::{ResolveError, Result};
use crate::views::{EventRoster, MemberSchedule, PositionGroup, ScheduledEvent};

/// Resolves denormalized views over a scheduling store.
///
/// The store is injected at construction and is the only collaborator;
/// the resolver itself holds no mutable state, so one instance may serve
/// any number of concurrent callers.
pub struct ScheduleResolver<S: ScheduleStore> {
    store: S,
}

impl<S: ScheduleStore> ScheduleResolver<S> {
    /// Creates a resolver over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves one member's schedule within a date range.
    ///
    /// A member id that doesn't resolve is [`ResolveError::MemberNotFound`],
    /// which is distinct from a member with an empty schedule. An inverted
    /// range yields an empty event list.
    #[tracing::instrument(skip(self))]
    pub async fn member_schedule(
        &self,
        member_id: &MemberId,
        range: DateRange,
    ) -> Result<MemberSchedule> {
        let member = self
            .store
            .get_member_by_id(member_id)
            .await?
            .ok_or_else(|| ResolveError::MemberNotFound(member_id.clone()))?;

        let candidates = self.store.get_events_referencing_member(member_id).await?;
        let events = Self::schedule_events(member_id, candidates, range);

        metrics::counter!("resolver_member_schedules_resolved").increment(1);
        Ok(MemberSchedule { member, events })
    }

    /// Resolves every member's schedule within a date range.
    ///
    /// Members with no matching events appear with an empty event list.
    /// Events are fetched once and matched in-core rather than queried
    /// per member.
    #[tracing::instrument(skip(self))]
    pub async fn member_schedules(&self, range: DateRange) -> Result<Vec<MemberSchedule>> {
        let members = self.store.get_all_members().await?;
        let all_events = self.store.get_all_events(Some(range)).await?;

        let schedules = members
            .into_iter()
            .map(|member| {
                let candidates: Vec<Event> = all_events
                    .iter()
                    .filter(|e| e.references_member(&member.id))
                    .cloned()
                    .collect();
                let events = Self::schedule_events(&member.id, candidates, range);
                MemberSchedule { member, events }
            })
            .collect();

        metrics::counter!("resolver_member_schedules_resolved").increment(1);
        Ok(schedules)
    }

    /// Resolves a single event's roster.
    #[tracing::instrument(skip(self))]
    pub async fn event_roster(&self, event_id: &EventId) -> Result<EventRoster> {
        let event = self
            .store
            .get_event_by_id(event_id)
            .await?
            .ok_or_else(|| ResolveError::EventNotFound(event_id.clone()))?;

        let member_ids = assignment::referenced_member_ids(std::slice::from_ref(&event));
        let members = self.store.get_members_by_ids(&member_ids).await?;

        metrics::counter!("resolver_event_rosters_resolved").increment(1);
        Ok(EventRoster::assemble(event, &members))
    }

    /// Resolves rosters for all events, optionally within a date range,
    /// ascending by (date, startTime).
    ///
    /// Member profiles are fetched in one batch across all candidate
    /// events.
    #[tracing::instrument(skip(self))]
    pub async fn event_rosters(&self, range: Option<DateRange>) -> Result<Vec<EventRoster>> {
        let events = self.sorted_events(range).await?;
        let member_ids = assignment::referenced_member_ids(&events);
        let members = self.store.get_members_by_ids(&member_ids).await?;

        metrics::counter!("resolver_event_rosters_resolved").increment(1);
        Ok(events
            .into_iter()
            .map(|event| EventRoster::assemble(event, &members))
            .collect())
    }

    /// Resolves all assignment slots grouped by position name, optionally
    /// within a date range.
    ///
    /// Groups are ascending by name; events within a group ascending by
    /// (date, startTime).
    #[tracing::instrument(skip(self))]
    pub async fn position_groups(&self, range: Option<DateRange>) -> Result<Vec<PositionGroup>> {
        let events = self.sorted_events(range).await?;
        let member_ids = assignment::referenced_member_ids(&events);
        let members = self.store.get_members_by_ids(&member_ids).await?;

        metrics::counter!("resolver_position_groups_resolved").increment(1);
        Ok(PositionGroup::group(events, &members))
    }

    async fn sorted_events(&self, range: Option<DateRange>) -> Result<Vec<Event>> {
        let mut events = self.store.get_all_events(range).await?;
        events.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));
        Ok(events)
    }

    /// Date-filters candidates, flattens each member's matched position onto
    /// the event, and sorts ascending by (date, startTime).
    fn schedule_events(
        member_id: &MemberId,
        candidates: Vec<Event>,
        range: DateRange,
    ) -> Vec<ScheduledEvent> {
        let mut events: Vec<ScheduledEvent> = candidates
            .into_iter()
            .filter(|event| range.contains(event.date))
            .filter_map(|event| {
                // A candidate with no matching slot can only appear under
                // store read skew; skip it rather than fail the view.
                let position_name = assignment::find_for_member(&event, member_id)
                    .map(|pa| pa.position_name.clone())?;
                Some(ScheduledEvent::from_event(event, position_name))
            })
            .collect();

        events.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));
        events
    }
}
