use std::collections::HashMap;

use async_trait::async_trait;
use common::{DateRange, EventId, MemberId};
use domain::{Event, Member};

use crate::Result;

/// Core trait for scheduling store implementations.
///
/// The resolution core is read-only: this surface is lookups and range
/// queries only, and all implementations must be thread-safe (Send + Sync).
/// Absent records are `Ok(None)`, never errors. No snapshot consistency is
/// promised between calls; a caller issuing two fetches may observe read
/// skew, which the resolver tolerates by contract.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Retrieves a single member by id.
    async fn get_member_by_id(&self, id: &MemberId) -> Result<Option<Member>>;

    /// Retrieves every member in the store.
    async fn get_all_members(&self) -> Result<Vec<Member>>;

    /// Retrieves the members for a set of ids, keyed by id.
    ///
    /// Ids that resolve to nothing are simply absent from the map; the call
    /// succeeds regardless. This is the batched lookup used for roster
    /// expansion.
    async fn get_members_by_ids(&self, ids: &[MemberId]) -> Result<HashMap<MemberId, Member>>;

    /// Retrieves a single event by id.
    async fn get_event_by_id(&self, id: &EventId) -> Result<Option<Event>>;

    /// Retrieves all events, optionally restricted to a date range
    /// (inclusive on both boundaries).
    async fn get_all_events(&self, range: Option<DateRange>) -> Result<Vec<Event>>;

    /// Retrieves the events whose assignment list references the member.
    async fn get_events_referencing_member(&self, member_id: &MemberId) -> Result<Vec<Event>>;
}
