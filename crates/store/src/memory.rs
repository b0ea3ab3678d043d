use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{DateRange, EventId, MemberId};
use domain::{Event, Member};
use tokio::sync::RwLock;

use crate::{Result, store::ScheduleStore};

/// In-memory scheduling store for tests and local development.
///
/// Events are held in insertion order; callers that need a particular
/// ordering sort on their side, as they would over any store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a member record.
    pub async fn insert_member(&self, member: Member) {
        self.members.write().await.insert(member.id.clone(), member);
    }

    /// Inserts an event, replacing any existing event with the same id.
    pub async fn insert_event(&self, event: Event) {
        let mut events = self.events.write().await;
        if let Some(existing) = events.iter_mut().find(|e| e.id == event.id) {
            *existing = event;
        } else {
            events.push(event);
        }
    }

    /// Returns the number of member records stored.
    pub async fn member_count(&self) -> usize {
        self.members.read().await.len()
    }

    /// Returns the number of events stored.
    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }

    /// Clears all members and events.
    pub async fn clear(&self) {
        self.members.write().await.clear();
        self.events.write().await.clear();
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn get_member_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn get_all_members(&self) -> Result<Vec<Member>> {
        Ok(self.members.read().await.values().cloned().collect())
    }

    async fn get_members_by_ids(&self, ids: &[MemberId]) -> Result<HashMap<MemberId, Member>> {
        let members = self.members.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| members.get(id).map(|m| (id.clone(), m.clone())))
            .collect())
    }

    async fn get_event_by_id(&self, id: &EventId) -> Result<Option<Event>> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .find(|e| &e.id == id)
            .cloned())
    }

    async fn get_all_events(&self, range: Option<DateRange>) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| range.is_none_or(|r| r.contains(e.date)))
            .cloned()
            .collect())
    }

    async fn get_events_referencing_member(&self, member_id: &MemberId) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| e.references_member(member_id))
            .cloned()
            .collect())
    }
}
