//! Route handlers and shared state.

pub mod health;
pub mod metrics;
pub mod rosters;
pub mod schedules;

use resolver::ScheduleResolver;
use store::ScheduleStore;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ScheduleStore> {
    pub resolver: ScheduleResolver<S>,
}
