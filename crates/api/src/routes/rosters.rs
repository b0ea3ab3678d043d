//! Event roster and position group endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use common::{DateRange, EventId};
use resolver::{EventRoster, PositionGroup};
use serde::Deserialize;
use store::ScheduleStore;

use crate::error::ApiError;
use crate::routes::AppState;

/// Optional date window: both bounds or neither.
#[derive(Debug, Deserialize)]
pub struct OptionalRangeParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl OptionalRangeParams {
    fn range(&self) -> Result<Option<DateRange>, ApiError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Some(DateRange::new(start, end))),
            (None, None) => Ok(None),
            _ => Err(ApiError::BadRequest(
                "start and end must be provided together".to_string(),
            )),
        }
    }
}

/// GET /events/:id/roster — one event with its resolved roster.
#[tracing::instrument(skip(state))]
pub async fn event_roster<S: ScheduleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<EventRoster>, ApiError> {
    let roster = state.resolver.event_roster(&EventId::new(id)).await?;

    Ok(Json(roster))
}

/// GET /rosters[?start=..&end=..] — all events with resolved rosters.
#[tracing::instrument(skip(state))]
pub async fn list<S: ScheduleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<OptionalRangeParams>,
) -> Result<Json<Vec<EventRoster>>, ApiError> {
    let rosters = state.resolver.event_rosters(params.range()?).await?;

    Ok(Json(rosters))
}

/// GET /positions[?start=..&end=..] — assignment slots grouped by position.
#[tracing::instrument(skip(state))]
pub async fn positions<S: ScheduleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<OptionalRangeParams>,
) -> Result<Json<Vec<PositionGroup>>, ApiError> {
    let groups = state.resolver.position_groups(params.range()?).await?;

    Ok(Json(groups))
}
