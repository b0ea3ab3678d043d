//! Member schedule endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use common::{DateRange, MemberId};
use resolver::MemberSchedule;
use serde::Deserialize;
use store::ScheduleStore;

use crate::error::ApiError;
use crate::routes::AppState;

/// Required date window for schedule queries.
///
/// An inverted window (start after end) is not rejected; it resolves to an
/// empty schedule by contract.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RangeParams {
    fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// GET /members/:id/schedule?start=..&end=.. — one member's schedule.
#[tracing::instrument(skip(state))]
pub async fn member_schedule<S: ScheduleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<Json<MemberSchedule>, ApiError> {
    let schedule = state
        .resolver
        .member_schedule(&MemberId::new(id), params.range())
        .await?;

    Ok(Json(schedule))
}

/// GET /schedules?start=..&end=.. — every member's schedule.
#[tracing::instrument(skip(state))]
pub async fn list<S: ScheduleStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<MemberSchedule>>, ApiError> {
    let schedules = state.resolver.member_schedules(params.range()).await?;

    Ok(Json(schedules))
}
