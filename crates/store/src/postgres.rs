use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use common::{DateRange, EventId, MemberId, TeamId, TemplateId};
use domain::{Event, Member, PositionAssignment, ReminderInterval};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Result, store::ScheduleStore};

const EVENT_COLUMNS: &str = "id, name, description, template, date, start_time, end_time, \
     reminder_interval, reminder_enabled, team_id, position_assignments, created_at, updated_at";

const MEMBER_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, created_at, updated_at";

/// PostgreSQL-backed scheduling store.
///
/// Members and events live in scalar-column tables; the assignment list is
/// embedded in the event row as a JSONB array, preserving the document
/// shape the resolver consumes.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the given database URL with a default pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Inserts or updates a member record.
    ///
    /// Writes are a seeding/administration concern, not part of the
    /// read-only [`ScheduleStore`] surface.
    #[tracing::instrument(skip(self, member), fields(member_id = %member.id))]
    pub async fn upsert_member(&self, member: &Member) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, first_name, last_name, email, phone_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                phone_number = EXCLUDED.phone_number,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(member.id.as_str())
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.phone_number)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts or updates an event record, assignment list included.
    #[tracing::instrument(skip(self, event), fields(event_id = %event.id))]
    pub async fn upsert_event(&self, event: &Event) -> Result<()> {
        let assignments = serde_json::to_value(&event.position_assignments)?;

        sqlx::query(
            r#"
            INSERT INTO events (id, name, description, template, date, start_time, end_time,
                                reminder_interval, reminder_enabled, team_id,
                                position_assignments, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                template = EXCLUDED.template,
                date = EXCLUDED.date,
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                reminder_interval = EXCLUDED.reminder_interval,
                reminder_enabled = EXCLUDED.reminder_enabled,
                team_id = EXCLUDED.team_id,
                position_assignments = EXCLUDED.position_assignments,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(event.id.as_str())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.template.as_ref().map(|t| t.as_str()))
        .bind(event.date)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.reminder_interval.minutes())
        .bind(event.reminder_enabled)
        .bind(event.team_id.as_str())
        .bind(assignments)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_member(row: PgRow) -> Result<Member> {
        Ok(Member {
            id: MemberId::new(row.try_get::<String, _>("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }

    fn row_to_event(row: PgRow) -> Result<Event> {
        let assignments_json: serde_json::Value = row.try_get("position_assignments")?;
        let position_assignments: Vec<PositionAssignment> =
            serde_json::from_value(assignments_json)?;

        Ok(Event {
            id: EventId::new(row.try_get::<String, _>("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            template: row
                .try_get::<Option<String>, _>("template")?
                .map(TemplateId::new),
            date: row.try_get::<NaiveDate, _>("date")?,
            start_time: row.try_get::<NaiveTime, _>("start_time")?,
            end_time: row.try_get::<NaiveTime, _>("end_time")?,
            reminder_interval: ReminderInterval::from_minutes(
                row.try_get::<i64, _>("reminder_interval")?,
            ),
            reminder_enabled: row.try_get("reminder_enabled")?,
            team_id: TeamId::new(row.try_get::<String, _>("team_id")?),
            position_assignments,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl ScheduleStore for PostgresStore {
    async fn get_member_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(&format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_member).transpose()
    }

    async fn get_all_members(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_member).collect()
    }

    async fn get_members_by_ids(&self, ids: &[MemberId]) -> Result<HashMap<MemberId, Member>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let id_strings: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = ANY($1)"
        ))
        .bind(id_strings)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Self::row_to_member(row).map(|m| (m.id.clone(), m)))
            .collect()
    }

    async fn get_event_by_id(&self, id: &EventId) -> Result<Option<Event>> {
        let row = sqlx::query(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_event).transpose()
    }

    async fn get_all_events(&self, range: Option<DateRange>) -> Result<Vec<Event>> {
        let rows = match range {
            Some(range) => {
                sqlx::query(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events \
                     WHERE date >= $1 AND date <= $2 \
                     ORDER BY date ASC, start_time ASC"
                ))
                .bind(range.start)
                .bind(range.end)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC, start_time ASC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn get_events_referencing_member(&self, member_id: &MemberId) -> Result<Vec<Event>> {
        let rows = sqlx::query(&format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE EXISTS ( \
                 SELECT 1 FROM jsonb_array_elements(position_assignments) AS pa \
                 WHERE pa->>'memberId' = $1 \
             ) \
             ORDER BY date ASC, start_time ASC"
        ))
        .bind(member_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_event).collect()
    }
}
