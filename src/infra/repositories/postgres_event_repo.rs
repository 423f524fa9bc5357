use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, user_id, name, description, categories, date,
                location_address, location_city, location_state, location_country, location_additional_info,
                capacity_max, capacity_current, capacity_total, schedule_start, schedule_end,
                event_type, inscription_price, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
             RETURNING *"
        )
            .bind(&event.id).bind(&event.user_id).bind(&event.name).bind(&event.description)
            .bind(&event.categories).bind(event.date)
            .bind(&event.location.address).bind(&event.location.city).bind(&event.location.state)
            .bind(&event.location.country).bind(&event.location.additional_info)
            .bind(event.capacity.max).bind(event.capacity.current).bind(event.capacity.total)
            .bind(event.schedule.start).bind(event.schedule.end)
            .bind(event.event_type).bind(event.inscription_price).bind(event.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE user_id = $1 ORDER BY date ASC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET name=$1, description=$2, categories=$3, date=$4,
                location_address=$5, location_city=$6, location_state=$7, location_country=$8, location_additional_info=$9,
                capacity_max=$10, capacity_current=$11, capacity_total=$12, schedule_start=$13, schedule_end=$14, inscription_price=$15
             WHERE id=$16
             RETURNING *"
        )
            .bind(&event.name).bind(&event.description).bind(&event.categories).bind(event.date)
            .bind(&event.location.address).bind(&event.location.city).bind(&event.location.state)
            .bind(&event.location.country).bind(&event.location.additional_info)
            .bind(event.capacity.max).bind(event.capacity.current).bind(event.capacity.total)
            .bind(event.schedule.start).bind(event.schedule.end).bind(event.inscription_price)
            .bind(&event.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Event not found".into())); }
        Ok(())
    }
}
