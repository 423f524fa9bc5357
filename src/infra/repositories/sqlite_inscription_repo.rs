use crate::domain::{models::inscription::Inscription, ports::InscriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInscriptionRepo {
    pool: SqlitePool,
}

impl SqliteInscriptionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InscriptionRepository for SqliteInscriptionRepo {
    async fn create(&self, inscription: &Inscription) -> Result<Inscription, AppError> {
        sqlx::query_as::<_, Inscription>(
            "INSERT INTO inscriptions (id, user_id, event_id, for_another_one,
                participant_name, participant_email, participant_date_of_birth, participant_document,
                status, participation_status, checkin_in, checkin_out, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&inscription.id).bind(&inscription.user_id).bind(&inscription.event_id)
            .bind(inscription.for_another_one)
            .bind(&inscription.participant.name).bind(&inscription.participant.email)
            .bind(inscription.participant.date_of_birth).bind(&inscription.participant.document)
            .bind(inscription.status).bind(inscription.participation_status)
            .bind(inscription.checkin.entered_at).bind(inscription.checkin.left_at)
            .bind(inscription.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_active_by_document(&self, event_id: &str, document: &str) -> Result<Option<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>(
            "SELECT * FROM inscriptions WHERE event_id = ? AND participant_document = ? AND status != 'EXPIRADO'"
        )
            .bind(event_id).bind(document)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions ORDER BY created_at ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions WHERE event_id = ? ORDER BY created_at ASC").bind(event_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, inscription: &Inscription) -> Result<Inscription, AppError> {
        sqlx::query_as::<_, Inscription>(
            "UPDATE inscriptions SET status=?, participation_status=?, checkin_in=?, checkin_out=?
             WHERE id=?
             RETURNING *"
        )
            .bind(inscription.status).bind(inscription.participation_status)
            .bind(inscription.checkin.entered_at).bind(inscription.checkin.left_at)
            .bind(&inscription.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
