use crate::domain::{models::inscription::Inscription, ports::InscriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresInscriptionRepo {
    pool: PgPool,
}

impl PostgresInscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InscriptionRepository for PostgresInscriptionRepo {
    async fn create(&self, inscription: &Inscription) -> Result<Inscription, AppError> {
        sqlx::query_as::<_, Inscription>(
            "INSERT INTO inscriptions (id, user_id, event_id, for_another_one,
                participant_name, participant_email, participant_date_of_birth, participant_document,
                status, participation_status, checkin_in, checkin_out, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
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
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_active_by_document(&self, event_id: &str, document: &str) -> Result<Option<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>(
            "SELECT * FROM inscriptions WHERE event_id = $1 AND participant_document = $2 AND status != 'EXPIRADO'"
        )
            .bind(event_id).bind(document)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions ORDER BY created_at ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Inscription>, AppError> {
        sqlx::query_as::<_, Inscription>("SELECT * FROM inscriptions WHERE event_id = $1 ORDER BY created_at ASC").bind(event_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, inscription: &Inscription) -> Result<Inscription, AppError> {
        sqlx::query_as::<_, Inscription>(
            "UPDATE inscriptions SET status=$1, participation_status=$2, checkin_in=$3, checkin_out=$4
             WHERE id=$5
             RETURNING *"
        )
            .bind(inscription.status).bind(inscription.participation_status)
            .bind(inscription.checkin.entered_at).bind(inscription.checkin.left_at)
            .bind(&inscription.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
