use crate::domain::models::{event::Event, inscription::Inscription, user::User};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait InscriptionRepository: Send + Sync {
    async fn create(&self, inscription: &Inscription) -> Result<Inscription, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Inscription>, AppError>;
    /// Duplicate-registration probe: any inscription for the same event and
    /// participant document whose status is not EXPIRADO.
    async fn find_active_by_document(&self, event_id: &str, document: &str) -> Result<Option<Inscription>, AppError>;
    async fn list(&self) -> Result<Vec<Inscription>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Inscription>, AppError>;
    async fn update(&self, inscription: &Inscription) -> Result<Inscription, AppError>;
}
