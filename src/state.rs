use std::sync::Arc;
use crate::domain::ports::{EventRepository, InscriptionRepository, UserRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub inscription_repo: Arc<dyn InscriptionRepository>,
}
