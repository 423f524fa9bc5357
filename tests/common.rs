use ticketing_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_event_repo::SqliteEventRepo,
        sqlite_inscription_repo::SqliteInscriptionRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::Request,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            inscription_repo: Arc::new(SqliteInscriptionRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self { router, pool, db_filename, state }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> axum::response::Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(payload) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn register_user(&self, name: &str, email: &str, cpf: &str) -> String {
        let res = self.request("POST", "/api/auth/register", Some(json!({
            "name": name,
            "lastname": "Silva",
            "password": "s3nh@forte",
            "dateOfBirth": "1990-05-14",
            "cpf": cpf,
            "phone": "+55 11 99999-0000",
            "email": email
        }))).await;
        assert_eq!(res.status().as_u16(), 201, "user registration failed");
        parse_body(res).await["id"].as_str().unwrap().to_string()
    }

    #[allow(dead_code)]
    pub async fn create_event(&self, owner_id: &str, name: &str) -> String {
        let res = self.request("POST", "/api/event", Some(json!({
            "userId": owner_id,
            "name": name,
            "description": "Community tech meetup",
            "categories": ["tech", "community"],
            "date": "2025-09-01T18:00:00Z",
            "location": {
                "address": "Av. Paulista 1000",
                "city": "Sao Paulo",
                "state": "SP",
                "country": "BR"
            },
            "capacity": { "max": 100 },
            "schedules": {
                "start": "2025-09-01T18:00:00Z",
                "end": "2025-09-01T22:00:00Z"
            },
            "inscriptionPrice": 25.0
        }))).await;
        assert_eq!(res.status().as_u16(), 201, "event creation failed");
        parse_body(res).await["id"].as_str().unwrap().to_string()
    }

    #[allow(dead_code)]
    pub async fn create_inscription_for(&self, user_id: &str, event_id: &str, document: &str) -> String {
        let res = self.request("POST", "/api/inscription", Some(json!({
            "userId": user_id,
            "eventId": event_id,
            "forAnotherOne": true,
            "participants": {
                "name": "Convidado Teste",
                "email": "convidado@example.com",
                "dateOfBirth": "1995-03-02",
                "document": document
            }
        }))).await;
        assert_eq!(res.status().as_u16(), 201, "inscription creation failed");
        parse_body(res).await["id"].as_str().unwrap().to_string()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
