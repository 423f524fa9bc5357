use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub lastname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub struct NewUserParams {
    pub name: String,
    pub lastname: String,
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub cpf: String,
    pub phone: String,
    pub email: String,
}

impl User {
    pub fn new(params: NewUserParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            lastname: params.lastname,
            password_hash: params.password_hash,
            date_of_birth: params.date_of_birth,
            cpf: params.cpf,
            phone: params.phone,
            email: params.email,
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}
