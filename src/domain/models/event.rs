use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Location {
    #[sqlx(rename = "location_address")]
    pub address: String,
    #[sqlx(rename = "location_city")]
    pub city: String,
    #[sqlx(rename = "location_state")]
    pub state: String,
    #[sqlx(rename = "location_country")]
    pub country: String,
    #[serde(rename = "additionalInfo", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "location_additional_info")]
    pub additional_info: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Capacity {
    #[sqlx(rename = "capacity_max")]
    pub max: i32,
    #[sqlx(rename = "capacity_current")]
    pub current: i32,
    #[sqlx(rename = "capacity_total")]
    pub total: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Schedule {
    #[sqlx(rename = "schedule_start")]
    pub start: DateTime<Utc>,
    #[sqlx(rename = "schedule_end")]
    pub end: DateTime<Utc>,
}

/// Only one event variant exists today; kept as an enum so the wire value
/// stays the literal string "standard".
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum EventType {
    #[serde(rename = "standard")]
    #[sqlx(rename = "standard")]
    Standard,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Standard => write!(f, "standard"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub categories: Json<Vec<String>>,
    pub date: DateTime<Utc>,
    #[sqlx(flatten)]
    pub location: Location,
    #[sqlx(flatten)]
    pub capacity: Capacity,
    #[serde(rename = "schedules")]
    #[sqlx(flatten)]
    pub schedule: Schedule,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(rename = "inscriptionPrice")]
    pub inscription_price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: Location,
    pub capacity_max: i32,
    pub schedule: Schedule,
    pub inscription_price: f64,
}

impl Event {
    pub fn new(params: NewEventParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            name: params.name,
            description: params.description,
            categories: Json(params.categories),
            date: params.date,
            location: params.location,
            capacity: Capacity {
                max: params.capacity_max,
                current: 0,
                total: 0,
            },
            schedule: params.schedule,
            event_type: EventType::Standard,
            inscription_price: params.inscription_price,
            created_at: Utc::now(),
        }
    }
}
