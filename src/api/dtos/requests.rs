use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub lastname: String,
    pub password: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
    pub cpf: String,
    pub phone: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub lastname: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct LocationRequest {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "additionalInfo")]
    pub additional_info: Option<String>,
}

#[derive(Deserialize)]
pub struct CapacityRequest {
    pub max: i32,
}

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: DateTime<Utc>,
    pub location: LocationRequest,
    pub capacity: CapacityRequest,
    pub schedules: ScheduleRequest,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    #[serde(rename = "inscriptionPrice")]
    pub inscription_price: f64,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<LocationRequest>,
    pub capacity: Option<CapacityRequest>,
    pub schedules: Option<ScheduleRequest>,
    #[serde(rename = "inscriptionPrice")]
    pub inscription_price: Option<f64>,
}

#[derive(Deserialize)]
pub struct DeleteEventRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct ParticipantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub document: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateInscriptionRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "forAnotherOne", default)]
    pub for_another_one: bool,
    pub participants: Option<ParticipantRequest>,
}

/// Entry/exit validation carries the id of the caller claiming to be the
/// event's creator; the ownership guard compares it to the stored owner.
#[derive(Deserialize)]
pub struct ValidateTicketRequest {
    #[serde(rename = "eventCreatorId")]
    pub event_creator_id: String,
}
