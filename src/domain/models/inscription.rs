use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::fmt;

/// Ticket validity. The wire strings are the literal values used by the
/// existing deployment and must not be renamed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum InscriptionStatus {
    #[serde(rename = "APROVADO")]
    #[sqlx(rename = "APROVADO")]
    Approved,
    #[serde(rename = "USADO")]
    #[sqlx(rename = "USADO")]
    Used,
    #[serde(rename = "EXPIRADO")]
    #[sqlx(rename = "EXPIRADO")]
    Expired,
}

impl InscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InscriptionStatus::Approved => "APROVADO",
            InscriptionStatus::Used => "USADO",
            InscriptionStatus::Expired => "EXPIRADO",
        }
    }
}

impl fmt::Display for InscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical attendance, tracked independently of ticket validity.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum ParticipationStatus {
    #[serde(rename = "APROVADO")]
    #[sqlx(rename = "APROVADO")]
    Approved,
    #[serde(rename = "PARTICIPANDO")]
    #[sqlx(rename = "PARTICIPANDO")]
    Participating,
    #[serde(rename = "PARTICIPADO")]
    #[sqlx(rename = "PARTICIPADO")]
    Participated,
    #[serde(rename = "NAO_COMPARECEU")]
    #[sqlx(rename = "NAO_COMPARECEU")]
    NotAttended,
}

impl ParticipationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationStatus::Approved => "APROVADO",
            ParticipationStatus::Participating => "PARTICIPANDO",
            ParticipationStatus::Participated => "PARTICIPADO",
            ParticipationStatus::NotAttended => "NAO_COMPARECEU",
        }
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Participant {
    #[sqlx(rename = "participant_name")]
    pub name: String,
    #[sqlx(rename = "participant_email")]
    pub email: String,
    #[serde(rename = "dateOfBirth")]
    #[sqlx(rename = "participant_date_of_birth")]
    pub date_of_birth: NaiveDate,
    #[sqlx(rename = "participant_document")]
    pub document: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Default)]
pub struct Checkin {
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "checkin_in")]
    pub entered_at: Option<DateTime<Utc>>,
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "checkin_out")]
    pub left_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Inscription {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "forAnotherOne")]
    pub for_another_one: bool,
    #[serde(rename = "participants")]
    #[sqlx(flatten)]
    pub participant: Participant,
    pub status: InscriptionStatus,
    pub participation_status: ParticipationStatus,
    #[sqlx(flatten)]
    pub checkin: Checkin,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Inscription {
    pub fn new(user_id: String, event_id: String, for_another_one: bool, participant: Participant) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            event_id,
            for_another_one,
            participant,
            status: InscriptionStatus::Approved,
            participation_status: ParticipationStatus::Approved,
            checkin: Checkin::default(),
            created_at: Utc::now(),
        }
    }
}
