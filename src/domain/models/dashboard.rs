use serde::Serialize;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub approved: i64,
    pub used: i64,
    pub expired: i64,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ParticipationStatusCounts {
    pub participating: i64,
    pub participated: i64,
    #[serde(rename = "notAttended")]
    pub not_attended: i64,
    pub approved: i64,
}

/// One summary record per event, as served by the dashboard endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct EventDashboard {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(rename = "totalInscriptions")]
    pub total_inscriptions: i64,
    #[serde(rename = "statusCounts")]
    pub status_counts: StatusCounts,
    #[serde(rename = "participationStatusCounts")]
    pub participation_status_counts: ParticipationStatusCounts,
    #[serde(rename = "averageTimeInMinutes")]
    pub average_time_in_minutes: f64,
}
