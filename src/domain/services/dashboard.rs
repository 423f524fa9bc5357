//! Dashboard aggregation: a single pass over an event's inscriptions.

use crate::domain::models::dashboard::{EventDashboard, ParticipationStatusCounts, StatusCounts};
use crate::domain::models::event::Event;
use crate::domain::models::inscription::{Inscription, InscriptionStatus, ParticipationStatus};

pub fn summarize_event(event: &Event, inscriptions: &[Inscription]) -> EventDashboard {
    let mut status_counts = StatusCounts::default();
    let mut participation_counts = ParticipationStatusCounts::default();
    let mut total_minutes = 0.0_f64;
    let mut completed_visits = 0_u32;

    for inscription in inscriptions {
        match inscription.status {
            InscriptionStatus::Approved => status_counts.approved += 1,
            InscriptionStatus::Used => status_counts.used += 1,
            InscriptionStatus::Expired => status_counts.expired += 1,
        }

        match inscription.participation_status {
            ParticipationStatus::Approved => participation_counts.approved += 1,
            ParticipationStatus::Participating => participation_counts.participating += 1,
            ParticipationStatus::Participated => participation_counts.participated += 1,
            ParticipationStatus::NotAttended => participation_counts.not_attended += 1,
        }

        if let (Some(entered), Some(left)) = (inscription.checkin.entered_at, inscription.checkin.left_at) {
            total_minutes += (left - entered).num_seconds() as f64 / 60.0;
            completed_visits += 1;
        }
    }

    let average_time_in_minutes = if completed_visits == 0 {
        0.0
    } else {
        round_two_decimals(total_minutes / completed_visits as f64)
    };

    EventDashboard {
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        total_inscriptions: inscriptions.len() as i64,
        status_counts,
        participation_status_counts: participation_counts,
        average_time_in_minutes,
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
