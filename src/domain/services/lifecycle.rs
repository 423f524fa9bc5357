//! Ticket lifecycle transitions.
//!
//! Both state axes are plain enums, so every transition function matches
//! exhaustively and an unhandled status value cannot exist at runtime.
//!
//! Status: APROVADO -> USADO (entry), APROVADO -> EXPIRADO (cancel);
//! USADO and EXPIRADO are terminal.
//! Participation: APROVADO -> PARTICIPANDO -> PARTICIPADO (terminal);
//! APROVADO -> NAO_COMPARECEU (terminal, via cancel only).

use chrono::{DateTime, Utc};
use crate::domain::models::inscription::{Checkin, Inscription, InscriptionStatus, ParticipationStatus};
use crate::error::AppError;

/// Marks entry (check-in). Only an APROVADO ticket that has not started
/// participating may enter; entry stamps `checkin.in`.
pub fn validate_entry(inscription: &mut Inscription, now: DateTime<Utc>) -> Result<(), AppError> {
    match inscription.status {
        InscriptionStatus::Used => {
            return Err(AppError::InvalidState("This ticket was already used for entry.".into()));
        }
        InscriptionStatus::Expired => {
            return Err(AppError::InvalidState("This ticket is expired and cannot be used for entry.".into()));
        }
        InscriptionStatus::Approved => {}
    }

    match inscription.participation_status {
        ParticipationStatus::Participating => {
            return Err(AppError::InvalidState("This ticket is already marked as PARTICIPANDO.".into()));
        }
        ParticipationStatus::Participated => {
            return Err(AppError::InvalidState("This ticket was already used for entry and exit.".into()));
        }
        ParticipationStatus::Approved | ParticipationStatus::NotAttended => {}
    }

    inscription.status = InscriptionStatus::Used;
    inscription.participation_status = ParticipationStatus::Participating;
    inscription.checkin = Checkin { entered_at: Some(now), left_at: None };
    Ok(())
}

/// Marks exit (check-out). Requires the participant to be PARTICIPANDO;
/// preserves the existing `checkin.in` timestamp.
pub fn validate_exit(inscription: &mut Inscription, now: DateTime<Utc>) -> Result<(), AppError> {
    match inscription.participation_status {
        ParticipationStatus::Participating => {
            inscription.participation_status = ParticipationStatus::Participated;
            inscription.checkin.left_at = Some(now);
            Ok(())
        }
        ParticipationStatus::Participated => {
            Err(AppError::InvalidState("Exit was already recorded for this ticket.".into()))
        }
        other => Err(AppError::InvalidState(format!(
            "Invalid participation status for exit: {}. The participant must be PARTICIPANDO first.",
            other
        ))),
    }
}

/// Cancels a ticket: a soft expiry, never a physical delete. A USADO
/// ticket can no longer be cancelled and EXPIRADO is terminal.
pub fn cancel(inscription: &mut Inscription) -> Result<(), AppError> {
    match inscription.status {
        InscriptionStatus::Expired => {
            Err(AppError::InvalidState("This inscription is already expired.".into()))
        }
        InscriptionStatus::Used => {
            Err(AppError::InvalidState("This inscription was already used and cannot be cancelled.".into()))
        }
        InscriptionStatus::Approved => {
            inscription.status = InscriptionStatus::Expired;
            inscription.participation_status = ParticipationStatus::NotAttended;
            Ok(())
        }
    }
}
