use chrono::{DateTime, Local, TimeZone, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    id::{CampusId, ReservationId, RoomId},
    reservation::{Requester, ReservationStatus},
    time::compose_datetime,
};

#[derive(new, Debug, Clone)]
pub struct CreateReservation {
    pub requester: Requester,
    pub room_id: RoomId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reason: String,
    pub turnstile_token: Option<String>,
}

/// What the application form collects, still as the strings the user typed.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub student_name: String,
    pub selected_room: Option<RoomId>,
    pub student_id: String,
    pub email: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub turnstile_token: Option<String>,
}

impl ApplicationForm {
    pub fn into_event(self) -> AppResult<CreateReservation> {
        self.into_event_in(&Local)
    }

    pub fn into_event_in<Tz: TimeZone>(self, tz: &Tz) -> AppResult<CreateReservation> {
        let room_id = self
            .selected_room
            .ok_or_else(|| AppError::InvalidInput("no room selected".into()))?;
        let start_time = compose_datetime(tz, &self.date, &self.start_time)?;
        let end_time = compose_datetime(tz, &self.date, &self.end_time)?;

        Ok(CreateReservation {
            requester: Requester {
                name: self.student_name,
                student_id: self.student_id,
                email: self.email,
            },
            room_id,
            start_time,
            end_time,
            reason: self.reason,
            turnstile_token: self.turnstile_token,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReservationQuery {
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub status: Option<ReservationStatus>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct ReservationListQuery {
    pub status: Option<ReservationStatus>,
    pub campus_id: Option<CampusId>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: Option<String> },
}

impl ReviewDecision {
    pub fn action(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject { .. } => "reject",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ReviewDecision::Approve => None,
            ReviewDecision::Reject { reason } => reason.as_deref(),
        }
    }
}

#[derive(new, Debug, Clone)]
pub struct ReviewReservation {
    pub reservation_id: ReservationId,
    pub decision: ReviewDecision,
}

/// Decision taken from an emailed approval link, authorised by its token
/// rather than an admin session.
#[derive(new, Debug, Clone)]
pub struct ApproverAction {
    pub token: String,
    pub decision: ReviewDecision,
}
