use chrono::{
    serde::{ts_seconds, ts_seconds_option},
    DateTime, Utc,
};
use kernel::model::{
    id::{CampusId, ClassId, ReservationId, RoomId},
    reservation::{
        event::{ApproverAction, CreateReservation},
        Requester, Reservation, ReservationRoom, ReservationStatus,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRow {
    pub id: ReservationId,
    pub name: String,
    pub student_id: String,
    pub email: String,
    #[serde(with = "ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub room_id: RoomId,
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub campus_id: Option<CampusId>,
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub class_id: Option<ClassId>,
    pub reason: String,
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default, with = "ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            id,
            name,
            student_id,
            email,
            start_time,
            end_time,
            room_id,
            room_name,
            campus_id,
            campus_name,
            class_id,
            reason,
            status,
            created_by,
            approved_by,
            created_at,
            updated_at,
        } = value;
        Reservation {
            id,
            requester: Requester {
                name,
                student_id,
                email,
            },
            start_time,
            end_time,
            room: ReservationRoom {
                room_id,
                room_name,
                campus_id,
                campus_name,
                class_id,
            },
            reason,
            status,
            created_by,
            approved_by,
            created_at,
            updated_at,
        }
    }
}

// startTime/endTime go out as whole epoch seconds
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationBody {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub room_id: RoomId,
    pub start_time: i64,
    pub end_time: i64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnstile_token: Option<String>,
}

impl From<CreateReservation> for CreateReservationBody {
    fn from(value: CreateReservation) -> Self {
        let CreateReservation {
            requester,
            room_id,
            start_time,
            end_time,
            reason,
            turnstile_token,
        } = value;
        Self {
            name: requester.name,
            student_id: requester.student_id,
            email: requester.email,
            room_id,
            start_time: start_time.timestamp(),
            end_time: end_time.timestamp(),
            reason,
            turnstile_token,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RejectBody<'a> {
    pub id: ReservationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ApproverActionBody {
    pub token: String,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<ApproverAction> for ApproverActionBody {
    fn from(value: ApproverAction) -> Self {
        let ApproverAction { token, decision } = value;
        Self {
            token,
            action: decision.action(),
            reason: decision.reason().map(str::to_string),
        }
    }
}
