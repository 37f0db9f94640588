use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::{CampusId, ClassId, ReservationId, RoomId};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub name: String,
    pub student_id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub requester: Requester,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub room: ReservationRoom,
    pub reason: String,
    pub status: ReservationStatus,
    pub created_by: Option<String>,
    pub approved_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRoom {
    pub room_id: RoomId,
    pub room_name: Option<String>,
    pub campus_id: Option<CampusId>,
    pub campus_name: Option<String>,
    pub class_id: Option<ClassId>,
}
