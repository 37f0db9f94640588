//! Shapes of the PHP endpoints. These predate the `{success, data, message}`
//! envelope, so each one has its own layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    id::{ReservationId, RoomId},
    reservation::event::CreateReservation,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRoomPolicy {
    pub classroom: String,
    pub days: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPolicy {
    #[serde(default)]
    pub policy: Vec<LegacyRoomPolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyReservation {
    pub name: String,
    pub email: String,
    pub time: String,
    pub reason: String,
    pub room: i64,
    pub auth: String,
}

impl LegacyReservation {
    /// Decodes the `"<startMs>-<endMs>"` window.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = self.time.split_once('-')?;
        let start = DateTime::from_timestamp_millis(start.trim().parse().ok()?)?;
        let end = DateTime::from_timestamp_millis(end.trim().parse().ok()?)?;
        Some((start, end))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyReservations {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<LegacyReservation>,
}

#[derive(Debug, Clone)]
pub struct LegacyApplication {
    pub room: RoomId,
    pub email: String,
    pub name: String,
    pub reason: String,
    pub sid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<CreateReservation> for LegacyApplication {
    fn from(value: CreateReservation) -> Self {
        let CreateReservation {
            requester,
            room_id,
            start_time,
            end_time,
            reason,
            turnstile_token: _,
        } = value;
        Self {
            room: room_id,
            email: requester.email,
            name: requester.name,
            reason,
            sid: requester.student_id,
            start: start_time,
            end: end_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LegacyReview {
    pub token: String,
    pub id: ReservationId,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct LegacyPolicyUpdate {
    pub classroom: String,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}
