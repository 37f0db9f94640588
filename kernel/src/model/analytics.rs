use chrono::{NaiveDate, Weekday};

use crate::model::id::RoomId;

// Aggregates are computed by the backend and passed through untouched.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewStats {
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayCount {
    pub weekday: Weekday,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomUsage {
    pub room_id: RoomId,
    pub room_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReasonWeight {
    pub word: String,
    pub weight: f64,
}
