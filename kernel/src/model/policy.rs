use chrono::{NaiveTime, Weekday};

use crate::model::id::{PolicyId, RoomId};

/// Weekly window during which a room accepts reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPolicy {
    pub id: PolicyId,
    pub room_id: RoomId,
    pub days: Vec<Weekday>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct CreatePolicy {
    pub room_id: RoomId,
    pub days: Vec<Weekday>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct UpdatePolicy {
    pub policy_id: PolicyId,
    pub days: Option<Vec<Weekday>>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// Sunday is 0, as in `Date.getDay()`.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Sorted Sunday-first, duplicates removed.
pub fn normalize_days(days: impl IntoIterator<Item = Weekday>) -> Vec<Weekday> {
    let mut indexes: Vec<u8> = days.into_iter().map(weekday_index).collect();
    indexes.sort_unstable();
    indexes.dedup();
    indexes.into_iter().filter_map(weekday_from_index).collect()
}
