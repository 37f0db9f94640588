use chrono::{NaiveDate, Weekday};
use kernel::model::{
    analytics::{DailyCount, OverviewStats, ReasonWeight, RoomUsage, WeekdayCount},
    id::RoomId,
};
use serde::Deserialize;

use super::policy::weekday;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewRow {
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

impl From<OverviewRow> for OverviewStats {
    fn from(value: OverviewRow) -> Self {
        let OverviewRow {
            today,
            this_week,
            this_month,
            total,
            pending,
            approved,
            rejected,
        } = value;
        OverviewStats {
            today,
            this_week,
            this_month,
            total,
            pending,
            approved,
            rejected,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub count: u64,
}

impl From<DailyRow> for DailyCount {
    fn from(value: DailyRow) -> Self {
        DailyCount {
            date: value.date,
            count: value.count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeekdayRow {
    #[serde(deserialize_with = "weekday::deserialize")]
    pub weekday: Weekday,
    pub count: u64,
}

impl From<WeekdayRow> for WeekdayCount {
    fn from(value: WeekdayRow) -> Self {
        WeekdayCount {
            weekday: value.weekday,
            count: value.count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUsageRow {
    pub room_id: RoomId,
    #[serde(default)]
    pub room_name: String,
    pub count: u64,
}

impl From<RoomUsageRow> for RoomUsage {
    fn from(value: RoomUsageRow) -> Self {
        RoomUsage {
            room_id: value.room_id,
            room_name: value.room_name,
            count: value.count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReasonRow {
    pub word: String,
    pub weight: f64,
}

impl From<ReasonRow> for ReasonWeight {
    fn from(value: ReasonRow) -> Self {
        ReasonWeight {
            word: value.word,
            weight: value.weight,
        }
    }
}
