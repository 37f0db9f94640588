use chrono::{NaiveTime, Weekday};
use kernel::model::{
    id::{PolicyId, RoomId},
    policy::{
        normalize_days, weekday_from_index, weekday_index, CreatePolicy, RoomPolicy, UpdatePolicy,
    },
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// `HH:MM` on the wire; seconds are accepted when reading.
pub(crate) mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
            .map_err(de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, s),
                None => s.serialize_none(),
            }
        }
    }
}

/// Weekdays as integers, Sunday = 0.
pub(crate) mod weekday {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Weekday, D::Error> {
        let index = u8::deserialize(d)?;
        weekday_from_index(index)
            .ok_or_else(|| de::Error::custom(format!("weekday index out of range: {index}")))
    }

    pub mod list {
        use super::*;

        pub fn serialize<S: Serializer>(days: &[Weekday], s: S) -> Result<S::Ok, S::Error> {
            let indexes: Vec<u8> = days.iter().copied().map(weekday_index).collect();
            indexes.serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Weekday>, D::Error> {
            let indexes = Vec::<u8>::deserialize(d)?;
            let days = indexes
                .into_iter()
                .map(|i| {
                    weekday_from_index(i)
                        .ok_or_else(|| de::Error::custom(format!("weekday index out of range: {i}")))
                })
                .collect::<Result<Vec<_>, D::Error>>()?;
            Ok(normalize_days(days))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRow {
    pub id: PolicyId,
    pub room_id: RoomId,
    #[serde(with = "weekday::list")]
    pub days: Vec<Weekday>,
    #[serde(deserialize_with = "hhmm::deserialize")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "hhmm::deserialize")]
    pub end_time: NaiveTime,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl From<PolicyRow> for RoomPolicy {
    fn from(value: PolicyRow) -> Self {
        let PolicyRow {
            id,
            room_id,
            days,
            start_time,
            end_time,
            enabled,
        } = value;
        RoomPolicy {
            id,
            room_id,
            days,
            start_time,
            end_time,
            enabled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyBody {
    pub room_id: RoomId,
    #[serde(serialize_with = "weekday::list::serialize")]
    pub days: Vec<Weekday>,
    #[serde(serialize_with = "hhmm::serialize")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "hhmm::serialize")]
    pub end_time: NaiveTime,
    pub enabled: bool,
}

impl From<CreatePolicy> for CreatePolicyBody {
    fn from(value: CreatePolicy) -> Self {
        let CreatePolicy {
            room_id,
            days,
            start_time,
            end_time,
            enabled,
        } = value;
        Self {
            room_id,
            days: normalize_days(days),
            start_time,
            end_time,
            enabled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyBody {
    pub id: PolicyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u8>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "hhmm::option::serialize"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "hhmm::option::serialize"
    )]
    pub end_time: Option<NaiveTime>,
}

impl From<UpdatePolicy> for UpdatePolicyBody {
    fn from(value: UpdatePolicy) -> Self {
        let UpdatePolicy {
            policy_id,
            days,
            start_time,
            end_time,
        } = value;
        Self {
            id: policy_id,
            days: days.map(|d| normalize_days(d).into_iter().map(weekday_index).collect()),
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TogglePolicyBody {
    pub id: PolicyId,
    pub enabled: bool,
}
