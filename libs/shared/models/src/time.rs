//! Wire format for times of day.
//!
//! Times travel as `HH:MM` strings and are held as `NaiveTime` so that comparisons
//! are chronological. `HH:MM:SS` is accepted on input and only echoed back when the
//! seconds are non-zero.
//!
//! `24:00` closes a window at midnight. It is held as the last nanosecond of the day,
//! which no other input can produce, and is written back as `24:00`.

use chrono::{Duration, NaiveTime, Timelike};

const SHORT_FORMAT: &str = "%H:%M";
const LONG_FORMAT: &str = "%H:%M:%S";
const END_OF_DAY: &str = "24:00";

/// The instant `24:00` stands for. Later than every other time of day.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::default() - Duration::nanoseconds(1)
}

pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    if raw == END_OF_DAY || raw == "24:00:00" {
        return Ok(end_of_day());
    }
    NaiveTime::parse_from_str(raw, SHORT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, LONG_FORMAT))
}

pub fn format_time_of_day(time: &NaiveTime) -> String {
    if *time == end_of_day() {
        END_OF_DAY.to_string()
    } else if time.second() == 0 {
        time.format(SHORT_FORMAT).to_string()
    } else {
        time.format(LONG_FORMAT).to_string()
    }
}

/// `#[serde(with = "hh_mm")]` for `NaiveTime` fields.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time_of_day(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw)
            .map_err(|e| D::Error::custom(format!("invalid time of day '{}': {}", raw, e)))
    }

    /// Same format for `Option<NaiveTime>`; pair with `#[serde(default)]`.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|r| {
                super::super::parse_time_of_day(&r)
                    .map_err(|e| D::Error::custom(format!("invalid time of day '{}': {}", r, e)))
            })
            .transpose()
        }
    }
}
