use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A workout as submitted by a client, before it has been given an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub exercise: String,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub sets: i64,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub reps: i64,
    #[serde(deserialize_with = "deserialize_number")]
    pub weight: f64,
    #[serde(deserialize_with = "deserialize_workout_date")]
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: i64,
    pub exercise: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    #[serde(deserialize_with = "deserialize_workout_date")]
    pub date: NaiveDateTime,
}

impl WorkoutEntry {
    pub fn new(id: i64, workout: NewWorkout) -> Self {
        Self {
            id,
            exercise: workout.exercise,
            sets: workout.sets,
            reps: workout.reps,
            weight: workout.weight,
            date: workout.date,
        }
    }

    /// Calendar day the workout was done on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// Accepts RFC 3339 (offset kept as wall-clock time), naive ISO-8601 and a bare `YYYY-MM-DD`.
pub fn parse_workout_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

fn deserialize_workout_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_workout_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {raw}")))
}

/// A number as clients send it: JSON integer, JSON float or numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Accepts `5`, `5.0` and `"5"`; refuses fractions.
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let whole = |value: f64| {
        (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64)
            .then_some(value as i64)
    };
    let parsed = match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Integer(value) => Some(value),
        LooseNumber::Float(value) => whole(value),
        LooseNumber::Text(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(whole))
        }
    };
    parsed.ok_or_else(|| serde::de::Error::custom("expected a whole number"))
}

/// Accepts any JSON number or a numeric string.
fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Integer(value) => Some(value as f64),
        LooseNumber::Float(value) => Some(value),
        LooseNumber::Text(raw) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("expected a number"))
}
