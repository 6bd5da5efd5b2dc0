// Shared test fixture for workout submissions.

use crate::modules::workouts::core::workout::{NewWorkout, parse_workout_date};

pub const NEW_WORKOUT_JSON: &str =
    r#"{"exercise":"bench press","sets":5,"reps":5,"weight":100.0,"date":"2024-01-15T10:00:00"}"#;

pub struct NewWorkoutBuilder {
    inner: NewWorkout,
}

impl Default for NewWorkoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewWorkoutBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(NEW_WORKOUT_JSON).unwrap(),
        }
    }

    pub fn exercise(mut self, v: impl Into<String>) -> Self {
        self.inner.exercise = v.into();
        self
    }

    pub fn sets(mut self, v: i64) -> Self {
        self.inner.sets = v;
        self
    }

    pub fn reps(mut self, v: i64) -> Self {
        self.inner.reps = v;
        self
    }

    pub fn weight(mut self, v: f64) -> Self {
        self.inner.weight = v;
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = parse_workout_date(v).unwrap();
        self
    }

    pub fn build(self) -> NewWorkout {
        self.inner
    }
}

#[cfg(test)]
mod new_workout_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewWorkoutBuilder::default().build();
        assert_eq!(built.exercise, "bench press");
        assert_eq!(built.sets, 5);
        assert_eq!(built.reps, 5);
        assert_eq!(built.weight, 100.0);
        assert_eq!(built.date.to_string(), "2024-01-15 10:00:00");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = NewWorkoutBuilder::new()
            .exercise("squat")
            .sets(3)
            .reps(12)
            .weight(42.5)
            .date("2023-12-31")
            .build();
        assert_eq!(built.exercise, "squat");
        assert_eq!(built.sets, 3);
        assert_eq!(built.reps, 12);
        assert_eq!(built.weight, 42.5);
        assert_eq!(built.date.to_string(), "2023-12-31 00:00:00");
    }
}
