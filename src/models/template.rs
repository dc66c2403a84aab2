use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ExerciseDefinition, MuscleGroup};

/// Deserialize an optional number from loosely typed JSON.
/// Numeric strings are parsed; any other shape yields None rather than failing.
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserialize an optional duration in seconds. Values that are not whole, non-negative
/// and in range yield None.
fn deserialize_lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_lenient_f64(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .filter(|v| (0.0..=f64::from(u32::MAX)).contains(v))
        .map(|v| v as u32))
}

/// Deserialize the template exercise list, treating anything that is not an array as missing.
fn deserialize_exercise_list<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ExerciseDefinition>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(list @ Value::Array(_)) => serde_json::from_value(list)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    #[default]
    Progressive,
    Custom,
}

/// Raw per-exercise override as authored. Fields are unvalidated; see `timeline::SetPlan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomExerciseSettings {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub sets: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub reps: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub primary_group: MuscleGroup,
    #[serde(default)]
    pub secondary_group: MuscleGroup,
    #[serde(default, deserialize_with = "deserialize_exercise_list")]
    pub exercises: Option<Vec<ExerciseDefinition>>,

    // Only meaningful for WorkoutType::Custom
    /// Keyed by exercise id.
    #[serde(default)]
    pub custom_config: HashMap<String, CustomExerciseSettings>,
    #[serde(default, deserialize_with = "deserialize_lenient_seconds")]
    pub custom_rest_between_sets: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_seconds")]
    pub custom_rest_between_exercises: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_seconds")]
    pub custom_prep_duration: Option<u32>,
}

impl WorkoutTemplate {
    pub fn progressive(
        id: &str,
        name: &str,
        primary_group: MuscleGroup,
        secondary_group: MuscleGroup,
        exercises: Vec<ExerciseDefinition>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            workout_type: WorkoutType::Progressive,
            primary_group,
            secondary_group,
            exercises: Some(exercises),
            custom_config: HashMap::new(),
            custom_rest_between_sets: None,
            custom_rest_between_exercises: None,
            custom_prep_duration: None,
        }
    }
}

/// Global defaults used by progressive templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutSettings {
    /// Not consulted by the compiler; progressive templates always run four sets.
    pub sets_per_exercise: u32,
    pub set_duration: u32,
    pub rest_between_sets: u32,
    pub rest_between_exercises: u32,
    pub reps_per_set: u32,
}

impl Default for WorkoutSettings {
    fn default() -> Self {
        Self {
            sets_per_exercise: 3,
            set_duration: 60,
            rest_between_sets: 120,
            rest_between_exercises: 30,
            reps_per_set: 8,
        }
    }
}
