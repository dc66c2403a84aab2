use serde::{Deserialize, Serialize};

use super::MuscleGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Prep,
    Work,
    Rest,
    Transition,
    CheckOut,
    Finish,
}

/// Display statistics for a progressive exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetStats {
    /// Ordinal of the upcoming execution.
    pub count: u32,
    /// Weight gained over the first recorded weight, never negative.
    pub gain: f64,
}

/// One scheduled unit of a session. Ids increase monotonically within a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBlock {
    pub id: u32,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Seconds.
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_exercise: Option<String>,
    #[serde(default)]
    pub is_new_exercise: bool,
    #[serde(default)]
    pub requires_confirmation: bool,
    #[serde(default)]
    pub requires_weight_input: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_display: Option<SetStats>,
}

impl TimelineBlock {
    pub fn new(id: u32, block_type: BlockType, duration: u32) -> Self {
        Self {
            id,
            block_type,
            duration,
            exercise_name: None,
            exercise_id: None,
            reps: None,
            weight: None,
            set_number: None,
            total_sets: None,
            next_exercise: None,
            is_new_exercise: false,
            requires_confirmation: false,
            requires_weight_input: false,
            muscle_group: None,
            custom_label: None,
            stats_display: None,
        }
    }
}
