use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    /// "No secondary group" marker on templates.
    #[default]
    None,
}

impl MuscleGroup {
    pub const ALL: &'static [MuscleGroup] = &[
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Abs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Legs => "LEGS",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Biceps => "BICEPS",
            MuscleGroup::Triceps => "TRICEPS",
            MuscleGroup::Abs => "ABS",
            MuscleGroup::None => "NONE",
        }
    }
}

/// Reference data for one exercise. Identity across history is the display `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: MuscleGroup,
    pub default_reps: u32,
    pub default_weight: f64,
}

impl ExerciseDefinition {
    pub fn new(
        id: &str,
        name: &str,
        group: MuscleGroup,
        default_reps: u32,
        default_weight: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            group,
            default_reps,
            default_weight,
        }
    }
}
