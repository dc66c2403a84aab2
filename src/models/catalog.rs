//! Built-in exercises and the default push / legs / pull split.

use super::{ExerciseDefinition, MuscleGroup, WorkoutTemplate};

fn exercise(
    id: &str,
    name: &str,
    group: MuscleGroup,
    reps: u32,
    weight: f64,
) -> ExerciseDefinition {
    ExerciseDefinition::new(id, name, group, reps, weight)
}

/// Default exercises, grouped by muscle group in catalog order.
pub fn default_exercises() -> Vec<ExerciseDefinition> {
    use MuscleGroup::{Abs, Back, Biceps, Chest, Legs, Shoulders, Triceps};

    vec![
        exercise("ch_1", "Barbell Bench Press", Chest, 10, 60.0),
        exercise("ch_2", "Incline Dumbbell Press", Chest, 10, 24.0),
        exercise("ch_12", "Pec Deck", Chest, 12, 35.0),
        exercise("bk_1", "Deadlift", Back, 8, 80.0),
        exercise("bk_3", "Barbell Row", Back, 10, 50.0),
        exercise("bk_11", "Lat Pulldown", Back, 12, 45.0),
        exercise("bk_12", "Seated Cable Row", Back, 12, 45.0),
        exercise("lg_1", "Barbell Squat", Legs, 8, 80.0),
        exercise("lg_2", "Romanian Deadlift", Legs, 10, 60.0),
        exercise("lg_8", "Standing Calf Raise", Legs, 20, 40.0),
        exercise("lg_11", "Leg Press", Legs, 12, 120.0),
        exercise("lg_12", "Leg Extension", Legs, 15, 35.0),
        exercise("lg_13", "Lying Leg Curl", Legs, 15, 30.0),
        exercise("sh_1", "Overhead Press", Shoulders, 10, 40.0),
        exercise("sh_3", "Lateral Raise", Shoulders, 15, 8.0),
        exercise("bi_1", "Barbell Curl", Biceps, 10, 30.0),
        exercise("bi_3", "Hammer Curl", Biceps, 12, 14.0),
        exercise("bi_6", "Incline Dumbbell Curl", Biceps, 12, 10.0),
        exercise("tri_2", "Skull Crusher", Triceps, 10, 30.0),
        exercise("abs_2", "Hanging Leg Raise", Abs, 15, 0.0),
        exercise("abs_4", "Plank", Abs, 60, 0.0),
        exercise("abs_19", "Cable Crunch", Abs, 15, 25.0),
    ]
}

pub fn find_exercise(id: &str) -> Option<ExerciseDefinition> {
    default_exercises().into_iter().find(|e| e.id == id)
}

fn pick(ids: &[&str]) -> Vec<ExerciseDefinition> {
    ids.iter().filter_map(|id| find_exercise(id)).collect()
}

pub fn default_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::progressive(
            "tpl_push",
            "PUSH: Chest + Shoulders + Triceps",
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            pick(&["ch_1", "ch_2", "sh_1", "ch_12", "sh_3", "tri_2", "abs_19"]),
        ),
        WorkoutTemplate::progressive(
            "tpl_legs",
            "LEGS: Legs + Abs",
            MuscleGroup::Legs,
            MuscleGroup::Abs,
            pick(&["lg_1", "lg_11", "lg_2", "lg_12", "lg_13", "lg_8", "abs_4"]),
        ),
        WorkoutTemplate::progressive(
            "tpl_pull",
            "PULL: Back + Biceps",
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            pick(&["bk_1", "bk_11", "bk_3", "bk_12", "bi_1", "bi_3", "bi_6", "abs_2"]),
        ),
    ]
}

pub fn find_template(id: &str) -> Option<WorkoutTemplate> {
    default_templates().into_iter().find(|t| t.id == id)
}
