//! Session timeline compilation.
//!
//! A compiled timeline always runs `PREP -> (WORK -> REST)* -> TRANSITION -> ... ->
//! CHECK_OUT -> FINISH`. REST only separates sets of one exercise and TRANSITION only
//! separates exercises. The one exception is a template without exercises, which
//! stops after PREP.

use crate::models::{
    BlockType, CustomExerciseSettings, ExerciseDefinition, TimelineBlock, WorkoutSettings,
    WorkoutTemplate, WorkoutType,
};
use crate::progression::{decide, Snapshot};

pub const PREP_DURATION: u32 = 30;
pub const PROGRESSIVE_SETS: u32 = 4;
pub const DEFAULT_REPS_PER_SET: u32 = 8;
/// Upper bounds for custom overrides; larger values are clamped.
pub const MAX_CUSTOM_SETS: u32 = 20;
pub const MAX_CUSTOM_REPS: u32 = 100;

/// Seconds allotted to one set: two seconds per rep plus ten seconds setup.
pub fn set_duration(reps: u32) -> u32 {
    reps.saturating_mul(2).saturating_add(10)
}

pub fn total_duration(blocks: &[TimelineBlock]) -> u32 {
    blocks
        .iter()
        .fold(0u32, |acc, block| acc.saturating_add(block.duration))
}

/// Validated sets/reps/weight for one exercise of a custom template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetPlan {
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

impl SetPlan {
    pub const DEFAULT: SetPlan = SetPlan {
        sets: 3,
        reps: 10,
        weight: 20.0,
    };

    /// Each field is checked on its own; a bad field falls back to its default
    /// without affecting the others.
    pub fn resolve(raw: Option<&CustomExerciseSettings>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        Self {
            sets: whole_count(raw.sets, MAX_CUSTOM_SETS).unwrap_or(Self::DEFAULT.sets),
            reps: whole_count(raw.reps, MAX_CUSTOM_REPS).unwrap_or(Self::DEFAULT.reps),
            weight: raw
                .weight
                .filter(|w| w.is_finite())
                .unwrap_or(Self::DEFAULT.weight),
        }
    }
}

/// Finite and at least one once truncated to a whole number, clamped to `max`.
fn whole_count(value: Option<f64>, max: u32) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 1.0)
        .map(|v| v.trunc().min(f64::from(max)) as u32)
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|&v| v > 0)
}

#[derive(Default)]
struct TimelineBuilder {
    blocks: Vec<TimelineBlock>,
}

impl TimelineBuilder {
    fn push(&mut self, block_type: BlockType, duration: u32) -> &mut TimelineBlock {
        let index = self.blocks.len();
        self.blocks
            .push(TimelineBlock::new(index as u32, block_type, duration));
        &mut self.blocks[index]
    }

    fn work(
        &mut self,
        exercise: &ExerciseDefinition,
        set: u32,
        total_sets: u32,
        reps: u32,
        weight: f64,
    ) -> &mut TimelineBlock {
        let block = self.push(BlockType::Work, set_duration(reps));
        block.exercise_name = Some(exercise.name.clone());
        block.exercise_id = Some(exercise.id.clone());
        block.reps = Some(reps);
        block.weight = Some(weight);
        block.set_number = Some(set);
        block.total_sets = Some(total_sets);
        block.muscle_group = Some(exercise.group);
        block
    }

    fn rest_after(
        &mut self,
        exercise: &ExerciseDefinition,
        set: u32,
        total_sets: u32,
        duration: u32,
    ) {
        if set < total_sets {
            let block = self.push(BlockType::Rest, duration);
            block.next_exercise = Some(format!("{} (set {})", exercise.name, set + 1));
        }
    }

    fn transition_to(&mut self, next: Option<&ExerciseDefinition>, duration: u32) {
        if let Some(next) = next {
            let block = self.push(BlockType::Transition, duration);
            block.next_exercise = Some(next.name.clone());
        }
    }

    fn finish(mut self) -> Vec<TimelineBlock> {
        self.push(BlockType::CheckOut, 0).requires_confirmation = true;
        self.push(BlockType::Finish, 0);
        self.blocks
    }
}

/// Compile a template into its ordered block sequence.
///
/// Progressive exercises take their working weight from `snapshot`; custom
/// exercises use the template's own per-exercise overrides.
pub fn compile(
    template: &WorkoutTemplate,
    settings: &WorkoutSettings,
    snapshot: &Snapshot,
) -> Vec<TimelineBlock> {
    let mut timeline = TimelineBuilder::default();

    let prep = match template.workout_type {
        WorkoutType::Custom => {
            non_zero(template.custom_prep_duration).unwrap_or(PREP_DURATION)
        }
        WorkoutType::Progressive => PREP_DURATION,
    };
    timeline.push(BlockType::Prep, prep);

    let exercises = match template.exercises.as_deref() {
        Some(list) if !list.is_empty() => list,
        _ => {
            tracing::warn!(
                "Template {} has no exercises, timeline stops after prep",
                template.id
            );
            return timeline.blocks;
        }
    };

    match template.workout_type {
        WorkoutType::Progressive => {
            compile_progressive(&mut timeline, exercises, settings, snapshot)
        }
        WorkoutType::Custom => compile_custom(&mut timeline, template, exercises, settings),
    }

    timeline.finish()
}

fn compile_progressive(
    timeline: &mut TimelineBuilder,
    exercises: &[ExerciseDefinition],
    settings: &WorkoutSettings,
    snapshot: &Snapshot,
) {
    let reps = non_zero(Some(settings.reps_per_set)).unwrap_or(DEFAULT_REPS_PER_SET);

    for (i, exercise) in exercises.iter().enumerate() {
        let decision = decide(&exercise.name, exercise.default_weight, snapshot);
        tracing::debug!(
            "{}: weight {}, new {}",
            exercise.name,
            decision.weight,
            decision.is_new
        );

        for set in 1..=PROGRESSIVE_SETS {
            let warm_up = set == 1;
            let weight = if warm_up { 0.0 } else { decision.weight };

            let block = timeline.work(exercise, set, PROGRESSIVE_SETS, reps, weight);
            block.is_new_exercise = decision.is_new;
            // The first working set is where a new exercise's weight gets recorded.
            block.requires_weight_input = decision.is_new && set == 2;
            block.stats_display = Some(decision.stats);
            block.custom_label = Some(if warm_up {
                "Warm-up set".to_string()
            } else {
                format!("Working set #{}", set - 1)
            });

            timeline.rest_after(exercise, set, PROGRESSIVE_SETS, settings.rest_between_sets);
        }

        timeline.transition_to(exercises.get(i + 1), settings.rest_between_exercises);
    }
}

fn compile_custom(
    timeline: &mut TimelineBuilder,
    template: &WorkoutTemplate,
    exercises: &[ExerciseDefinition],
    settings: &WorkoutSettings,
) {
    let rest_between_sets =
        non_zero(template.custom_rest_between_sets).unwrap_or(settings.rest_between_sets);
    let rest_between_exercises = non_zero(template.custom_rest_between_exercises)
        .unwrap_or(settings.rest_between_exercises);

    for (i, exercise) in exercises.iter().enumerate() {
        let plan = SetPlan::resolve(template.custom_config.get(&exercise.id));

        for set in 1..=plan.sets {
            let block = timeline.work(exercise, set, plan.sets, plan.reps, plan.weight);
            block.custom_label = Some(format!("SET {}/{}", set, plan.sets));

            timeline.rest_after(exercise, set, plan.sets, rest_between_sets);
        }

        timeline.transition_to(exercises.get(i + 1), rest_between_exercises);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinishedExerciseData, MuscleGroup, SetStats};
    use crate::progression::ExerciseHistorySnapshot;

    fn exercise(id: &str, name: &str, weight: f64) -> ExerciseDefinition {
        ExerciseDefinition::new(id, name, MuscleGroup::Legs, 8, weight)
    }

    fn progressive(exercises: Vec<ExerciseDefinition>) -> WorkoutTemplate {
        WorkoutTemplate::progressive(
            "tpl",
            "Legs",
            MuscleGroup::Legs,
            MuscleGroup::None,
            exercises,
        )
    }

    fn custom(exercises: Vec<ExerciseDefinition>) -> WorkoutTemplate {
        let mut template = progressive(exercises);
        template.workout_type = WorkoutType::Custom;
        template
    }

    fn types(blocks: &[TimelineBlock]) -> Vec<BlockType> {
        blocks.iter().map(|b| b.block_type).collect()
    }

    fn three_exercises() -> Vec<ExerciseDefinition> {
        vec![
            exercise("lg_1", "Squat", 80.0),
            exercise("lg_2", "Romanian Deadlift", 60.0),
            exercise("lg_11", "Leg Press", 120.0),
        ]
    }

    #[test]
    fn test_progressive_block_count_is_8n_plus_2() {
        let settings = WorkoutSettings::default();
        for n in 1..=4 {
            let template = progressive(three_exercises().into_iter().cycle().take(n).collect());
            let blocks = compile(&template, &settings, &Snapshot::new());
            assert_eq!(blocks.len(), 8 * n + 2);
        }

        let blocks = compile(&progressive(three_exercises()), &settings, &Snapshot::new());
        assert_eq!(blocks.len(), 26);
    }

    #[test]
    fn test_progressive_block_order() {
        let template = progressive(vec![exercise("a", "A", 10.0), exercise("b", "B", 10.0)]);
        let blocks = compile(&template, &WorkoutSettings::default(), &Snapshot::new());

        use BlockType::*;
        assert_eq!(
            types(&blocks),
            vec![
                Prep, Work, Rest, Work, Rest, Work, Rest, Work, Transition, Work, Rest, Work,
                Rest, Work, Rest, Work, CheckOut, Finish,
            ]
        );
        assert_eq!(blocks[8].next_exercise.as_deref(), Some("B"));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let blocks = compile(
            &progressive(three_exercises()),
            &WorkoutSettings::default(),
            &Snapshot::new(),
        );
        assert!(blocks.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(blocks[0].id, 0);
    }

    #[test]
    fn test_progressive_new_exercise_sets() {
        let settings = WorkoutSettings {
            reps_per_set: 10,
            rest_between_sets: 90,
            rest_between_exercises: 45,
            ..WorkoutSettings::default()
        };
        let template = progressive(vec![exercise("lg_1", "Squat", 80.0)]);
        let blocks = compile(&template, &settings, &Snapshot::new());

        assert_eq!(blocks[0].block_type, BlockType::Prep);
        assert_eq!(blocks[0].duration, PREP_DURATION);

        let work: Vec<_> = blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Work)
            .collect();
        assert_eq!(work.len(), 4);
        assert_eq!(work[0].weight, Some(0.0));
        assert!(work[1..].iter().all(|b| b.weight == Some(80.0)));
        assert!(work.iter().all(|b| b.duration == 30 && b.reps == Some(10)));
        assert!(work.iter().all(|b| b.is_new_exercise));
        assert_eq!(
            work.iter().map(|b| b.requires_weight_input).collect::<Vec<_>>(),
            vec![false, true, false, false]
        );
        assert_eq!(work[0].custom_label.as_deref(), Some("Warm-up set"));
        assert_eq!(work[3].custom_label.as_deref(), Some("Working set #3"));
        assert_eq!(work[1].stats_display, Some(SetStats { count: 1, gain: 0.0 }));

        assert!(blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Rest)
            .all(|b| b.duration == 90));
        assert_eq!(blocks[2].next_exercise.as_deref(), Some("Squat (set 2)"));

        let check_out = &blocks[blocks.len() - 2];
        assert_eq!(check_out.block_type, BlockType::CheckOut);
        assert!(check_out.requires_confirmation);
        assert_eq!(check_out.duration, 0);
        assert_eq!(blocks[blocks.len() - 1].block_type, BlockType::Finish);
    }

    #[test]
    fn test_progressive_uses_history() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(
            "Squat".to_string(),
            ExerciseHistorySnapshot {
                last: FinishedExerciseData {
                    name: "Squat".to_string(),
                    weight: 85.0,
                    skipped: false,
                    total_executions_count: 3,
                },
                start_weight: 80.0,
            },
        );
        let template = progressive(vec![exercise("lg_1", "Squat", 80.0)]);
        let blocks = compile(&template, &WorkoutSettings::default(), &snapshot);

        let work: Vec<_> = blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Work)
            .collect();
        assert_eq!(work[1].weight, Some(87.5));
        assert!(work.iter().all(|b| !b.is_new_exercise && !b.requires_weight_input));
        assert_eq!(work[1].stats_display, Some(SetStats { count: 4, gain: 7.5 }));
    }

    #[test]
    fn test_zero_reps_setting_falls_back() {
        let settings = WorkoutSettings {
            reps_per_set: 0,
            ..WorkoutSettings::default()
        };
        let blocks = compile(
            &progressive(vec![exercise("a", "A", 10.0)]),
            &settings,
            &Snapshot::new(),
        );
        assert_eq!(blocks[1].reps, Some(DEFAULT_REPS_PER_SET));
        assert_eq!(blocks[1].duration, 26);
    }

    #[test]
    fn test_custom_single_exercise_three_sets() {
        let template = custom(vec![exercise("a", "A", 10.0)]);
        let blocks = compile(&template, &WorkoutSettings::default(), &Snapshot::new());

        use BlockType::*;
        assert_eq!(
            types(&blocks),
            vec![Prep, Work, Rest, Work, Rest, Work, CheckOut, Finish]
        );
        // Defaults: 3 x 10 @ 20
        assert_eq!(blocks[1].weight, Some(20.0));
        assert_eq!(blocks[1].duration, 30);
        assert_eq!(blocks[5].custom_label.as_deref(), Some("SET 3/3"));
        assert!(!blocks[1].is_new_exercise);
        assert!(blocks[1].stats_display.is_none());
    }

    #[test]
    fn test_custom_overrides_and_timings() {
        let mut template = custom(vec![exercise("a", "A", 10.0), exercise("b", "B", 10.0)]);
        template.custom_prep_duration = Some(15);
        template.custom_rest_between_sets = Some(75);
        template.custom_rest_between_exercises = Some(0);
        template.custom_config.insert(
            "a".to_string(),
            CustomExerciseSettings {
                sets: Some(2.0),
                reps: Some(5.0),
                weight: Some(42.5),
            },
        );

        let settings = WorkoutSettings::default();
        let blocks = compile(&template, &settings, &Snapshot::new());

        assert_eq!(blocks[0].duration, 15);
        assert_eq!(blocks[1].weight, Some(42.5));
        assert_eq!(blocks[1].duration, 20);
        assert_eq!(blocks[2].block_type, BlockType::Rest);
        assert_eq!(blocks[2].duration, 75);
        // Zero override falls back to the settings value.
        assert_eq!(blocks[4].block_type, BlockType::Transition);
        assert_eq!(blocks[4].duration, settings.rest_between_exercises);
        // "b" has no override: default plan.
        assert_eq!(blocks[5].weight, Some(20.0));
        assert_eq!(blocks.len(), 1 + 3 + 1 + 5 + 2);
    }

    #[test]
    fn test_custom_prep_ignored_for_progressive() {
        let mut template = progressive(vec![exercise("a", "A", 10.0)]);
        template.custom_prep_duration = Some(99);
        let blocks = compile(&template, &WorkoutSettings::default(), &Snapshot::new());
        assert_eq!(blocks[0].duration, PREP_DURATION);
    }

    #[test]
    fn test_set_plan_sanitizes_each_field() {
        let plan = SetPlan::resolve(Some(&CustomExerciseSettings {
            sets: Some(f64::NAN),
            reps: Some(-4.0),
            weight: Some(55.0),
        }));
        assert_eq!(plan, SetPlan { sets: 3, reps: 10, weight: 55.0 });

        let plan = SetPlan::resolve(Some(&CustomExerciseSettings {
            sets: Some(5.0),
            reps: None,
            weight: Some(f64::INFINITY),
        }));
        assert_eq!(plan, SetPlan { sets: 5, reps: 10, weight: 20.0 });

        let plan = SetPlan::resolve(Some(&CustomExerciseSettings {
            sets: Some(0.5),
            reps: Some(12.9),
            weight: Some(-5.0),
        }));
        assert_eq!(plan, SetPlan { sets: 3, reps: 12, weight: -5.0 });

        assert_eq!(SetPlan::resolve(None), SetPlan::DEFAULT);
    }

    #[test]
    fn test_set_plan_clamps_oversized_counts() {
        let plan = SetPlan::resolve(Some(&CustomExerciseSettings {
            sets: Some(1e12),
            reps: Some(5000.0),
            weight: None,
        }));
        assert_eq!(
            plan,
            SetPlan {
                sets: MAX_CUSTOM_SETS,
                reps: MAX_CUSTOM_REPS,
                weight: 20.0
            }
        );

        let mut template = custom(vec![exercise("a", "A", 10.0)]);
        template.custom_config.insert(
            "a".to_string(),
            CustomExerciseSettings {
                sets: Some(1e6),
                reps: None,
                weight: None,
            },
        );
        let blocks = compile(&template, &WorkoutSettings::default(), &Snapshot::new());
        let work_sets = blocks
            .iter()
            .filter(|b| b.block_type == BlockType::Work)
            .count();
        assert_eq!(work_sets, MAX_CUSTOM_SETS as usize);
        assert_eq!(blocks.len(), 1 + 2 * MAX_CUSTOM_SETS as usize - 1 + 2);
        assert_eq!(
            blocks[blocks.len() - 3].custom_label.as_deref(),
            Some("SET 20/20")
        );
    }

    #[test]
    fn test_empty_exercise_list_is_prep_only() {
        let blocks = compile(&progressive(vec![]), &WorkoutSettings::default(), &Snapshot::new());
        assert_eq!(types(&blocks), vec![BlockType::Prep]);

        let blocks = compile(&custom(vec![]), &WorkoutSettings::default(), &Snapshot::new());
        assert_eq!(types(&blocks), vec![BlockType::Prep]);
    }

    #[test]
    fn test_missing_exercise_list_is_prep_only() {
        let mut template = progressive(vec![]);
        template.exercises = None;
        let blocks = compile(&template, &WorkoutSettings::default(), &Snapshot::new());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block_type, BlockType::Prep);
    }

    #[test]
    fn test_total_duration() {
        let template = custom(vec![exercise("a", "A", 10.0)]);
        let settings = WorkoutSettings::default();
        let blocks = compile(&template, &settings, &Snapshot::new());
        // prep + 3 sets of 30s + 2 rests
        assert_eq!(
            total_duration(&blocks),
            PREP_DURATION + 3 * 30 + 2 * settings.rest_between_sets
        );
    }

    #[test]
    fn test_set_duration_saturates() {
        assert_eq!(set_duration(8), 26);
        assert_eq!(set_duration(u32::MAX), u32::MAX);
    }
}
