pub mod catalog;
pub mod diary;
pub mod exercise;
pub mod from_row;
pub mod template;
pub mod timeline;

pub use diary::{DayRecord, DayRow, FinishedExerciseData, RawExerciseResult};
pub use exercise::{ExerciseDefinition, MuscleGroup};
pub use from_row::FromSqliteRow;
pub use template::{CustomExerciseSettings, WorkoutSettings, WorkoutTemplate, WorkoutType};
pub use timeline::{BlockType, SetStats, TimelineBlock};
