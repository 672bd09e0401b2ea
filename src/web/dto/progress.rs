use serde::{Deserialize, Serialize};

use crate::{
    model::entity::COMPLETED_PROGRESS,
    validation::{FieldRule, Schema},
};

pub static COURSE_PROGRESS_UPDATE_SCHEMA: Schema = Schema::new(
    "course_progress",
    &[FieldRule::integer("progress").range(0, COMPLETED_PROGRESS)],
);

pub static LESSON_PROGRESS_UPDATE_SCHEMA: Schema = Schema::new(
    "lesson_progress",
    &[FieldRule::boolean("completed")],
);

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseProgressUpdate {
    /// Percentage watched, 0 to 100.
    pub progress: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LessonProgressUpdate {
    pub completed: bool,
}
