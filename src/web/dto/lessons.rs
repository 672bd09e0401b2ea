use crate::validation::{FieldRule, Schema};

pub static LESSON_CREATE_SCHEMA: Schema = Schema::new(
    "lesson",
    &[
        FieldRule::integer("courseId"),
        FieldRule::string("title"),
        FieldRule::string("description"),
        FieldRule::string("videoUrl"),
        FieldRule::string("duration"),
        FieldRule::integer("order"),
    ],
);
