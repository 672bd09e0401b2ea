use serde::Deserialize;

use crate::{
    model::entity::CourseLevel,
    validation::{FieldRule, Schema},
};

pub static COURSE_CREATE_SCHEMA: Schema = Schema::new(
    "course",
    &[
        FieldRule::string("title"),
        FieldRule::string("description"),
        FieldRule::string("instructor"),
        FieldRule::string("category"),
        FieldRule::one_of("level", CourseLevel::VALUES),
        FieldRule::string("duration"),
        FieldRule::integer("price"),
        FieldRule::string("imageUrl"),
    ],
);

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CoursesQuery {
    /// Exact, case-sensitive category filter. Empty means all courses.
    pub category: Option<String>,
}

impl CoursesQuery {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
