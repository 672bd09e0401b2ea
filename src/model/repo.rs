use crate::model::{ModelManager, error::StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    User,
    Course,
    Lesson,
    CourseProgress,
    LessonProgress,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Course => write!(f, "Course"),
            Self::Lesson => write!(f, "Lesson"),
            Self::CourseProgress => write!(f, "Course progress"),
            Self::LessonProgress => write!(f, "Lesson progress"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Create and lookup operations shared by every table in the store.
///
/// Nothing is ever deleted or replaced wholesale, so there is no `update`/`delete`
/// here; the progress entities expose their own upserts instead.
#[async_trait::async_trait]
pub trait CrudRepository<T, Create, V>
where
    T: ResourceTyped,
    V: Clone + Copy,
{
    async fn create(mm: &ModelManager, data: Create) -> StoreResult<T>;

    async fn find_by_id(mm: &ModelManager, id: V) -> Option<T>;

    /// All rows in id order.
    async fn list(mm: &ModelManager) -> Vec<T>;
}
