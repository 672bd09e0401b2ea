use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager, Table,
    error::StoreResult,
    repo::{CrudRepository, ResourceType},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: i64,
    course_id: i64,
    title: String,
    description: String,
    video_url: String,
    duration: String,
    order: i64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonCreate {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub duration: String,
    pub order: i64,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn insert(lessons: &mut Table<Lesson>, data: LessonCreate) -> StoreResult<Self> {
        let lesson = lessons.insert_with(|id| Lesson {
            id,
            course_id: data.course_id,
            title: data.title,
            description: data.description,
            video_url: data.video_url,
            duration: data.duration,
            order: data.order,
            created_at: Utc::now(),
        })?;

        tracing::debug!(lesson_id = lesson.id, course_id = lesson.course_id, "lesson created");
        Ok(lesson.clone())
    }
}

#[async_trait]
impl CrudRepository<Lesson, LessonCreate, i64> for Lesson {
    async fn create(mm: &ModelManager, data: LessonCreate) -> StoreResult<Self> {
        let mut store = mm.write().await;
        Self::insert(&mut store.lessons, data)
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> Option<Self> {
        mm.read().await.lessons.get(id).cloned()
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.read().await.lessons.values().cloned().collect()
    }
}

impl Lesson {
    /// Lessons of a course sorted by `order`; equal orders keep creation order.
    pub async fn by_course(mm: &ModelManager, course_id: i64) -> Vec<Self> {
        let mut lessons: Vec<Self> = mm
            .read()
            .await
            .lessons
            .values()
            .filter(|lesson| lesson.course_id == course_id)
            .cloned()
            .collect();

        lessons.sort_by_key(|lesson| lesson.order);
        lessons
    }
}
