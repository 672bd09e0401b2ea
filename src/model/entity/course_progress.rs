use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager, Table,
    error::StoreResult,
    repo::{CrudRepository, ResourceType},
};

/// Progress at which a course counts as completed.
pub const COMPLETED_PROGRESS: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCourseProgress {
    id: i64,
    user_id: i64,
    course_id: i64,
    progress: i64,
    enrolled: bool,
    completed: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserCourseProgressCreate {
    pub user_id: i64,
    pub course_id: i64,
    pub progress: i64,
    pub enrolled: bool,
    pub completed: bool,
}

impl UserCourseProgressCreate {
    /// Fresh enrollment: nothing watched yet.
    pub fn enrollment(user_id: i64, course_id: i64) -> Self {
        Self::enrolled_at(user_id, course_id, 0)
    }

    pub fn enrolled_at(user_id: i64, course_id: i64, progress: i64) -> Self {
        Self {
            user_id,
            course_id,
            progress,
            enrolled: true,
            completed: progress >= COMPLETED_PROGRESS,
        }
    }
}

impl ResourceTyped for UserCourseProgress {
    fn get_resource_type() -> ResourceType {
        ResourceType::CourseProgress
    }
}

impl UserCourseProgress {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }

    pub fn progress(&self) -> i64 {
        self.progress
    }

    pub fn enrolled(&self) -> bool {
        self.enrolled
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn matches(&self, user_id: i64, course_id: i64) -> bool {
        self.user_id == user_id && self.course_id == course_id
    }

    fn insert(
        table: &mut Table<UserCourseProgress>,
        data: UserCourseProgressCreate,
    ) -> StoreResult<Self> {
        let progress = table.insert_with(|id| UserCourseProgress {
            id,
            user_id: data.user_id,
            course_id: data.course_id,
            progress: data.progress,
            enrolled: data.enrolled,
            completed: data.completed,
            created_at: Utc::now(),
        })?;

        tracing::debug!(
            user_id = progress.user_id,
            course_id = progress.course_id,
            "course progress created"
        );
        Ok(progress.clone())
    }
}

#[async_trait]
impl CrudRepository<UserCourseProgress, UserCourseProgressCreate, i64> for UserCourseProgress {
    /// Appends unconditionally; two records for the same pair are possible here.
    async fn create(mm: &ModelManager, data: UserCourseProgressCreate) -> StoreResult<Self> {
        let mut store = mm.write().await;
        Self::insert(&mut store.course_progress, data)
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> Option<Self> {
        mm.read().await.course_progress.get(id).cloned()
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.read().await.course_progress.values().cloned().collect()
    }
}

impl UserCourseProgress {
    pub async fn find(mm: &ModelManager, user_id: i64, course_id: i64) -> Option<Self> {
        mm.read()
            .await
            .course_progress
            .find(|p| p.matches(user_id, course_id))
            .cloned()
    }

    /// Sets the progress of the pair's record, creating an enrolled one if none
    /// exists. `completed` always follows `progress >= 100`.
    pub async fn update_progress(
        mm: &ModelManager,
        user_id: i64,
        course_id: i64,
        progress: i64,
    ) -> StoreResult<Self> {
        let mut store = mm.write().await;
        if let Some(existing) = store
            .course_progress
            .find_mut(|p| p.matches(user_id, course_id))
        {
            existing.progress = progress;
            existing.completed = progress >= COMPLETED_PROGRESS;
            tracing::debug!(user_id, course_id, progress, "course progress updated");
            return Ok(existing.clone());
        }

        Self::insert(
            &mut store.course_progress,
            UserCourseProgressCreate::enrolled_at(user_id, course_id, progress),
        )
    }

    /// Returns the pair's record untouched if there is one, otherwise enrolls the
    /// user with zero progress.
    pub async fn enroll(mm: &ModelManager, user_id: i64, course_id: i64) -> StoreResult<Self> {
        let mut store = mm.write().await;
        if let Some(existing) = store
            .course_progress
            .find(|p| p.matches(user_id, course_id))
        {
            return Ok(existing.clone());
        }

        Self::insert(
            &mut store.course_progress,
            UserCourseProgressCreate::enrollment(user_id, course_id),
        )
    }
}
