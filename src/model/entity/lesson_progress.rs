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
pub struct UserLessonProgress {
    id: i64,
    user_id: i64,
    lesson_id: i64,
    completed: bool,
    watched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct UserLessonProgressCreate {
    pub user_id: i64,
    pub lesson_id: i64,
    pub completed: bool,
}

impl ResourceTyped for UserLessonProgress {
    fn get_resource_type() -> ResourceType {
        ResourceType::LessonProgress
    }
}

impl UserLessonProgress {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn lesson_id(&self) -> i64 {
        self.lesson_id
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn watched_at(&self) -> Option<DateTime<Utc>> {
        self.watched_at
    }

    fn matches(&self, user_id: i64, lesson_id: i64) -> bool {
        self.user_id == user_id && self.lesson_id == lesson_id
    }

    fn insert(
        table: &mut Table<UserLessonProgress>,
        data: UserLessonProgressCreate,
    ) -> StoreResult<Self> {
        let progress = table.insert_with(|id| UserLessonProgress {
            id,
            user_id: data.user_id,
            lesson_id: data.lesson_id,
            completed: data.completed,
            watched_at: data.completed.then(Utc::now),
        })?;

        tracing::debug!(
            user_id = progress.user_id,
            lesson_id = progress.lesson_id,
            completed = progress.completed,
            "lesson progress created"
        );
        Ok(progress.clone())
    }
}

#[async_trait]
impl CrudRepository<UserLessonProgress, UserLessonProgressCreate, i64> for UserLessonProgress {
    async fn create(mm: &ModelManager, data: UserLessonProgressCreate) -> StoreResult<Self> {
        let mut store = mm.write().await;
        Self::insert(&mut store.lesson_progress, data)
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> Option<Self> {
        mm.read().await.lesson_progress.get(id).cloned()
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.read().await.lesson_progress.values().cloned().collect()
    }
}

impl UserLessonProgress {
    pub async fn find(mm: &ModelManager, user_id: i64, lesson_id: i64) -> Option<Self> {
        mm.read()
            .await
            .lesson_progress
            .find(|p| p.matches(user_id, lesson_id))
            .cloned()
    }

    /// Upserts the pair's record. `watched_at` is stamped with the current time
    /// whenever `completed` is true and cleared otherwise.
    pub async fn update_completed(
        mm: &ModelManager,
        user_id: i64,
        lesson_id: i64,
        completed: bool,
    ) -> StoreResult<Self> {
        let mut store = mm.write().await;
        if let Some(existing) = store
            .lesson_progress
            .find_mut(|p| p.matches(user_id, lesson_id))
        {
            existing.completed = completed;
            existing.watched_at = completed.then(Utc::now);
            tracing::debug!(user_id, lesson_id, completed, "lesson progress updated");
            return Ok(existing.clone());
        }

        Self::insert(
            &mut store.lesson_progress,
            UserLessonProgressCreate {
                user_id,
                lesson_id,
                completed,
            },
        )
    }
}
