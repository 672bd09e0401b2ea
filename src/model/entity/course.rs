use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager, Table,
    error::StoreResult,
    repo::{CrudRepository, ResourceType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const VALUES: &'static [&'static str] = &["beginner", "intermediate", "advanced"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: i64,
    title: String,
    description: String,
    instructor: String,
    category: String,
    level: CourseLevel,
    duration: String,
    price: i64,
    image_url: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: String,
    pub price: i64,
    pub image_url: String,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> ResourceType {
        ResourceType::Course
    }
}

impl Course {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn level(&self) -> CourseLevel {
        self.level
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn insert(courses: &mut Table<Course>, data: CourseCreate) -> StoreResult<Self> {
        let course = courses.insert_with(|id| Course {
            id,
            title: data.title,
            description: data.description,
            instructor: data.instructor,
            category: data.category,
            level: data.level,
            duration: data.duration,
            price: data.price,
            image_url: data.image_url,
            created_at: Utc::now(),
        })?;

        tracing::debug!(course_id = course.id, "course created");
        Ok(course.clone())
    }
}

#[async_trait]
impl CrudRepository<Course, CourseCreate, i64> for Course {
    async fn create(mm: &ModelManager, data: CourseCreate) -> StoreResult<Self> {
        let mut store = mm.write().await;
        Self::insert(&mut store.courses, data)
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> Option<Self> {
        mm.read().await.courses.get(id).cloned()
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.read().await.courses.values().cloned().collect()
    }
}

impl Course {
    /// Courses whose category equals `category` exactly (case-sensitive).
    pub async fn by_category(mm: &ModelManager, category: &str) -> Vec<Self> {
        mm.read()
            .await
            .courses
            .values()
            .filter(|course| course.category == category)
            .cloned()
            .collect()
    }

    /// Courses the user holds an enrolled progress record for, in catalog order.
    pub async fn enrolled_by(mm: &ModelManager, user_id: i64) -> Vec<Self> {
        let store = mm.read().await;
        let course_ids: HashSet<i64> = store
            .course_progress
            .values()
            .filter(|p| p.user_id() == user_id && p.enrolled())
            .map(|p| p.course_id())
            .collect();

        store
            .courses
            .values()
            .filter(|course| course_ids.contains(&course.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{
        Store,
        entity::{UserCourseProgress, UserCourseProgressCreate},
    };

    fn course_create(title: &str, category: &str) -> CourseCreate {
        CourseCreate {
            title: title.to_string(),
            description: "desc".to_string(),
            instructor: "Grace Hopper".to_string(),
            category: category.to_string(),
            level: CourseLevel::Beginner,
            duration: "2 hours".to_string(),
            price: 10,
            image_url: "https://example.com/c.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_course_is_found_unchanged() {
        let mm = ModelManager::new(Store::seeded().unwrap());
        for (title, category) in [("Rust", "Programming"), ("Go", "Backend"), ("Zig", "")] {
            let created = Course::create(&mm, course_create(title, category))
                .await
                .unwrap();
            assert_eq!(Course::find_by_id(&mm, created.id()).await, Some(created));
        }

        assert_eq!(Course::find_by_id(&mm, 6).await.map(|c| c.title().to_string()), Some("Rust".to_string()));
        assert_eq!(Course::find_by_id(&mm, 99999).await, None);
        assert_eq!(Course::list(&mm).await.len(), 8);
    }

    #[tokio::test]
    async fn test_by_category_is_exact_match() {
        let mm = ModelManager::new(Store::seeded().unwrap());
        Course::create(&mm, course_create("Rust", "Programming")).await.unwrap();
        Course::create(&mm, course_create("Lowercase", "programming")).await.unwrap();

        let programming = Course::by_category(&mm, "Programming").await;
        let ids: Vec<i64> = programming.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 6]);
        assert!(programming.iter().all(|c| c.category() == "Programming"));

        assert!(Course::by_category(&mm, "Cooking").await.is_empty());
    }

    #[tokio::test]
    async fn test_enrolled_by_follows_catalog_order() {
        let mm = ModelManager::new(Store::seeded().unwrap());
        for course_id in [4, 2] {
            UserCourseProgress::enroll(&mm, 1, course_id).await.unwrap();
        }
        // not enrolled, must be skipped
        UserCourseProgress::create(
            &mm,
            UserCourseProgressCreate {
                user_id: 1,
                course_id: 3,
                progress: 0,
                enrolled: false,
                completed: false,
            },
        )
        .await
        .unwrap();
        UserCourseProgress::enroll(&mm, 2, 5).await.unwrap();

        let ids: Vec<i64> = Course::enrolled_by(&mm, 1)
            .await
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(ids, vec![2, 4]);
        assert!(Course::enrolled_by(&mm, 42).await.is_empty());
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_value(CourseLevel::Intermediate).unwrap();
        assert_eq!(json, "intermediate");
        let level: CourseLevel = serde_json::from_value(serde_json::json!("advanced")).unwrap();
        assert_eq!(level, CourseLevel::Advanced);
    }
}
