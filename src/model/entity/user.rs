use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;
use crate::model::{
    ModelManager, Table,
    error::StoreResult,
    repo::{CrudRepository, ResourceType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl UserRole {
    pub const VALUES: &'static [&'static str] = &["student", "instructor", "admin"];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Instructor => write!(f, "instructor"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: i64,
    email: String,
    #[serde(skip_serializing, default)]
    password: String,
    first_name: String,
    last_name: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl ResourceTyped for User {
    fn get_resource_type() -> ResourceType {
        ResourceType::User
    }
}

impl User {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[cfg(test)]
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn insert(users: &mut Table<User>, data: UserCreate) -> StoreResult<Self> {
        let user = users.insert_with(|id| User {
            id,
            email: data.email,
            password: data.password,
            first_name: data.first_name,
            last_name: data.last_name,
            role: data.role,
            created_at: Utc::now(),
        })?;

        tracing::debug!(user_id = user.id, role = %user.role, "user created");
        Ok(user.clone())
    }
}

#[async_trait]
impl CrudRepository<User, UserCreate, i64> for User {
    /// Appends a new user. Emails are not checked for collisions.
    async fn create(mm: &ModelManager, data: UserCreate) -> StoreResult<Self> {
        let mut store = mm.write().await;
        Self::insert(&mut store.users, data)
    }

    async fn find_by_id(mm: &ModelManager, id: i64) -> Option<Self> {
        mm.read().await.users.get(id).cloned()
    }

    async fn list(mm: &ModelManager) -> Vec<Self> {
        mm.read().await.users.values().cloned().collect()
    }
}

impl User {
    pub async fn find_by_email(mm: &ModelManager, email: &str) -> Option<Self> {
        mm.read()
            .await
            .users
            .find(|user| user.email == email)
            .cloned()
    }
}
