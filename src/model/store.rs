use std::collections::BTreeMap;

use crate::model::{
    ResourceType,
    entity::{Course, Lesson, User, UserCourseProgress, UserLessonProgress},
    error::{StoreError, StoreResult},
};

/// One in-memory table: rows keyed by their id plus the counter handing out the
/// next one. Ids are never reused.
#[derive(Debug)]
pub struct Table<T> {
    resource_type: ResourceType,
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Table<T> {
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    #[cfg(test)]
    fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Reserves the next id and stores the row `build` makes out of it.
    pub fn insert_with<F>(&mut self, build: F) -> StoreResult<&T>
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdExhausted {
            resource_type: self.resource_type,
        })?;

        Ok(&*self.rows.entry(id).or_insert(build(id)))
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().find(|row| predicate(row))
    }

    pub fn find_mut<P>(&mut self, predicate: P) -> Option<&mut T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values_mut().find(|row| predicate(row))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug)]
pub struct Store {
    pub(crate) users: Table<User>,
    pub(crate) courses: Table<Course>,
    pub(crate) lessons: Table<Lesson>,
    pub(crate) course_progress: Table<UserCourseProgress>,
    pub(crate) lesson_progress: Table<UserLessonProgress>,
}

impl Store {
    /// Empty store, every counter starting at 1.
    pub fn new() -> Self {
        Self {
            users: Table::new(ResourceType::User),
            courses: Table::new(ResourceType::Course),
            lessons: Table::new(ResourceType::Lesson),
            course_progress: Table::new(ResourceType::CourseProgress),
            lesson_progress: Table::new(ResourceType::LessonProgress),
        }
    }

    /// Store populated with the demo course catalog.
    pub fn seeded() -> StoreResult<Self> {
        let mut store = Self::new();
        crate::model::seed::apply(&mut store)?;
        Ok(store)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
