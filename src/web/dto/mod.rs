//! Request bodies and the schemas they are validated against before reaching
//! the store.

pub mod courses;
pub mod lessons;
pub mod progress;
pub mod users;
