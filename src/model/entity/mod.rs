mod user;
pub use user::{User, UserCreate, UserRole};

mod course;
pub use course::{Course, CourseCreate, CourseLevel};

mod lesson;
pub use lesson::{Lesson, LessonCreate};

mod course_progress;
pub use course_progress::{COMPLETED_PROGRESS, UserCourseProgress, UserCourseProgressCreate};

mod lesson_progress;
pub use lesson_progress::{UserLessonProgress, UserLessonProgressCreate};
