use utoipa::OpenApi;

use crate::{
    model::entity::{
        Course, CourseCreate, CourseLevel, Lesson, LessonCreate, User, UserCourseProgress,
        UserCreate, UserLessonProgress, UserRole,
    },
    validation::{Violation, ViolationCode},
    web::{
        ErrorResponse,
        dto::progress::{CourseProgressUpdate, LessonProgressUpdate},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "coursehub", description = "Course catalog and learning progress API"),
    paths(
        crate::web::routes::users::users_create_handler,
        crate::web::routes::users::users_get_handler,
        crate::web::routes::courses::courses_list_handler,
        crate::web::routes::courses::courses_get_handler,
        crate::web::routes::courses::courses_create_handler,
        crate::web::routes::lessons::lessons_by_course_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::lessons::lessons_create_handler,
        crate::web::routes::progress::course_enroll_handler,
        crate::web::routes::progress::enrolled_courses_handler,
        crate::web::routes::progress::course_progress_get_handler,
        crate::web::routes::progress::course_progress_update_handler,
        crate::web::routes::progress::lesson_complete_handler,
        crate::web::routes::progress::lesson_progress_get_handler,
        crate::web::routes::progress::lesson_progress_update_handler,
    ),
    components(schemas(
        User,
        UserCreate,
        UserRole,
        Course,
        CourseCreate,
        CourseLevel,
        Lesson,
        LessonCreate,
        UserCourseProgress,
        UserLessonProgress,
        CourseProgressUpdate,
        LessonProgressUpdate,
        ErrorResponse,
        Violation,
        ViolationCode,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "courses", description = "Course catalog"),
        (name = "lessons", description = "Lessons within courses"),
        (name = "progress", description = "Enrollment and learning progress"),
    )
)]
pub struct ApiDoc;
