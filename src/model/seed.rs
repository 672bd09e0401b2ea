//! Demo catalog loaded at startup. Ids follow insertion order, so the five
//! courses get 1..=5 and the lessons 1..=5.

use crate::model::{
    Store,
    entity::{Course, CourseCreate, CourseLevel, Lesson, LessonCreate},
    error::StoreResult,
};

struct SeedCourse {
    title: &'static str,
    description: &'static str,
    instructor: &'static str,
    category: &'static str,
    level: CourseLevel,
    duration: &'static str,
    price: i64,
    image_url: &'static str,
}

struct SeedLesson {
    course_id: i64,
    title: &'static str,
    description: &'static str,
    video_url: &'static str,
    duration: &'static str,
    order: i64,
}

const COURSES: &[SeedCourse] = &[
    SeedCourse {
        title: "JavaScript Fundamentals",
        description: "Learn the basics of JavaScript programming including variables, functions, and control structures.",
        instructor: "John Smith",
        category: "Programming",
        level: CourseLevel::Beginner,
        duration: "8 hours",
        price: 99,
        image_url: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=300&h=200&fit=crop",
    },
    SeedCourse {
        title: "React Development",
        description: "Build modern web applications with React including hooks, state management, and component architecture.",
        instructor: "Sarah Johnson",
        category: "Frontend",
        level: CourseLevel::Intermediate,
        duration: "12 hours",
        price: 149,
        image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=300&h=200&fit=crop",
    },
    SeedCourse {
        title: "Node.js Backend Development",
        description: "Create robust backend APIs with Node.js, Express, and database integration.",
        instructor: "Mike Wilson",
        category: "Backend",
        level: CourseLevel::Intermediate,
        duration: "10 hours",
        price: 129,
        image_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=300&h=200&fit=crop",
    },
    SeedCourse {
        title: "Python for Data Science",
        description: "Learn Python programming for data analysis, visualization, and machine learning.",
        instructor: "Dr. Emily Chen",
        category: "Data Science",
        level: CourseLevel::Beginner,
        duration: "15 hours",
        price: 199,
        image_url: "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?w=300&h=200&fit=crop",
    },
    SeedCourse {
        title: "Advanced CSS & Design",
        description: "Master modern CSS techniques including Grid, Flexbox, animations, and responsive design.",
        instructor: "Alex Rodriguez",
        category: "Design",
        level: CourseLevel::Advanced,
        duration: "6 hours",
        price: 89,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=200&fit=crop",
    },
];

const LESSONS: &[SeedLesson] = &[
    SeedLesson {
        course_id: 1,
        title: "Introduction to JavaScript",
        description: "Overview of JavaScript and its role in web development",
        video_url: "https://www.youtube.com/embed/PkZNo7MFNFg",
        duration: "30 minutes",
        order: 1,
    },
    SeedLesson {
        course_id: 1,
        title: "Variables and Data Types",
        description: "Learn about JavaScript variables, strings, numbers, and booleans",
        video_url: "https://www.youtube.com/embed/9emXNzqCKyg",
        duration: "45 minutes",
        order: 2,
    },
    SeedLesson {
        course_id: 1,
        title: "Functions and Scope",
        description: "Understanding JavaScript functions and variable scope",
        video_url: "https://www.youtube.com/embed/N8ap4k_1QEQ",
        duration: "60 minutes",
        order: 3,
    },
    SeedLesson {
        course_id: 2,
        title: "Getting Started with React",
        description: "Introduction to React and JSX",
        video_url: "https://www.youtube.com/embed/Tn6-PIqc4UM",
        duration: "40 minutes",
        order: 1,
    },
    SeedLesson {
        course_id: 2,
        title: "React Components",
        description: "Creating and using React components",
        video_url: "https://www.youtube.com/embed/Y2hgEGPzTZY",
        duration: "55 minutes",
        order: 2,
    },
];

pub(crate) fn apply(store: &mut Store) -> StoreResult<()> {
    for seed in COURSES {
        Course::insert(
            &mut store.courses,
            CourseCreate {
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                instructor: seed.instructor.to_string(),
                category: seed.category.to_string(),
                level: seed.level,
                duration: seed.duration.to_string(),
                price: seed.price,
                image_url: seed.image_url.to_string(),
            },
        )?;
    }

    for seed in LESSONS {
        Lesson::insert(
            &mut store.lessons,
            LessonCreate {
                course_id: seed.course_id,
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                video_url: seed.video_url.to_string(),
                duration: seed.duration.to_string(),
                order: seed.order,
            },
        )?;
    }

    tracing::debug!(
        courses = store.courses.len(),
        lessons = store.lessons.len(),
        "seed data applied"
    );
    Ok(())
}
