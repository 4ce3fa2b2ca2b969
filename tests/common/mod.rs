#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use quiz_master_server::{
    app_state::AppState,
    auth::CurrentUser,
    config::Config,
    db::Database,
    models::{
        domain::{Chapter, Question, Quiz, Subject},
        dto::request::{
            CreateChapterRequest, CreateQuestionRequest, CreateQuizRequest, CreateSubjectRequest,
            QuestionOptions, RegisterRequest,
        },
    },
};

pub const PASSWORD: &str = "correct-horse-battery";

/// A fully wired state over a fresh, migrated in-memory database.
pub async fn setup_state() -> AppState {
    let db = Database::connect_in_memory()
        .await
        .expect("in-memory database should open");
    db.migrate().await.expect("migrations should apply");
    AppState::from_database(db, Config::test_config())
}

/// A state over a migrated file database behind a pool of several
/// connections, so concurrent calls really overlap in SQLite. The database
/// files are removed on drop.
pub struct PooledState {
    pub state: AppState,
    path: PathBuf,
}

impl Drop for PooledState {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

pub async fn setup_pooled_state() -> PooledState {
    let path = std::env::temp_dir().join(format!("quiz-master-{}.db", Uuid::new_v4()));
    let config = Config {
        database_url: format!("sqlite://{}", path.display()),
        db_max_connections: 8,
        ..Config::test_config()
    };

    let db = Database::connect(&config)
        .await
        .expect("file database should open");
    db.migrate().await.expect("migrations should apply");

    PooledState {
        state: AppState::from_database(db, config),
        path,
    }
}

pub fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        full_name: "Test Learner".to_string(),
        qualification: None,
        dob: None,
    }
}

pub async fn learner(state: &AppState, email: &str) -> CurrentUser {
    let user = state
        .user_service
        .register(register_request(email))
        .await
        .expect("registration should succeed");
    CurrentUser::from(user)
}

pub async fn admin(state: &AppState, email: &str) -> CurrentUser {
    let user = state
        .user_service
        .provision_admin(email, PASSWORD, "Test Admin")
        .await
        .expect("admin provisioning should succeed");
    CurrentUser::from(user)
}

pub fn question_request(text: &str, correct: &str, points: i64) -> CreateQuestionRequest {
    CreateQuestionRequest {
        question_text: text.to_string(),
        question_image_path: None,
        options: QuestionOptions {
            option_a_text: Some("first".to_string()),
            option_b_text: Some("second".to_string()),
            option_c_text: Some("third".to_string()),
            option_d_text: Some("fourth".to_string()),
            ..Default::default()
        },
        correct_answer: correct.to_string(),
        points,
    }
}

/// A subject with one chapter holding one quiz of two questions:
/// 5 points with answer A, and 10 points with answer C.
pub struct SeededQuiz {
    pub subject: Subject,
    pub chapter: Chapter,
    pub quiz: Quiz,
    pub five_points_a: Question,
    pub ten_points_c: Question,
}

pub async fn seed_quiz(state: &AppState, subject_name: &str, is_active: bool) -> SeededQuiz {
    let subject = state
        .subject_service
        .create_subject(CreateSubjectRequest {
            name: subject_name.to_string(),
            description: Some("seeded".to_string()),
        })
        .await
        .expect("subject should be created");

    let chapter = state
        .chapter_service
        .create_chapter(
            subject.id,
            CreateChapterRequest {
                name: "Chapter 1".to_string(),
                description: None,
            },
        )
        .await
        .expect("chapter should be created");

    let quiz = state
        .quiz_service
        .create_quiz(
            chapter.id,
            CreateQuizRequest {
                quiz_date: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
                duration_minutes: 30,
                remarks: None,
                is_active,
            },
        )
        .await
        .expect("quiz should be created");

    let five_points_a = state
        .question_service
        .create_question(quiz.id, question_request("Worth five", "A", 5))
        .await
        .expect("question should be created");
    let ten_points_c = state
        .question_service
        .create_question(quiz.id, question_request("Worth ten", "C", 10))
        .await
        .expect("question should be created");

    SeededQuiz {
        subject,
        chapter,
        quiz,
        five_points_a,
        ten_points_c,
    }
}

pub async fn count_rows(state: &AppState, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {}", table);
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_one(state.db.pool())
        .await
        .expect("count query should run")
}
