use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::{
    auth::{JwtService, SessionManager},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        SqlxChapterRepository, SqlxQuestionRepository, SqlxQuizAttemptRepository,
        SqlxQuizRepository, SqlxSessionRepository, SqlxSubjectRepository, SqlxUserRepository,
    },
    services::{
        ChapterService, QuestionService, QuizAttemptService, QuizService, SubjectService,
        UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub sessions: Arc<SessionManager>,
    pub user_service: Arc<UserService>,
    pub subject_service: Arc<SubjectService>,
    pub chapter_service: Arc<ChapterService>,
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub attempt_service: Arc<QuizAttemptService>,
}

impl AppState {
    /// Connects, brings the schema up to date, and runs the startup steps.
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.migrate().await?;

        let state = Self::from_database(db, config);
        state.bootstrap().await?;

        Ok(state)
    }

    /// Wires repositories and services over an already prepared database.
    pub fn from_database(db: Database, config: Config) -> Self {
        let users = Arc::new(SqlxUserRepository::new(&db));
        let subjects = Arc::new(SqlxSubjectRepository::new(&db));
        let chapters = Arc::new(SqlxChapterRepository::new(&db));
        let quizzes = Arc::new(SqlxQuizRepository::new(&db));
        let questions = Arc::new(SqlxQuestionRepository::new(&db));
        let attempts = Arc::new(SqlxQuizAttemptRepository::new(&db));

        let jwt = JwtService::new(&config.session_secret, config.session_ttl_hours);
        let sessions = Arc::new(SessionManager::new(
            Arc::new(SqlxSessionRepository::new(&db)),
            users.clone(),
            jwt,
        ));

        Self {
            user_service: Arc::new(UserService::new(users)),
            subject_service: Arc::new(SubjectService::new(subjects.clone())),
            chapter_service: Arc::new(ChapterService::new(chapters.clone(), subjects)),
            quiz_service: Arc::new(QuizService::new(quizzes.clone(), chapters)),
            question_service: Arc::new(QuestionService::new(questions.clone(), quizzes.clone())),
            attempt_service: Arc::new(QuizAttemptService::new(attempts, quizzes, questions)),
            sessions,
            config: Arc::new(config),
            db,
        }
    }

    /// Idempotent startup work: admin provisioning and stale session cleanup.
    pub async fn bootstrap(&self) -> AppResult<()> {
        match self.config.admin_credentials() {
            Some((email, password)) => {
                self.user_service
                    .provision_admin(email, password.expose_secret(), &self.config.admin_full_name)
                    .await?;
            }
            None => log::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, no admin account provisioned"),
        }

        let purged = self.sessions.purge_expired().await?;
        if purged > 0 {
            log::info!("Removed {} expired sessions", purged);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_bootstrap_provisions_admin_once() {
        let db = Database::connect_in_memory().await.unwrap();
        db.migrate().await.unwrap();

        let mut config = Config::test_config();
        config.admin_email = Some("Admin@Example.com".to_string());
        config.admin_password = Some("admin-password".to_string().into());

        let state = AppState::from_database(db, config);
        state.bootstrap().await.unwrap();
        state.bootstrap().await.unwrap();

        let users = state.user_service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "admin@example.com");
        assert!(users[0].is_admin);
    }
}
