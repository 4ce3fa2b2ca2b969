pub mod chapter_repository;
pub mod question_repository;
pub mod quiz_attempt_repository;
pub mod quiz_repository;
pub mod session_repository;
pub mod subject_repository;
pub mod user_repository;

pub use chapter_repository::{ChapterRepository, SqlxChapterRepository};
pub use question_repository::{QuestionRepository, SqlxQuestionRepository};
pub use quiz_attempt_repository::{QuizAttemptRepository, SqlxQuizAttemptRepository};
pub use quiz_repository::{QuizRepository, SqlxQuizRepository};
pub use session_repository::{SessionRepository, SqlxSessionRepository};
pub use subject_repository::{SqlxSubjectRepository, SubjectRepository};
pub use user_repository::{SqlxUserRepository, UserRepository};
