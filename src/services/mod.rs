pub mod chapter_service;
pub mod question_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod subject_service;
pub mod user_service;

pub use chapter_service::ChapterService;
pub use question_service::QuestionService;
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
pub use subject_service::SubjectService;
pub use user_service::UserService;
