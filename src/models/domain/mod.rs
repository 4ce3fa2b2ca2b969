pub mod chapter;
pub mod question;
pub mod quiz;
pub mod quiz_attempt;
pub mod session;
pub mod subject;
pub mod user;
pub use chapter::Chapter;
pub use question::{Choice, NewQuestion, Question};
pub use quiz::{NewQuiz, Quiz};
pub use quiz_attempt::{score_answers, AttemptState, QuizAttempt, UserAnswer};
pub use session::Session;
pub use subject::Subject;
pub use user::{NewUser, User};
