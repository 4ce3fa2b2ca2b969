use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::domain::question::{Choice, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AttemptState {
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct QuizAttempt {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub score: i64,
    pub is_completed: bool,
}

impl QuizAttempt {
    pub fn state(&self) -> AttemptState {
        if self.is_completed {
            AttemptState::Completed
        } else {
            AttemptState::InProgress
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct UserAnswer {
    pub id: i64,
    pub quiz_attempt_id: i64,
    pub question_id: i64,
    pub selected_answer: Choice,
}

/// Sum of points for every answer that matches its question's key.
///
/// Answers to questions outside `questions` are ignored and unanswered
/// questions contribute nothing.
pub fn score_answers(questions: &[Question], answers: &[UserAnswer]) -> i64 {
    let by_id: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    answers
        .iter()
        .filter_map(|answer| {
            by_id
                .get(&answer.question_id)
                .filter(|question| question.is_correct(answer.selected_answer))
                .map(|question| question.points)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i64, selected_answer: Choice) -> UserAnswer {
        UserAnswer {
            id: question_id,
            quiz_attempt_id: 1,
            question_id,
            selected_answer,
        }
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::test_question(1, 1, Choice::A, 5),
            Question::test_question(2, 1, Choice::C, 10),
        ]
    }

    #[test]
    fn score_sums_points_of_correct_answers() {
        let questions = two_questions();

        let all_correct = [answer(1, Choice::A), answer(2, Choice::C)];
        assert_eq!(score_answers(&questions, &all_correct), 15);

        let one_wrong = [answer(1, Choice::A), answer(2, Choice::B)];
        assert_eq!(score_answers(&questions, &one_wrong), 5);
    }

    #[test]
    fn score_is_zero_without_answers() {
        assert_eq!(score_answers(&two_questions(), &[]), 0);
    }

    #[test]
    fn score_ignores_questions_from_other_quizzes() {
        let stray = [answer(99, Choice::A), answer(2, Choice::C)];
        assert_eq!(score_answers(&two_questions(), &stray), 10);
    }

    fn make_attempt(is_completed: bool, score: i64) -> QuizAttempt {
        let start = Utc::now();
        QuizAttempt {
            id: 1,
            user_id: 2,
            quiz_id: 3,
            start_time: start,
            end_time: is_completed.then_some(start),
            score,
            is_completed,
        }
    }

    #[test]
    fn attempt_state_follows_completion_flag() {
        assert_eq!(make_attempt(false, 0).state(), AttemptState::InProgress);
        assert_eq!(make_attempt(true, 15).state(), AttemptState::Completed);
    }

    #[test]
    fn attempt_serialization_keeps_open_end_time_null() {
        let json = serde_json::to_value(make_attempt(false, 0)).expect("attempt should serialize");
        assert!(json["end_time"].is_null());
        assert_eq!(json["is_completed"], false);
    }
}
