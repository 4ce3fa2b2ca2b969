use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// One of the four answer slots of a multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, sqlx::Type)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            _ => Err(AppError::ChoiceInvalid(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    pub question_image_path: Option<String>,
    pub option_a_text: Option<String>,
    pub option_a_image_path: Option<String>,
    pub option_b_text: Option<String>,
    pub option_b_image_path: Option<String>,
    pub option_c_text: Option<String>,
    pub option_c_image_path: Option<String>,
    pub option_d_text: Option<String>,
    pub option_d_image_path: Option<String>,
    pub correct_answer: Choice,
    pub points: i64,
}

#[derive(Clone, Debug)]
pub struct NewQuestion {
    pub quiz_id: i64,
    pub question_text: String,
    pub question_image_path: Option<String>,
    pub option_a_text: Option<String>,
    pub option_a_image_path: Option<String>,
    pub option_b_text: Option<String>,
    pub option_b_image_path: Option<String>,
    pub option_c_text: Option<String>,
    pub option_c_image_path: Option<String>,
    pub option_d_text: Option<String>,
    pub option_d_image_path: Option<String>,
    pub correct_answer: Choice,
    pub points: i64,
}

impl Question {
    pub fn is_correct(&self, selected: Choice) -> bool {
        self.correct_answer == selected
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(id: i64, quiz_id: i64, correct_answer: Choice, points: i64) -> Self {
        Question {
            id,
            quiz_id,
            question_text: format!("Question {}", id),
            question_image_path: None,
            option_a_text: Some("first".to_string()),
            option_a_image_path: None,
            option_b_text: Some("second".to_string()),
            option_b_image_path: None,
            option_c_text: Some("third".to_string()),
            option_c_image_path: None,
            option_d_text: Some("fourth".to_string()),
            option_d_image_path: None,
            correct_answer,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parses_case_insensitively() {
        assert_eq!("a".parse::<Choice>().unwrap(), Choice::A);
        assert_eq!(" D ".parse::<Choice>().unwrap(), Choice::D);
    }

    #[test]
    fn choice_rejects_anything_outside_a_to_d() {
        for invalid in ["E", "", "AB", "1"] {
            let parsed = invalid.parse::<Choice>();
            assert!(matches!(parsed, Err(AppError::ChoiceInvalid(_))), "{invalid}");
        }
    }

    #[test]
    fn choice_serializes_as_letter() {
        let json = serde_json::to_string(&Choice::C).expect("choice should serialize");
        assert_eq!(json, "\"C\"");
        assert!(serde_json::from_str::<Choice>("\"Z\"").is_err());
    }

    #[test]
    fn question_checks_correct_answer() {
        let question = Question::test_question(1, 1, Choice::B, 5);
        assert!(question.is_correct(Choice::B));
        assert!(!question.is_correct(Choice::A));
    }
}
