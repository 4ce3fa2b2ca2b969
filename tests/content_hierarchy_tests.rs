mod common;

use common::{count_rows, learner, question_request, seed_quiz, setup_state};
use quiz_master_server::{
    errors::AppError,
    models::{
        domain::Choice,
        dto::request::{
            CreateChapterRequest, CreateSubjectRequest, SubmitAnswerRequest, UpdateQuestionRequest,
            UpdateQuizRequest, UpdateSubjectRequest,
        },
    },
};

async fn seed_with_answers(state: &quiz_master_server::app_state::AppState) -> common::SeededQuiz {
    let seeded = seed_quiz(state, "Physics", true).await;
    let user = learner(state, "cascade@example.com").await;

    let (attempt, _) = state
        .attempt_service
        .start(&user, seeded.quiz.id)
        .await
        .unwrap();
    state
        .attempt_service
        .submit_answer(
            &user,
            attempt.id,
            SubmitAnswerRequest {
                question_id: seeded.five_points_a.id,
                choice: "A".to_string(),
            },
        )
        .await
        .unwrap();

    seeded
}

async fn assert_hierarchy_empty(state: &quiz_master_server::app_state::AppState) {
    for table in ["chapters", "quizzes", "questions", "quiz_attempts", "user_answers"] {
        assert_eq!(count_rows(state, table).await, 0, "{} should be empty", table);
    }
}

#[tokio::test]
async fn deleting_subject_cascades_to_every_level() {
    let state = setup_state().await;
    let seeded = seed_with_answers(&state).await;
    assert_eq!(count_rows(&state, "user_answers").await, 1);

    state
        .subject_service
        .delete_subject(seeded.subject.id)
        .await
        .unwrap();

    assert_eq!(count_rows(&state, "subjects").await, 0);
    assert_hierarchy_empty(&state).await;
    // learners are not part of the content tree
    assert_eq!(count_rows(&state, "users").await, 1);
}

#[tokio::test]
async fn deleting_chapter_cascades_below_it() {
    let state = setup_state().await;
    let seeded = seed_with_answers(&state).await;

    state
        .chapter_service
        .delete_chapter(seeded.chapter.id)
        .await
        .unwrap();

    assert_eq!(count_rows(&state, "subjects").await, 1);
    assert_hierarchy_empty(&state).await;
}

#[tokio::test]
async fn deleting_quiz_cascades_to_questions_and_attempts() {
    let state = setup_state().await;
    let seeded = seed_with_answers(&state).await;

    state.quiz_service.delete_quiz(seeded.quiz.id).await.unwrap();

    assert_eq!(count_rows(&state, "chapters").await, 1);
    for table in ["quizzes", "questions", "quiz_attempts", "user_answers"] {
        assert_eq!(count_rows(&state, table).await, 0, "{} should be empty", table);
    }
}

#[tokio::test]
async fn deleting_question_removes_its_answers_only() {
    let state = setup_state().await;
    let seeded = seed_with_answers(&state).await;

    state
        .question_service
        .delete_question(seeded.five_points_a.id)
        .await
        .unwrap();

    assert_eq!(count_rows(&state, "questions").await, 1);
    assert_eq!(count_rows(&state, "quiz_attempts").await, 1);
    assert_eq!(count_rows(&state, "user_answers").await, 0);
}

#[tokio::test]
async fn deleting_missing_records_is_not_found() {
    let state = setup_state().await;

    assert!(matches!(
        state.subject_service.delete_subject(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.chapter_service.delete_chapter(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.quiz_service.delete_quiz(404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.question_service.delete_question(404).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn subject_names_are_unique() {
    let state = setup_state().await;
    seed_quiz(&state, "Chemistry", true).await;

    let duplicate = state
        .subject_service
        .create_subject(CreateSubjectRequest {
            name: "Chemistry".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));
}

#[tokio::test]
async fn blank_names_are_rejected_not_stored() {
    let state = setup_state().await;
    let seeded = seed_quiz(&state, "Physics", true).await;

    let blank_subject = state
        .subject_service
        .create_subject(CreateSubjectRequest {
            name: "   ".to_string(),
            description: None,
        })
        .await;
    assert!(matches!(blank_subject, Err(AppError::Validation(_))));

    let blank_chapter = state
        .chapter_service
        .create_chapter(
            seeded.subject.id,
            CreateChapterRequest {
                name: "\t ".to_string(),
                description: None,
            },
        )
        .await;
    assert!(matches!(blank_chapter, Err(AppError::Validation(_))));

    let blank_question = state
        .question_service
        .create_question(seeded.quiz.id, question_request("  ", "A", 1))
        .await;
    assert!(matches!(blank_question, Err(AppError::Validation(_))));

    let blank_rename = state
        .subject_service
        .update_subject(
            seeded.subject.id,
            UpdateSubjectRequest {
                name: Some(" ".to_string()),
                description: None,
            },
        )
        .await;
    assert!(matches!(blank_rename, Err(AppError::Validation(_))));

    assert_eq!(count_rows(&state, "subjects").await, 1);
    assert_eq!(count_rows(&state, "chapters").await, 1);
    assert_eq!(count_rows(&state, "questions").await, 2);
    assert_eq!(
        state.subject_service.get_subject(seeded.subject.id).await.unwrap().name,
        "Physics"
    );
}

#[tokio::test]
async fn padded_names_are_stored_trimmed() {
    let state = setup_state().await;

    let subject = state
        .subject_service
        .create_subject(CreateSubjectRequest {
            name: "  Astronomy ".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(subject.name, "Astronomy");

    let duplicate = state
        .subject_service
        .create_subject(CreateSubjectRequest {
            name: "Astronomy  ".to_string(),
            description: None,
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));
}

#[tokio::test]
async fn children_require_an_existing_parent() {
    let state = setup_state().await;

    let orphan_chapter = state
        .chapter_service
        .create_chapter(
            99,
            CreateChapterRequest {
                name: "Nowhere".to_string(),
                description: None,
            },
        )
        .await;
    assert!(matches!(orphan_chapter, Err(AppError::NotFound(_))));

    let orphan_question = state
        .question_service
        .create_question(99, question_request("Lost", "A", 1))
        .await;
    assert!(matches!(orphan_question, Err(AppError::NotFound(_))));

    assert!(matches!(
        state.chapter_service.list_chapters(99).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.quiz_service.list_quizzes(99).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.question_service.list_questions(99).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn listings_follow_creation_order() {
    let state = setup_state().await;
    let first = seed_quiz(&state, "Algebra", true).await;
    let second = seed_quiz(&state, "Biology", true).await;

    let subjects = state.subject_service.list_subjects().await.unwrap();
    let ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.subject.id, second.subject.id]);

    let questions = state
        .question_service
        .list_questions(first.quiz.id)
        .await
        .unwrap();
    assert_eq!(questions[0].id, first.five_points_a.id);
    assert_eq!(questions[1].id, first.ten_points_c.id);
}

#[tokio::test]
async fn invalid_correct_answer_is_rejected() {
    let state = setup_state().await;
    let seeded = seed_quiz(&state, "Geometry", true).await;

    let result = state
        .question_service
        .create_question(seeded.quiz.id, question_request("Bad key", "E", 2))
        .await;

    assert!(matches!(result, Err(AppError::ChoiceInvalid(_))));
}

#[tokio::test]
async fn updates_merge_only_given_fields() {
    let state = setup_state().await;
    let seeded = seed_quiz(&state, "History", true).await;

    let subject = state
        .subject_service
        .update_subject(
            seeded.subject.id,
            UpdateSubjectRequest {
                name: None,
                description: Some("Ancient and modern".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(subject.name, "History");
    assert_eq!(subject.description.as_deref(), Some("Ancient and modern"));
    assert!(subject.updated_at >= seeded.subject.updated_at);

    let quiz = state
        .quiz_service
        .update_quiz(
            seeded.quiz.id,
            UpdateQuizRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!quiz.is_active);
    assert_eq!(quiz.duration_minutes, 30);

    let question = state
        .question_service
        .update_question(
            seeded.ten_points_c.id,
            UpdateQuestionRequest {
                correct_answer: Some("d".to_string()),
                points: Some(12),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(question.correct_answer, Choice::D);
    assert_eq!(question.points, 12);
    assert_eq!(question.option_a_text.as_deref(), Some("first"));
}

#[tokio::test]
async fn learner_view_hides_correct_answer() {
    let state = setup_state().await;
    let seeded = seed_quiz(&state, "Music", true).await;

    let views = state
        .question_service
        .list_question_views(seeded.quiz.id)
        .await
        .unwrap();
    assert_eq!(views.len(), 2);

    let json = serde_json::to_value(&views).unwrap();
    assert!(json[0].get("correct_answer").is_none());
    assert_eq!(json[1]["points"], 10);
}
