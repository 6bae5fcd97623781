//! Core data model types for quizrank.
//!
//! These are the fundamental types the whole system uses to represent
//! quizzes, questions, and submitted attempts. The persisted structs
//! serialize with the camelCase field names of the historical payload
//! format, so collections written by earlier versions of the application
//! load unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a question accepts one selection or an exact set of selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Single => write!(f, "single"),
            QuestionKind::Multiple => write!(f, "multiple"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(QuestionKind::Single),
            "multiple" => Ok(QuestionKind::Multiple),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// A single scorable prompt inside a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier for this question.
    pub id: Uuid,
    /// Prompt text shown to the taker.
    pub text: String,
    /// Points awarded for a correct answer before time weighting.
    pub points: u32,
    /// Ordered answer option labels.
    pub options: Vec<String>,
    /// Single- or multiple-select.
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Indices into `options` that make up the correct answer.
    ///
    /// Callers are responsible for keeping these non-empty and in range;
    /// the repository stores them as given.
    pub correct_answers: Vec<usize>,
}

/// A question as supplied by a caller, before the repository assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    pub points: u32,
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub correct_answers: Vec<usize>,
}

impl QuestionDraft {
    /// Attach a fresh identifier, producing the stored form.
    pub(crate) fn into_question(self, id: Uuid) -> Question {
        Question {
            id,
            text: self.text,
            points: self.points,
            options: self.options,
            kind: self.kind,
            correct_answers: self.correct_answers,
        }
    }
}

/// A named collection of questions owned by a creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Identifier of the creating user.
    pub creator_id: String,
    /// Questions in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// When the quiz was created.
    pub created_at: DateTime<Utc>,
}

/// One user's completed attempt at a quiz.
///
/// Submissions are append-only value records: the score and elapsed time are
/// fixed at submission time and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    /// Unique identifier for this submission.
    pub id: Uuid,
    /// The quiz this attempt was made against (non-owning reference).
    pub quiz_id: Uuid,
    /// Identifier of the submitting user.
    pub user_id: String,
    /// Display name of the submitting user.
    pub user_name: String,
    /// Total time-weighted score.
    pub score: u32,
    /// Total elapsed time across all answered questions, in seconds.
    #[serde(rename = "timeTaken")]
    pub time_taken_secs: f64,
    /// When the attempt was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// One answer within a submitted attempt, as produced by the answering flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    /// The question being answered.
    pub question_id: Uuid,
    /// Selected option indices.
    pub selected_answers: Vec<usize>,
    /// Seconds spent on this question.
    #[serde(rename = "timeTaken")]
    pub time_taken_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_display_and_parse() {
        assert_eq!(QuestionKind::Single.to_string(), "single");
        assert_eq!(QuestionKind::Multiple.to_string(), "multiple");
        assert_eq!("single".parse::<QuestionKind>().unwrap(), QuestionKind::Single);
        assert_eq!(
            "Multiple".parse::<QuestionKind>().unwrap(),
            QuestionKind::Multiple
        );
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn quiz_serializes_with_historical_field_names() {
        let quiz = Quiz {
            id: Uuid::nil(),
            title: "Sample".into(),
            description: "About nothing".into(),
            creator_id: "user-1".into(),
            questions: vec![Question {
                id: Uuid::nil(),
                text: "2 + 2?".into(),
                points: 10,
                options: vec!["3".into(), "4".into()],
                kind: QuestionKind::Single,
                correct_answers: vec![1],
            }],
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(json.contains("\"creatorId\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"correctAnswers\""));
        assert!(json.contains("\"type\":\"single\""));
    }

    #[test]
    fn submission_serde_roundtrip() {
        let submission = QuizSubmission {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            user_id: "user-7".into(),
            user_name: "Sal".into(),
            score: 42,
            time_taken_secs: 73.5,
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"timeTaken\":73.5"));
        let back: QuizSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, submission.id);
        assert_eq!(back.score, 42);
        assert_eq!(back.submitted_at, submission.submitted_at);
    }
}
