//! Time-weighted answer scoring.
//!
//! A correct answer earns `round(points * (1 - min(t / 30, 1)))` where `t` is
//! the seconds spent on the question. Faster correct answers score closer to
//! the full point value; answers taking 30 seconds or longer score zero even
//! when correct.

use std::collections::BTreeSet;

use crate::model::{Question, QuestionKind, Quiz, SubmittedAnswer};

/// Normalization baseline for the time decay, in seconds.
///
/// Historical scores were computed against exactly this value, so it must
/// not change.
pub const TIME_BASELINE_SECS: f64 = 30.0;

/// Whether a selection answers the question correctly.
///
/// Single-select: exactly one option selected, and it is one of the correct
/// indices. Multiple-select: the selected set equals the correct set, so
/// every correct option is chosen and nothing else.
pub fn is_correct(question: &Question, selected: &[usize]) -> bool {
    match question.kind {
        QuestionKind::Single => {
            selected.len() == 1 && question.correct_answers.contains(&selected[0])
        }
        QuestionKind::Multiple => {
            let chosen: BTreeSet<usize> = selected.iter().copied().collect();
            let correct: BTreeSet<usize> = question.correct_answers.iter().copied().collect();
            chosen == correct
        }
    }
}

/// Time-decayed points for a correct answer.
///
/// Rounding is applied after the multiplication, half away from zero.
pub fn weighted_points(points: u32, time_taken_secs: f64) -> u32 {
    let time_ratio = (time_taken_secs / TIME_BASELINE_SECS).min(1.0);
    (f64::from(points) * (1.0 - time_ratio)).round() as u32
}

/// The outcome of grading one attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeOutcome {
    /// Summed time-weighted score across correctly answered questions.
    pub score: u32,
    /// Summed time across all answered questions, correct or not.
    pub time_taken_secs: f64,
}

/// Grade a full answer sheet against a quiz definition.
///
/// Answers referencing a question id that is not part of the quiz are
/// skipped; time accumulates for every resolved answer regardless of
/// correctness.
pub fn grade(quiz: &Quiz, answers: &[SubmittedAnswer]) -> GradeOutcome {
    let mut score = 0u32;
    let mut time_taken_secs = 0f64;

    for answer in answers {
        let Some(question) = quiz.questions.iter().find(|q| q.id == answer.question_id) else {
            tracing::debug!(
                quiz_id = %quiz.id,
                question_id = %answer.question_id,
                "answer references unknown question, skipping"
            );
            continue;
        };

        time_taken_secs += answer.time_taken_secs;
        if is_correct(question, &answer.selected_answers) {
            score += weighted_points(question.points, answer.time_taken_secs);
        }
    }

    GradeOutcome {
        score,
        time_taken_secs,
    }
}
