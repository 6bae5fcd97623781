//! Leaderboard ranking and filtered quiz listings.
//!
//! Pure derivations over the repository's collections: nothing here mutates
//! state or touches the storage gateway.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Quiz, QuizSubmission};

/// Page size used when a listing query does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Sort order for quiz listings.
///
/// An enum rather than a free-form string key, so an invalid sort order is
/// unrepresentable; `FromStr` covers boundary code that receives text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Newest first.
    #[default]
    CreatedAt,
    /// Ascending by title, case-insensitive.
    Title,
    /// Most questions first.
    #[serde(rename = "questions")]
    QuestionCount,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::CreatedAt => write!(f, "createdAt"),
            SortBy::Title => write!(f, "title"),
            SortBy::QuestionCount => write!(f, "questions"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortBy::CreatedAt),
            "title" => Ok(SortBy::Title),
            "questions" => Ok(SortBy::QuestionCount),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Parameters for a user's quiz listing.
///
/// `page` is 1-based. Values below 1 for `page` or `page_size` are treated
/// as 1; an out-of-range page yields an empty slice, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Case-insensitive substring matched against title or description;
    /// empty means no search filter.
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub sort_by: SortBy,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search_term: String::new(),
            sort_by: SortBy::default(),
        }
    }
}

/// One page of a filtered quiz listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPage {
    /// The quizzes on this page, in sort order.
    pub quizzes: Vec<Quiz>,
    /// Matching quizzes before pagination.
    pub total: usize,
    /// `ceil(total / page_size)`.
    pub total_pages: usize,
}

/// A submission together with its leaderboard position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSubmission {
    #[serde(flatten)]
    pub submission: QuizSubmission,
    /// 1-based position. Positional, not score-banded: equal scores with
    /// different times get distinct consecutive ranks.
    pub rank: u32,
}

/// Leaderboard for one quiz: score descending, ties broken by elapsed time
/// ascending (faster wins).
pub fn rank_submissions(submissions: &[QuizSubmission], quiz_id: Uuid) -> Vec<RankedSubmission> {
    let mut entries: Vec<&QuizSubmission> = submissions
        .iter()
        .filter(|s| s.quiz_id == quiz_id)
        .collect();
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.time_taken_secs.total_cmp(&b.time_taken_secs))
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(index, submission)| RankedSubmission {
            submission: submission.clone(),
            rank: index as u32 + 1,
        })
        .collect()
}

/// Filter, sort, and paginate the quizzes owned by `user_id`.
pub fn filter_user_quizzes(quizzes: &[Quiz], user_id: &str, query: &ListQuery) -> QuizPage {
    let mut filtered: Vec<&Quiz> = quizzes
        .iter()
        .filter(|q| q.creator_id == user_id)
        .collect();

    if !query.search_term.is_empty() {
        let term = query.search_term.to_lowercase();
        filtered.retain(|q| {
            q.title.to_lowercase().contains(&term) || q.description.to_lowercase().contains(&term)
        });
    }

    match query.sort_by {
        SortBy::CreatedAt => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Title => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortBy::QuestionCount => filtered.sort_by(|a, b| b.questions.len().cmp(&a.questions.len())),
    }

    let total = filtered.len();
    let page = query.page.max(1);
    let page_size = query.page_size.max(1);
    let start = (page - 1).saturating_mul(page_size);

    let quizzes = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    QuizPage {
        quizzes,
        total,
        total_pages: total.div_ceil(page_size),
    }
}
