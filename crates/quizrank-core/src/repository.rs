//! Quiz repository with write-through persistence.
//!
//! Holds both collections in memory and rewrites the affected slot through
//! the storage gateway after every mutation. A mutex serializes mutators so
//! the append-then-persist-whole-collection step stays atomic even when the
//! repository is shared across threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Context;
use chrono::Utc;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::model::{QuestionDraft, Quiz, QuizSubmission, SubmittedAnswer};
use crate::query::{self, ListQuery, QuizPage, RankedSubmission};
use crate::scoring;
use crate::traits::{StorageGateway, QUIZZES_SLOT, SUBMISSIONS_SLOT};

pub(crate) struct Collections {
    pub(crate) quizzes: Vec<Quiz>,
    pub(crate) submissions: Vec<QuizSubmission>,
}

/// The in-memory store of quizzes and submissions.
pub struct QuizRepository {
    store: Arc<dyn StorageGateway>,
    state: Mutex<Collections>,
}

impl std::fmt::Debug for QuizRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizRepository").finish_non_exhaustive()
    }
}

impl QuizRepository {
    /// Open the repository, loading both collections from the gateway.
    ///
    /// A slot that has never been written yields an empty collection.
    /// Timestamps are revived from their serialized RFC 3339 form by the
    /// typed deserialization.
    pub fn open(store: Arc<dyn StorageGateway>) -> Result<Self, RepositoryError> {
        let quizzes: Vec<Quiz> = load_collection(store.as_ref(), QUIZZES_SLOT)?;
        let submissions: Vec<QuizSubmission> = load_collection(store.as_ref(), SUBMISSIONS_SLOT)?;
        tracing::info!(
            quizzes = quizzes.len(),
            submissions = submissions.len(),
            "opened quiz repository"
        );
        Ok(Self {
            store,
            state: Mutex::new(Collections {
                quizzes,
                submissions,
            }),
        })
    }

    /// Create an empty quiz owned by `creator_id`.
    ///
    /// Title and description are stored as given; content validation is the
    /// caller's concern.
    pub fn create_quiz(
        &self,
        title: &str,
        description: &str,
        creator_id: &str,
    ) -> Result<Quiz, RepositoryError> {
        let quiz = Quiz {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            description: description.to_owned(),
            creator_id: creator_id.to_owned(),
            questions: Vec::new(),
            created_at: Utc::now(),
        };

        let mut state = self.state();
        state.quizzes.push(quiz.clone());
        self.persist_quizzes(&state)?;
        tracing::info!(quiz_id = %quiz.id, creator_id, "created quiz");
        Ok(quiz)
    }

    /// Append a question to an existing quiz.
    ///
    /// Returns `Ok(false)` without side effects when the quiz id is unknown;
    /// callers must check the flag. Storage failures propagate as `Err`.
    pub fn add_question(
        &self,
        quiz_id: Uuid,
        draft: QuestionDraft,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state();
        let Some(quiz) = state.quizzes.iter_mut().find(|q| q.id == quiz_id) else {
            tracing::warn!(%quiz_id, "add_question on unknown quiz, ignoring");
            return Ok(false);
        };

        quiz.questions.push(draft.into_question(Uuid::new_v4()));
        self.persist_quizzes(&state)?;
        Ok(true)
    }

    /// Look up a quiz by id. No side effects.
    pub fn quiz(&self, quiz_id: Uuid) -> Option<Quiz> {
        self.state().quizzes.iter().find(|q| q.id == quiz_id).cloned()
    }

    /// Grade an attempt, append the resulting submission, and persist it.
    ///
    /// Fails with [`RepositoryError::QuizNotFound`] when the quiz id does
    /// not resolve; nothing is appended in that case. Answers referencing
    /// unknown question ids are skipped by the grader, not rejected.
    pub fn submit_quiz(
        &self,
        quiz_id: Uuid,
        user_id: &str,
        user_name: &str,
        answers: &[SubmittedAnswer],
    ) -> Result<QuizSubmission, RepositoryError> {
        let mut state = self.state();
        let Some(quiz) = state.quizzes.iter().find(|q| q.id == quiz_id) else {
            return Err(RepositoryError::QuizNotFound(quiz_id));
        };

        let outcome = scoring::grade(quiz, answers);
        let submission = QuizSubmission {
            id: Uuid::new_v4(),
            quiz_id,
            user_id: user_id.to_owned(),
            user_name: user_name.to_owned(),
            score: outcome.score,
            time_taken_secs: outcome.time_taken_secs,
            submitted_at: Utc::now(),
        };

        state.submissions.push(submission.clone());
        self.persist_submissions(&state)?;
        tracing::info!(
            submission_id = %submission.id,
            %quiz_id,
            score = submission.score,
            "recorded submission"
        );
        Ok(submission)
    }

    /// Leaderboard for one quiz. See [`query::rank_submissions`].
    pub fn quiz_rankings(&self, quiz_id: Uuid) -> Vec<RankedSubmission> {
        query::rank_submissions(&self.state().submissions, quiz_id)
    }

    /// Filtered, sorted, paginated listing of a user's quizzes.
    /// See [`query::filter_user_quizzes`].
    pub fn user_quizzes(&self, user_id: &str, query: &ListQuery) -> QuizPage {
        query::filter_user_quizzes(&self.state().quizzes, user_id, query)
    }

    /// Snapshot of the quiz collection.
    pub fn quizzes(&self) -> Vec<Quiz> {
        self.state().quizzes.clone()
    }

    /// Snapshot of the submission collection.
    pub fn submissions(&self) -> Vec<QuizSubmission> {
        self.state().submissions.clone()
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, Collections> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn persist_quizzes(&self, state: &Collections) -> Result<(), RepositoryError> {
        let payload =
            serde_json::to_string_pretty(&state.quizzes).context("serialize quiz collection")?;
        self.store.save(QUIZZES_SLOT, &payload)?;
        Ok(())
    }

    pub(crate) fn persist_submissions(&self, state: &Collections) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string_pretty(&state.submissions)
            .context("serialize submission collection")?;
        self.store.save(SUBMISSIONS_SLOT, &payload)?;
        Ok(())
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &dyn StorageGateway,
    slot: &'static str,
) -> Result<Vec<T>, RepositoryError> {
    match store.load(slot)? {
        Some(payload) => {
            serde_json::from_str(&payload).map_err(|source| RepositoryError::Corrupt { slot, source })
        }
        None => Ok(Vec::new()),
    }
}
