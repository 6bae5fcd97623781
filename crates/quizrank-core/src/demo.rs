//! Demo data seeding.
//!
//! Replaces both collections with ten themed quizzes and a spread of
//! fabricated submissions, useful for exercising rankings and listings
//! against a populated repository. Variation is derived from the loop
//! indices so the generated shape is reproducible.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::model::{Question, QuestionKind, Quiz, QuizSubmission};
use crate::repository::QuizRepository;

const DEMO_QUIZZES: [(&str, &str); 10] = [
    ("Math Fundamentals", "Algebra and geometry basics"),
    ("World History", "Major events from antiquity to the present"),
    ("Natural Sciences", "Physics, chemistry, and biology essentials"),
    ("Classic Literature", "Landmark works and their authors"),
    ("Olympic Games", "Events and records of the modern games"),
    ("World Geography", "Regions, capitals, and physical features"),
    ("Classical Music", "Periods, composers, and famous pieces"),
    ("Art History", "Movements from the Renaissance onward"),
    ("Computing Basics", "How computers represent and process data"),
    ("Everyday Vocabulary", "Common words and their usage"),
];

impl QuizRepository {
    /// Discard all existing data and seed demo quizzes and submissions
    /// owned by `creator_id`, then persist both slots.
    ///
    /// Each quiz gets 2 to 4 single-choice questions and 5 to 15
    /// submissions, with scores in 50..=100, times in 60..=300 seconds, and
    /// submission instants backdated within the prior week.
    pub fn seed_demo_data(&self, creator_id: &str) -> Result<(), RepositoryError> {
        let mut state = self.state();
        state.quizzes.clear();
        state.submissions.clear();

        for (i, (title, description)) in DEMO_QUIZZES.iter().enumerate() {
            let mut quiz = Quiz {
                id: Uuid::new_v4(),
                title: (*title).to_owned(),
                description: (*description).to_owned(),
                creator_id: creator_id.to_owned(),
                questions: Vec::new(),
                created_at: Utc::now(),
            };

            let question_count = 2 + i % 3;
            for j in 0..question_count {
                quiz.questions.push(Question {
                    id: Uuid::new_v4(),
                    text: format!("Question {}: a quick check on {title}", j + 1),
                    points: 10,
                    options: vec![
                        "Option A".to_owned(),
                        "Option B".to_owned(),
                        "Option C".to_owned(),
                        "Option D".to_owned(),
                    ],
                    kind: QuestionKind::Single,
                    correct_answers: vec![(i + j) % 4],
                });
            }

            let quiz_id = quiz.id;
            state.quizzes.push(quiz);

            let submission_count = 5 + (i * 3) % 11;
            for k in 0..submission_count {
                let score = (50 + (i * 17 + k * 23) % 51) as u32;
                let time_taken_secs = (60 + (i * 29 + k * 41) % 241) as f64;
                let backdated_mins = ((i * 131 + k * 197) % (1440 * 7)) as i64;
                state.submissions.push(QuizSubmission {
                    id: Uuid::new_v4(),
                    quiz_id,
                    user_id: format!("user-{}", (i * 7 + k * 13) % 1000),
                    user_name: format!("Player {}", k + 1),
                    score,
                    time_taken_secs,
                    submitted_at: Utc::now() - Duration::minutes(backdated_mins),
                });
            }
        }

        self.persist_quizzes(&state)?;
        self.persist_submissions(&state)?;
        tracing::info!(
            quizzes = state.quizzes.len(),
            submissions = state.submissions.len(),
            "seeded demo data"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StorageGateway;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    impl StorageGateway for MapStore {
        fn load(&self, slot: &str) -> anyhow::Result<Option<String>> {
            Ok(self.0.lock().unwrap().get(slot).cloned())
        }

        fn save(&self, slot: &str, payload: &str) -> anyhow::Result<()> {
            self.0.lock().unwrap().insert(slot.to_owned(), payload.to_owned());
            Ok(())
        }
    }

    fn seeded_repo() -> QuizRepository {
        let repo = QuizRepository::open(Arc::new(MapStore::default())).unwrap();
        repo.seed_demo_data("demo-creator").unwrap();
        repo
    }

    #[test]
    fn seeds_ten_quizzes_for_the_creator() {
        let repo = seeded_repo();
        let quizzes = repo.quizzes();
        assert_eq!(quizzes.len(), 10);
        assert!(quizzes.iter().all(|q| q.creator_id == "demo-creator"));
        assert!(quizzes
            .iter()
            .all(|q| (2..=4).contains(&q.questions.len())));
    }

    #[test]
    fn fabricated_submissions_stay_in_documented_ranges() {
        let repo = seeded_repo();
        let submissions = repo.submissions();
        assert!(!submissions.is_empty());
        let week_ago = Utc::now() - Duration::days(7) - Duration::minutes(1);
        for sub in &submissions {
            assert!((50..=100).contains(&sub.score), "score {}", sub.score);
            assert!(
                (60.0..=300.0).contains(&sub.time_taken_secs),
                "time {}",
                sub.time_taken_secs
            );
            assert!(sub.submitted_at > week_ago);
        }

        let per_quiz: Vec<usize> = repo
            .quizzes()
            .iter()
            .map(|q| submissions.iter().filter(|s| s.quiz_id == q.id).count())
            .collect();
        assert!(per_quiz.iter().all(|&n| (5..=15).contains(&n)));
    }

    #[test]
    fn reseeding_replaces_rather_than_accumulates() {
        let repo = seeded_repo();
        repo.create_quiz("extra", "", "someone-else").unwrap();
        repo.seed_demo_data("demo-creator").unwrap();
        assert_eq!(repo.quizzes().len(), 10);
    }

    #[test]
    fn seeded_rankings_are_well_formed() {
        let repo = seeded_repo();
        let quiz = &repo.quizzes()[0];
        let ranked = repo.quiz_rankings(quiz.id);
        assert!(!ranked.is_empty());
        for (index, entry) in ranked.iter().enumerate() {
            assert_eq!(entry.rank, index as u32 + 1);
            if index > 0 {
                assert!(ranked[index - 1].submission.score >= entry.submission.score);
            }
        }
    }
}
