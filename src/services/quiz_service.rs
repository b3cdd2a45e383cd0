use crate::error::Result;
use crate::models::question::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;
use std::collections::HashSet;

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Picks the next quiz question for the given category scope, skipping
    /// ids the client has already been served. `scope_category_id` 0 means
    /// all categories. `None` means the round is exhausted, which is a
    /// normal terminal state rather than an error.
    pub async fn next_question(
        &self,
        scope_category_id: i32,
        seen_ids: &HashSet<i32>,
    ) -> Result<Option<Question>> {
        let candidates = if scope_category_id == 0 {
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, difficulty, category_id
                 FROM questions
                 ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, difficulty, category_id
                 FROM questions
                 WHERE category_id = $1
                 ORDER BY id",
            )
            .bind(scope_category_id)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(pick_unseen(&candidates, seen_ids, &mut rand::thread_rng()).cloned())
    }
}

/// Uniformly random choice among the candidates whose id is not in
/// `seen_ids`. Pure function over the already-fetched pool; the store never
/// applies the seen-filter itself.
pub fn pick_unseen<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    seen_ids: &HashSet<i32>,
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|question| !seen_ids.contains(&question.id))
        .collect();

    unseen.choose(rng).copied()
}
