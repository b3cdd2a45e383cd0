use crate::dto::question_dto::NewQuestion;
use crate::error::Result;
use crate::models::question::Question;
use sqlx::PgPool;

/// Every retrieval is ordered by ascending id so page boundaries stay
/// stable between requests as long as no row is inserted or deleted.
#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category_id
             FROM questions
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category_id
             FROM questions
             WHERE category_id = $1
             ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match against the question text. An empty
    /// term matches every question.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category_id
             FROM questions
             WHERE question ILIKE $1
             ORDER BY id",
        )
        .bind(format!("%{}%", term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_by_id(&self, question_id: i32) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category_id
             FROM questions
             WHERE id = $1",
        )
        .bind(question_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn create(&self, new_question: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, difficulty, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, question, answer, difficulty, category_id",
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.difficulty)
        .bind(new_question.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn delete(&self, question_id: i32) -> Result<()> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
