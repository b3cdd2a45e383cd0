use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question row. Rows are inserted and deleted through the API but
/// never updated in place; `id` is assigned by the store and stays stable
/// for the lifetime of the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: i32,
}
