use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::dto::question_dto::QuestionResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Category scope for a quiz round; id 0 means all categories.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// Serialized as the question object, or literal `false` once the round
    /// is exhausted. Clients test this field for truthiness.
    #[serde(serialize_with = "question_or_false")]
    #[schema(value_type = Option<QuestionResponse>)]
    pub question: Option<QuestionResponse>,
}

fn question_or_false<S>(question: &Option<QuestionResponse>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}
