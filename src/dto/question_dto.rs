use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::pagination::parse_page;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: Option<String>,
    #[validate(range(min = 1, message = "difficulty must be a positive integer"))]
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

/// Creation fields after presence checking.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: i32,
}

impl CreateQuestionPayload {
    /// Presence is checked field by field, so each omission is reported
    /// against its own name and a present-but-zero value is never mistaken
    /// for a missing one.
    pub fn into_new_question(self) -> Result<NewQuestion> {
        Ok(NewQuestion {
            question: self
                .question
                .ok_or_else(|| Error::BadRequest("question is required".to_string()))?,
            answer: self
                .answer
                .ok_or_else(|| Error::BadRequest("answer is required".to_string()))?,
            difficulty: self
                .difficulty
                .ok_or_else(|| Error::BadRequest("difficulty is required".to_string()))?,
            category_id: self
                .category
                .ok_or_else(|| Error::BadRequest("category is required".to_string()))?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        parse_page(self.page.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            question: value.question,
            answer: value.answer,
            difficulty: value.difficulty,
            category: value.category_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub categories: Vec<String>,
    pub current_category: i32,
}

impl QuestionListResponse {
    pub fn new(
        page: &[Question],
        total_questions: usize,
        categories: Vec<String>,
        current_category: i32,
    ) -> Self {
        Self {
            success: true,
            questions: page.iter().cloned().map(Into::into).collect(),
            total_questions: total_questions as i64,
            categories,
            current_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub categories: Vec<String>,
    pub current_category: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<String>,
}
