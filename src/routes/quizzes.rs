use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::collections::HashSet;

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    utils::json::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next unseen question, or question=false once exhausted", body = QuizResponse),
        (status = 400, description = "Malformed quiz payload")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizPayload>,
) -> Result<impl IntoResponse> {
    let scope_category_id = payload
        .quiz_category
        .map(|category| category.id)
        .ok_or_else(|| Error::BadRequest("quiz_category is required".to_string()))?;

    let seen_ids: HashSet<i32> = payload.previous_questions.into_iter().collect();
    let question = state
        .quiz_service
        .next_question(scope_category_id, &seen_ids)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(Into::into),
    }))
}
