use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::question_dto::{CategoryListResponse, PageQuery, QuestionListResponse},
    error::{Error, Result},
    services::category_service::category_options,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Placeholder-first category names", body = CategoryListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = category_options(&state.category_service.list_all().await?);

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = QuestionListResponse),
        (status = 404, description = "No questions for this category and page")
    )
)]
#[axum::debug_handler]
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let selection = state.question_service.list_by_category(category_id).await?;
    let current = state.paginator.slice(&selection, query.page());

    if current.is_empty() {
        return Err(Error::NotFound(format!(
            "no questions for category {} on the requested page",
            category_id
        )));
    }

    let categories = category_options(&state.category_service.list_all().await?);
    Ok(Json(QuestionListResponse::new(
        current,
        selection.len(),
        categories,
        category_id,
    )))
}
