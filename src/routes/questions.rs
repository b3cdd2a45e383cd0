use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, CreateQuestionResponse, PageQuery, QuestionListResponse,
        SearchPayload,
    },
    error::{Error, Result},
    services::category_service::category_options,
    utils::json::AppJson,
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Page is past the end of the result set")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let selection = state.question_service.list_all().await?;
    let current = state.paginator.slice(&selection, query.page());

    if current.is_empty() {
        return Err(Error::NotFound(
            "no questions on the requested page".to_string(),
        ));
    }

    let categories = category_options(&state.category_service.list_all().await?);
    Ok(Json(QuestionListResponse::new(
        current,
        selection.len(),
        categories,
        0,
    )))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Missing or malformed creation fields"),
        (status = 422, description = "Store rejected the insert")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    AppJson(payload): AppJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let new_question = payload.into_new_question()?;

    let created = state
        .question_service
        .create(&new_question)
        .await
        .map_err(Error::into_unprocessable)?;

    let selection = state.question_service.list_all().await?;
    let current = state.paginator.slice(&selection, query.page());
    let categories = category_options(&state.category_service.list_all().await?);

    let listing = QuestionListResponse::new(current, selection.len(), categories, 0);
    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        current_category: 0,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted; remaining page of its category", body = QuestionListResponse),
        (status = 404, description = "Question does not exist"),
        (status = 422, description = "Store rejected the delete")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.get_by_id(question_id).await?;

    state
        .question_service
        .delete(question_id)
        .await
        .map_err(Error::into_unprocessable)?;

    let selection = state
        .question_service
        .list_by_category(question.category_id)
        .await?;
    let current = state.paginator.slice(&selection, query.page());
    let categories = category_options(&state.category_service.list_all().await?);

    Ok(Json(QuestionListResponse::new(
        current,
        selection.len(),
        categories,
        question.category_id,
    )))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Questions matching the term", body = QuestionListResponse),
        (status = 400, description = "Malformed search payload")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    AppJson(payload): AppJson<SearchPayload>,
) -> Result<impl IntoResponse> {
    // An absent or empty term matches everything.
    let term = payload.search_term.unwrap_or_default();
    let selection = state.question_service.search(&term).await?;
    let current = state.paginator.slice(&selection, query.page());
    let categories = category_options(&state.category_service.list_all().await?);

    Ok(Json(QuestionListResponse::new(
        current,
        selection.len(),
        categories,
        0,
    )))
}
