pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::pagination::Paginator;
use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub question_service: QuestionService,
    pub category_service: CategoryService,
    pub quiz_service: QuizService,
    pub paginator: Paginator,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let question_service = QuestionService::new(pool.clone());
        let category_service = CategoryService::new(pool.clone());
        let quiz_service = QuizService::new(pool.clone());
        let paginator = Paginator::new(config.questions_per_page);

        Self {
            pool,
            question_service,
            category_service,
            quiz_service,
            paginator,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/questions",
            get(routes::questions::list_questions).post(routes::questions::create_question),
        )
        .route(
            "/questions/search",
            post(routes::questions::search_questions),
        )
        .route(
            "/questions/:question_id",
            delete(routes::questions::delete_question),
        )
        .route("/categories", get(routes::categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(routes::categories::list_category_questions),
        )
        .route("/quizzes", post(routes::quizzes::play_quiz))
        .fallback(middleware::error_shape::not_found)
        .with_state(state)
        .layer(middleware::cors::cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::map_response(
            middleware::error_shape::rewrite_method_not_allowed,
        ))
}
