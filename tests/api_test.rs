use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use trivia_backend::{config, database::pool::create_pool, router, AppState};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn trivia_api_end_to_end() {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL is not set; skipping end-to-end API test");
        return;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    config::init_config().expect("init config");

    let pool = create_pool().await.expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    sqlx::query("TRUNCATE questions RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("reset questions");

    // 12 questions across 2 categories: 7 in category 1, 5 in category 2.
    for i in 0i32..12 {
        let category_id = if i < 7 { 1 } else { 2 };
        sqlx::query(
            "INSERT INTO questions (question, answer, difficulty, category_id)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(format!("Which number comes after {}?", i))
        .bind((i + 1).to_string())
        .bind(1i32)
        .bind(category_id)
        .execute(&pool)
        .await
        .expect("seed question");
    }

    let app = router(AppState::new(pool.clone()));

    // Page 1 holds 10 of the 12 questions.
    let response = app.clone().oneshot(get("/questions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], json!(12));
    assert_eq!(body["current_category"], json!(0));
    assert_eq!(body["categories"][0], json!("null"));
    let first = &body["questions"][0];
    assert!(first["id"].is_i64());
    assert!(first["question"].is_string());
    assert!(first["answer"].is_string());
    assert!(first["difficulty"].is_i64());
    assert!(first["category"].is_i64());

    // Page 2 holds the remaining 2.
    let response = app.clone().oneshot(get("/questions?page=2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_questions"], json!(12));

    // Pages past the end are 404 with the error envelope.
    let response = app.clone().oneshot(get("/questions?page=9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": 404, "message": "Not Found" })
    );

    // Malformed page values degrade to page 1.
    let response = app
        .clone()
        .oneshot(get("/questions?page=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);

    // Category listing: placeholder plus the six seeded categories.
    let response = app.clone().oneshot(get("/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories[0], json!("null"));
    assert_eq!(categories.len(), 7);

    // Category-filtered listing.
    let response = app
        .clone()
        .oneshot(get("/categories/2/questions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_questions"], json!(5));
    assert_eq!(body["current_category"], json!(2));
    for question in body["questions"].as_array().unwrap() {
        assert_eq!(question["category"], json!(2));
    }

    // A category with no questions is a 404.
    let response = app
        .clone()
        .oneshot(get("/categories/99/questions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Search is case-insensitive; an absent term matches everything.
    let response = app
        .clone()
        .oneshot(post_json("/questions/search", json!({ "searchTerm": "WHICH" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_questions"], json!(12));

    let response = app
        .clone()
        .oneshot(post_json("/questions/search", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_questions"], json!(12));

    let response = app
        .clone()
        .oneshot(post_json(
            "/questions/search",
            json!({ "searchTerm": "after 3" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total_questions"], json!(1));

    // Creation returns the new id and the refreshed first page.
    let response = app
        .clone()
        .oneshot(post_json(
            "/questions",
            json!({
                "question": "Who let the dogs out?",
                "answer": "Baha Men",
                "difficulty": 5,
                "category": 1
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["created"], json!(13));
    assert_eq!(body["total_questions"], json!(13));
    assert_eq!(body["current_category"], json!(0));

    // Missing fields are a 400, each reported independently of the others.
    let response = app
        .clone()
        .oneshot(post_json(
            "/questions",
            json!({ "answer": "a", "difficulty": 1, "category": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": 400, "message": "Bad Request" })
    );

    let response = app
        .clone()
        .oneshot(post_json(
            "/questions",
            json!({ "question": "q", "answer": "", "difficulty": 1, "category": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Deletion answers with the remaining page of the question's category.
    let response = app.clone().oneshot(delete("/questions/13")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["current_category"], json!(1));
    assert_eq!(body["total_questions"], json!(7));

    // Deleting it again is a 404.
    let response = app.clone().oneshot(delete("/questions/13")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A quiz round over category 2 serves each question once, then reports
    // exhaustion as success with question=false.
    let mut previous_questions: Vec<i64> = Vec::new();
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(post_json(
                "/quizzes",
                json!({
                    "quiz_category": { "id": 2 },
                    "previous_questions": &previous_questions
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        let question = &body["question"];
        assert_eq!(question["category"], json!(2));
        let id = question["id"].as_i64().expect("question id");
        assert!(
            !previous_questions.contains(&id),
            "question {} served twice",
            id
        );
        previous_questions.push(id);
    }

    let response = app
        .clone()
        .oneshot(post_json(
            "/quizzes",
            json!({
                "quiz_category": { "id": 2 },
                "previous_questions": &previous_questions
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": true, "question": false }));

    // Scope 0 draws from every category.
    let response = app
        .clone()
        .oneshot(post_json(
            "/quizzes",
            json!({ "quiz_category": { "id": 0 }, "previous_questions": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["question"].is_object());

    // A quiz payload without its category scope is a 400.
    let response = app
        .clone()
        .oneshot(post_json("/quizzes", json!({ "previous_questions": [] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Known path, unregistered verb: 405 in the error envelope.
    let response = app.clone().oneshot(get("/quizzes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": 405, "message": "Method Not Allowed" })
    );

    // Unknown path: 404 in the error envelope.
    let response = app.clone().oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));
}
