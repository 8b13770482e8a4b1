//! HTTP-level integration tests for the GraphQL endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, diary_json, get, post_json};
use serde_json::{json, Value};

const FULL_FIELDS: &str = "id date title createdBy content weather { description temperature } attendees attachments";

async fn graphql(app: axum::Router, query: &str, variables: Value) -> Value {
    let mut body = json!({ "query": query });
    if !variables.is_null() {
        body["variables"] = variables;
    }
    let response = post_json(app, "/api/graphql", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

fn create_mutation() -> String {
    format!(
        "mutation Create($input: SiteDiaryInput!) {{ createSiteDiary(input: $input) {{ {FULL_FIELDS} }} }}"
    )
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_site_diary_mutation() {
    let app = common::build_test_app();
    let json = graphql(
        app,
        &create_mutation(),
        json!({
            "input": {
                "id": "gql-1",
                "date": "2024-04-01",
                "title": "Roof sheeting",
                "createdBy": "Morgan",
                "weather": { "description": "Calm", "temperature": 19 },
                "attendees": ["Morgan"]
            }
        }),
    )
    .await;

    assert!(json.get("errors").is_none(), "unexpected errors: {json}");
    let diary = &json["data"]["createSiteDiary"];
    assert_eq!(diary["id"], "gql-1");
    assert_eq!(diary["createdBy"], "Morgan");
    assert_eq!(diary["weather"]["temperature"], 19.0);
    assert_eq!(diary["attendees"], json!(["Morgan"]));
    assert!(diary["content"].is_null());
    assert!(diary["attachments"].is_null());
}

#[tokio::test]
async fn test_create_missing_fields_reports_code_and_fields() {
    let app = common::build_test_app();
    let json = graphql(
        app,
        &create_mutation(),
        json!({ "input": { "id": "gql-2", "date": "2024-04-01" } }),
    )
    .await;

    let error = &json["errors"][0];
    assert_eq!(error["extensions"]["code"], "VALIDATION_ERROR");
    assert_eq!(error["extensions"]["fields"], json!(["title", "createdBy"]));
}

#[tokio::test]
async fn test_create_partial_weather_reports_validation_error() {
    let app = common::build_test_app();
    let json = graphql(
        app,
        &create_mutation(),
        json!({
            "input": {
                "id": "gql-3",
                "date": "2024-04-01",
                "title": "T",
                "createdBy": "U",
                "weather": { "description": "Windy" }
            }
        }),
    )
    .await;

    assert_eq!(json["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_string_temperature_reports_validation_error() {
    let app = common::build_test_app();
    let json = graphql(
        app.clone(),
        &create_mutation(),
        json!({
            "input": {
                "id": "gql-hot",
                "date": "2024-04-01",
                "title": "T",
                "createdBy": "U",
                "weather": { "description": "Sunny", "temperature": "hot" }
            }
        }),
    )
    .await;

    let error = &json["errors"][0];
    assert_eq!(error["extensions"]["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("temperature"));

    let listed = graphql(app, "{ siteDiaries { id } }", Value::Null).await;
    assert_eq!(listed["data"]["siteDiaries"], json!([]));
}

#[tokio::test]
async fn test_create_duplicate_reports_duplicate_id() {
    let app = common::build_test_app();
    post_json(app.clone(), "/api/site-diary", diary_json("shared", "2024-01-01")).await;

    let json = graphql(
        app,
        &create_mutation(),
        json!({
            "input": { "id": "shared", "date": "2024-02-02", "title": "T", "createdBy": "U" }
        }),
    )
    .await;

    assert_eq!(json["errors"][0]["extensions"]["code"], "DUPLICATE_ID");
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_site_diaries_query_returns_full_projection_newest_first() {
    let app = common::build_test_app();
    for (id, date) in [("a", "2024-01-01"), ("c", "2024-03-01"), ("b", "2024-02-01")] {
        let mut body = diary_json(id, date);
        body["content"] = json!(format!("Notes for {id}"));
        post_json(app.clone(), "/api/site-diary", body).await;
    }

    let json = graphql(
        app,
        &format!("{{ siteDiaries {{ {FULL_FIELDS} }} }}"),
        Value::Null,
    )
    .await;

    let diaries = json["data"]["siteDiaries"].as_array().unwrap();
    let ids: Vec<_> = diaries.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
    assert_eq!(diaries[0]["content"], "Notes for c");
}

#[tokio::test]
async fn test_site_diaries_query_on_empty_store() {
    let app = common::build_test_app();
    let json = graphql(app, "{ siteDiaries { id } }", Value::Null).await;
    assert_eq!(json["data"]["siteDiaries"], json!([]));
}

#[tokio::test]
async fn test_site_diary_query_matches_rest_projection() {
    let app = common::build_test_app();
    let mut body = diary_json("same", "2024-01-01");
    body["attachments"] = json!(["https://cdn.example/1.jpg", "https://cdn.example/2.jpg"]);
    post_json(app.clone(), "/api/site-diary", body).await;

    let rest = body_json(get(app.clone(), "/api/site-diary/same").await).await;
    let gql = graphql(
        app,
        &format!("query One($id: String!) {{ siteDiary(id: $id) {{ {FULL_FIELDS} }} }}"),
        json!({ "id": "same" }),
    )
    .await;

    assert_eq!(gql["data"]["siteDiary"], rest["data"]);
}

#[tokio::test]
async fn test_site_diary_query_unknown_id_returns_null() {
    let app = common::build_test_app();
    let json = graphql(
        app,
        "query One($id: String!) { siteDiary(id: $id) { id } }",
        json!({ "id": "missing-id" }),
    )
    .await;

    assert!(json.get("errors").is_none());
    assert!(json["data"]["siteDiary"].is_null());
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_graphiql_served_on_get() {
    let app = common::build_test_app();
    let response = get(app, "/api/graphql").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("/api/graphql"));
}
