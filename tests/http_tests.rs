use axum::http::StatusCode;
use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use realty_catalog::{create_in_memory_app, create_router};
use serde_json::{json, Value};

async fn server() -> TestServer {
    let state = create_in_memory_app().await.unwrap();
    TestServer::new(create_router(state)).unwrap()
}

async fn register(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": email, "password": "s3cret-pass" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_login_and_create_property() {
    let server = server().await;
    let token = register(&server, "jane@example.com").await;

    let login = server
        .post("/api/auth/login")
        .json(&json!({ "email": "jane@example.com", "password": "s3cret-pass" }))
        .await;
    login.assert_status_ok();

    let owner = server
        .post("/api/owners")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    owner.assert_status(StatusCode::CREATED);
    let owner: Value = owner.json();

    let property = server
        .post("/api/properties")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Casa Centro",
            "street": "100 Main St",
            "city": "Springfield",
            "state": "IL",
            "country": "USA",
            "zipCode": "62701",
            "price": 150_000.0,
            "currency": "USD",
            "year": 2020,
            "area": 100.0,
            "ownerId": owner["id"],
        }))
        .await;
    property.assert_status(StatusCode::CREATED);
    let property: Value = property.json();
    assert_eq!(property["price"]["amount"], json!(150_000.0));
    assert_eq!(property["address"]["zipCode"], json!("62701"));
}

#[tokio::test]
async fn search_is_anonymous_and_paged() {
    let server = server().await;
    let token = register(&server, "jane@example.com").await;

    let owner = server
        .post("/api/owners")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    let owner: Value = owner.json();

    for name in ["Casa Centro", "Casa Sur", "La Casa Roja"] {
        server
            .post("/api/properties")
            .authorization_bearer(&token)
            .json(&json!({
                "name": name,
                "street": "100 Main St",
                "city": "Springfield",
                "country": "USA",
                "zipCode": "62701",
                "price": 150_000.0,
                "year": 2020,
                "area": 100.0,
                "ownerId": owner["id"],
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/api/properties")
        .add_query_param("text", "Cas")
        .add_query_param("page", "1")
        .add_query_param("pageSize", "10")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], json!(2));
    assert_eq!(body["page"], json!(1));
    assert_eq!(body["pageSize"], json!(10));
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn uploaded_image_is_served_under_files() {
    let server = server().await;
    let token = register(&server, "jane@example.com").await;

    let owner = server
        .post("/api/owners")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    let owner: Value = owner.json();

    let property = server
        .post("/api/properties")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Casa Centro",
            "street": "100 Main St",
            "city": "Springfield",
            "country": "USA",
            "zipCode": "62701",
            "price": 150_000.0,
            "year": 2020,
            "area": 100.0,
            "ownerId": owner["id"],
        }))
        .await;
    let property: Value = property.json();

    let payload = b"front door jpeg bytes".to_vec();
    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(payload.clone())
                .file_name("front.jpg")
                .mime_type("image/jpeg"),
        )
        .add_text("description", "front of the house");
    let upload = server
        .post(&format!(
            "/api/properties/{}/images",
            property["id"].as_str().unwrap()
        ))
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    upload.assert_status(StatusCode::CREATED);
    let image: Value = upload.json();

    // The recorded URL points back at this server's /files mount.
    let url = image["url"].as_str().unwrap();
    let path = url
        .strip_prefix("http://localhost:8080")
        .unwrap_or(url)
        .to_string();
    assert!(path.starts_with("/files/"));

    let fetched = server.get(&path).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.as_bytes().as_ref(), payload.as_slice());
}

#[tokio::test]
async fn mutations_require_a_bearer_token() {
    let server = server().await;

    let response = server
        .post("/api/owners")
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/owners")
        .authorization_bearer("bogus.token.here")
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let server = server().await;
    register(&server, "jane@example.com").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "jane@example.com", "password": "other-pass" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("conflict"));
}

#[tokio::test]
async fn missing_resources_are_404() {
    let server = server().await;
    let token = register(&server, "jane@example.com").await;

    let response = server
        .get(&format!("/api/properties/{}", uuid::Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/api/owners/{}", uuid::Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_400() {
    let server = server().await;
    let token = register(&server, "jane@example.com").await;

    let owner = server
        .post("/api/owners")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane Doe", "address": "1 Main St" }))
        .await;
    let owner: Value = owner.json();

    let response = server
        .post("/api/properties")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Casa Centro",
            "street": "100 Main St",
            "city": "Springfield",
            "country": "USA",
            "zipCode": "62701",
            "price": -1.0,
            "year": 2020,
            "area": 100.0,
            "ownerId": owner["id"],
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("bad_request"));
}
