use super::*;

fn staff_body() -> Value {
    json!({
        "firstName": "Fiona",
        "lastName": "Reception",
        "email": "fiona@hotel.com",
        "username": "reception",
        "password": "front-desk",
        "role": "Receptionist",
        "dateOfHire": "2024-03-15",
        "salary": 40000.0
    })
}

fn assert_no_secrets(value: &Value) {
    let text = value.to_string();
    assert!(!text.contains("passwordHash"));
    assert!(!text.contains("password"));
    assert!(!text.contains("$argon2"));
}

/// Tests creating a staff member.
///
/// Expected: 201 without any password material in the body
#[tokio::test]
async fn creates_staff_without_exposing_hash() {
    let app = TestApp::new().await;

    let (status, created) = app.post("/api/staff", staff_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Staff member added successfully!");
    assert_eq!(created["data"]["username"], "reception");
    assert_eq!(created["data"]["dateOfHire"], "2024-03-15");
    assert_no_secrets(&created);

    let (_, one) = app.get(&format!("/api/staff/{}", created["staffID"])).await;
    assert_no_secrets(&one);

    let (_, all) = app.get("/api/staff").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_no_secrets(&all);
}

/// Tests logging in with the password given at creation.
///
/// Expected: 200 carrying the stored role
#[tokio::test]
async fn login_returns_role() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/staff", staff_body()).await;

    let (status, body) = app
        .post(
            "/api/login",
            json!({ "username": "reception", "password": "front-desk" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["staffID"], created["staffID"]);
    assert_eq!(body["username"], "reception");
    assert_eq!(body["role"], "Receptionist");
    assert_no_secrets(&body);
}

/// Tests logging in with a wrong password and with an unknown user.
///
/// Expected: 401 with the same message for both
#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = TestApp::new().await;
    app.post("/api/staff", staff_body()).await;

    let (wrong_password, body) = app
        .post(
            "/api/login",
            json!({ "username": "reception", "password": "nope" }),
        )
        .await;
    assert_eq!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");

    let (unknown_user, body) = app
        .post(
            "/api/login",
            json!({ "username": "nobody", "password": "front-desk" }),
        )
        .await;
    assert_eq!(unknown_user, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

/// Tests logging in without a password.
///
/// Expected: 400 naming the missing field
#[tokio::test]
async fn login_requires_both_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/login", json!({ "username": "reception" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: password");
}

/// Tests changing a password through the update endpoint.
///
/// Expected: the old password stops working and the new one logs in
#[tokio::test]
async fn password_update_rehashes() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/staff", staff_body()).await;

    let (status, _) = app
        .put(
            &format!("/api/staff/{}", created["staffID"]),
            json!({ "password": "new-secret" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (old, _) = app
        .post(
            "/api/login",
            json!({ "username": "reception", "password": "front-desk" }),
        )
        .await;
    assert_eq!(old, StatusCode::UNAUTHORIZED);

    let (new, _) = app
        .post(
            "/api/login",
            json!({ "username": "reception", "password": "new-secret" }),
        )
        .await;
    assert_eq!(new, StatusCode::OK);
}

/// Tests that a stored hash cannot be written directly.
///
/// Expected: 400 for a passwordHash key
#[tokio::test]
async fn rejects_direct_hash_update() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/staff", staff_body()).await;

    let (status, _) = app
        .put(
            &format!("/api/staff/{}", created["staffID"]),
            json!({ "passwordHash": "plain" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests changing a password to a blank value.
///
/// Expected: 400 and the existing password still logs in
#[tokio::test]
async fn rejects_blank_password_update() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/staff", staff_body()).await;

    let (status, body) = app
        .put(
            &format!("/api/staff/{}", created["staffID"]),
            json!({ "password": "   " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: password");

    let (login, _) = app
        .post(
            "/api/login",
            json!({ "username": "reception", "password": "front-desk" }),
        )
        .await;
    assert_eq!(login, StatusCode::OK);
}

/// Tests logging in with a JSON array instead of an object.
///
/// Expected: 400
#[tokio::test]
async fn login_rejects_non_object_body() {
    let app = TestApp::new().await;
    app.post("/api/staff", staff_body()).await;

    let (status, body) = app
        .post("/api/login", json!(["reception", "front-desk"]))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON data provided.");
}
