//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated admin token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to create a room and return its id
async fn create_test_room(client: &Client, token: &str, code: &str) -> i64 {
    let response = client
        .post(format!("{}/room", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "building_id": 1,
            "code": code,
            "name": format!("Test room {}", code),
            "capacity": 30
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No room ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["username"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/room", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_rooms() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/room", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
    assert!(body["total"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_room() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let room_id = create_test_room(&client, &token, "T-901").await;

    // Duplicate code must be rejected with a conflict
    let response = client
        .post(format!("{}/room", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "building_id": 1,
            "code": "T-901",
            "name": "Duplicate room"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let response = client
        .delete(format!("{}/room/{}", BASE_URL, room_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_inverted_periods() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let room_id = create_test_room(&client, &token, "T-902").await;

    let response = client
        .post(format!("{}/schedule", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "room_id": room_id,
            "start_date": "2026-09-07",
            "end_date": "2026-09-07",
            "period_start": 5,
            "period_end": 5
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let _ = client
        .delete(format!("{}/room/{}", BASE_URL, room_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_booked_room_disappears_from_free_search() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let room_id = create_test_room(&client, &token, "T-903").await;

    let slot = "start_date=2026-09-14&end_date=2026-09-14&period_start=3&period_end=5";

    // Room is free before booking
    let response = client
        .get(format!("{}/room/free?{}", BASE_URL, slot))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&room_id));

    // Book it (stays pending; no approval step)
    let response = client
        .post(format!("{}/schedule", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "room_id": room_id,
            "start_date": "2026-09-14",
            "end_date": "2026-09-14",
            "period_start": 3,
            "period_end": 5,
            "purpose": "Seminar"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // The room is gone from the very next search for an intersecting slot
    let response = client
        .get(format!("{}/room/free?{}", BASE_URL, slot))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&room_id));

    // A second booking of the same slot conflicts
    let response = client
        .post(format!("{}/schedule", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "room_id": room_id,
            "start_date": "2026-09-14",
            "end_date": "2026-09-14",
            "period_start": 4,
            "period_end": 6
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let _ = client
        .delete(format!("{}/room/{}", BASE_URL, room_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_week_grid_shape() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/schedule/week?date=2026-09-16", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["monday"], "2026-09-14");
    let days = body["days"].as_array().expect("No days array");
    assert_eq!(days.len(), 7);
    for day in days {
        assert_eq!(day["cells"].as_array().unwrap().len(), 12);
    }
}

#[tokio::test]
#[ignore]
async fn test_create_user_rejects_bad_email() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/user", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "username": "testuser",
            "password": "testpass",
            "full_name": "Test User",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_dashboard() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["rooms"]["total"].is_number());
    assert!(body["schedules"]["pending"].is_number());
    assert!(body["borrow_tickets"]["borrowing"].is_number());
}
