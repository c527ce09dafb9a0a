use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

fn participants(activities: &Value, activity: &str) -> Vec<String> {
    activities[activity]["participants"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn get_activities_returns_seeded_activities() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.get_activities().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    let map = body.as_object().expect("activities should be a JSON object");
    for name in ["Chess Club", "Programming Class", "Gym Class"] {
        assert!(map.contains_key(name), "missing activity: {name}");
    }

    let chess = &body["Chess Club"];
    assert!(chess["description"].is_string());
    assert!(chess["schedule"].is_string());
    assert!(chess["max_participants"].is_u64());
    assert!(chess["participants"].is_array());

    Ok(())
}

#[tokio::test]
async fn get_activities_is_idempotent() -> Result<()> {
    let app = TestApp::spawn().await?;

    let first = app.get_activities_json().await?;
    let second = app.get_activities_json().await?;

    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn signup_and_remove_participant_flow() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (activity, email) = ("Chess Club", "test_user@example.com");

    let res = app.post_signup(activity, email).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("Signed up"), "unexpected message: {message}");

    let activities = app.get_activities_json().await?;
    assert!(participants(&activities, activity).contains(&email.to_string()));

    let res = app.delete_participant(activity, email).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("Removed"), "unexpected message: {message}");

    let activities = app.get_activities_json().await?;
    assert!(!participants(&activities, activity).contains(&email.to_string()));

    let res = app.delete_participant(activity, email).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn signup_duplicate_returns_400() -> Result<()> {
    let app = TestApp::spawn().await?;
    let (activity, email) = ("Chess Club", "duplicate_user@example.com");

    let res = app.post_signup(activity, email).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post_signup(activity, email).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "ALREADY_REGISTERED");
    assert!(body["detail"].is_string());

    let chess = app.store.activity(activity).await.expect("seeded activity");
    let count = chess.participants.iter().filter(|p| *p == email).count();
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
async fn signup_nonexistent_activity_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    for email in ["noone@example.com", "michael@mergington.edu", ""] {
        let res = app.post_signup("Nonexistent Activity", email).await?;
        assert_eq!(
            res.status(),
            StatusCode::NOT_FOUND,
            "signup for a missing activity with email '{email}'"
        );
    }

    let res = app.post_signup("chess club", "noone@example.com").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND, "lookup is case sensitive");

    Ok(())
}

#[tokio::test]
async fn remove_nonexistent_participant_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("Chess Club", "not_in_list@example.com")
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "PARTICIPANT_NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn remove_from_nonexistent_activity_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("NoSuchActivity", "someone@example.com")
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "ACTIVITY_NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn remove_seeded_participant_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_participant("Chess Club", "michael@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let chess = app.store.activity("Chess Club").await.expect("seeded activity");
    assert!(!chess.is_registered("michael@mergington.edu"));

    Ok(())
}

#[tokio::test]
async fn signup_without_email_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(app.url("/activities/Chess%20Club/signup"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "INVALID_INPUT");
    assert!(body["detail"].is_string());
    assert!(body["req_id"].is_string());

    let before = app.store.activity("Chess Club").await.expect("seeded activity");
    assert_eq!(before.participants.len(), 2);

    Ok(())
}

#[tokio::test]
async fn remove_without_email_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .delete(app.url("/activities/Chess%20Club/participants"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "INVALID_INPUT");

    let chess = app.store.activity("Chess Club").await.expect("seeded activity");
    assert_eq!(chess.participants.len(), 2);

    Ok(())
}

#[tokio::test]
async fn invalid_utf8_activity_name_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(app.url("/activities/%FF/signup?email=a@example.com"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "INVALID_INPUT");

    Ok(())
}

#[tokio::test]
async fn percent_encoded_email_is_decoded() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(app.url(
            "/activities/Chess%20Club/signup?email=first.last%2Btag%40example.com",
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let chess = app.store.activity("Chess Club").await.expect("seeded activity");
    assert!(chess.is_registered("first.last+tag@example.com"));

    Ok(())
}

#[tokio::test]
async fn error_response_keeps_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_signup("Nonexistent Activity", "a@example.com").await?;
    let header = res
        .headers()
        .get("x-request-id")
        .and_then(|hv| hv.to_str().ok())
        .map(str::to_string);
    let body: Value = res.json().await?;

    assert!(header.is_some(), "x-request-id header missing");
    assert_eq!(body["req_id"].as_str().map(str::to_string), header);

    Ok(())
}
