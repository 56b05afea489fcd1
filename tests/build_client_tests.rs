/// Tests for submitting creation requests to a running proxy
mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use common::{dead_backend_url, serve, spawn_backend, state_for, Reply};
use spawnbox::api::submit_build;
use spawnbox::models::{CreationOutcome, CreationRequest, FormState};
use spawnbox::{build_router, ProxyError};

fn request(os: &str, name: &str) -> CreationRequest {
    CreationRequest { os: os.to_string(), name: name.to_string() }
}

#[tokio::test]
async fn test_submit_round_trip_created() {
    let backend = spawn_backend(|_| Reply::json(json!({"error": "", "message": "Container 77ab started\n"}))).await;
    let proxy = serve(build_router(state_for(&backend.url))).await;

    let outcome = submit_build(&reqwest::Client::new(), &proxy, &request("ubuntu", "web1"))
        .await
        .unwrap();

    assert_eq!(outcome.instance_id(), Some("Container 77ab started"));
    assert_eq!(backend.calls(), vec!["POST /create/ubuntu/web1".to_string()]);
}

#[tokio::test]
async fn test_submit_trailing_slash_proxy_url() {
    let backend = spawn_backend(|_| Reply::json(json!({"message": "abc"}))).await;
    let proxy = serve(build_router(state_for(&backend.url))).await;

    let outcome = submit_build(&reqwest::Client::new(), &format!("{}/", proxy), &request("debian", "d"))
        .await
        .unwrap();

    assert!(outcome.is_created());
}

#[tokio::test]
async fn test_submit_maps_upstream_failure_to_failed_outcome() {
    let dead = dead_backend_url().await;
    let proxy = serve(build_router(state_for(&dead))).await;

    let outcome = submit_build(&reqwest::Client::new(), &proxy, &request("centos", "c"))
        .await
        .unwrap();

    match outcome {
        CreationOutcome::Failed { error } => assert!(error.contains("Request to creation service failed")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_to_unreachable_proxy_is_transport_error() {
    let dead = dead_backend_url().await;

    let err = submit_build(&reqwest::Client::new(), &dead, &request("centos", "c"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProxyError::Transport(_)));
}

#[tokio::test]
async fn test_last_response_to_resolve_wins() {
    let backend = spawn_backend(|path| {
        if path.ends_with("/slow") {
            Reply::json(json!({"message": "slow-id"})).after(Duration::from_millis(300))
        } else {
            Reply::json(json!({"message": "fast-id"}))
        }
    })
    .await;
    let proxy = serve(build_router(state_for(&backend.url))).await;
    let client = reqwest::Client::new();
    let form = Arc::new(Mutex::new(FormState::default()));

    let first = async {
        let outcome = submit_build(&client, &proxy, &request("ubuntu", "slow")).await.unwrap();
        form.lock().unwrap().record(outcome);
    };
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let outcome = submit_build(&client, &proxy, &request("ubuntu", "fast")).await.unwrap();
        form.lock().unwrap().record(outcome);
    };
    tokio::join!(first, second);

    assert_eq!(backend.calls().len(), 2);
    let result = form.lock().unwrap().result.clone();
    assert_eq!(result, Some(CreationOutcome::Created { message: "slow-id".into() }));
}

#[tokio::test]
async fn test_ping_uses_get_on_root() {
    let backend = spawn_backend(|_| Reply::json(json!({"name": "John"}))).await;

    let body = spawnbox::api::ping_backend(&reqwest::Client::new(), &backend.url).await.unwrap();

    assert_eq!(body["name"], "John");
    assert_eq!(backend.calls(), vec!["GET /".to_string()]);
}

#[tokio::test]
async fn test_backend_call_sends_given_method() {
    let backend = spawn_backend(|_| Reply::json(json!({}))).await;
    let client = reqwest::Client::new();

    spawnbox::api::backend_call(&client, &backend.url, reqwest::Method::PUT, "/x").await.unwrap();
    spawnbox::api::backend_call(&client, &backend.url, reqwest::Method::DELETE, "/y").await.unwrap();

    assert_eq!(backend.calls(), vec!["PUT /x".to_string(), "DELETE /y".to_string()]);
}
