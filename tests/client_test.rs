// ABOUTME: Unit tests for the storage/identity API client
// ABOUTME: Validates construction, configuration defaults, and bearer-token lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodytrack::client::{TrackerClient, TrackerClientConfig};

#[test]
fn test_config_defaults() {
    let config = TrackerClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000/api/v1");
    assert_eq!(config.timeout_secs, 30);
}

#[tokio::test]
async fn test_client_starts_unauthenticated() {
    let client = TrackerClient::new(TrackerClientConfig::default()).unwrap();
    assert!(!client.is_authenticated().await);
    assert_eq!(client.bearer_token().await, None);
}

#[tokio::test]
async fn test_token_install_and_discard() {
    let client = TrackerClient::new(TrackerClientConfig::default()).unwrap();

    client.set_token("tok-123").await;
    assert!(client.is_authenticated().await);
    assert_eq!(client.bearer_token().await.as_deref(), Some("tok-123"));

    client.clear_token().await;
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_token_replacement_keeps_latest() {
    let client = TrackerClient::new(TrackerClientConfig::default()).unwrap();
    client.set_token("first").await;
    client.set_token("second").await;
    assert_eq!(client.bearer_token().await.as_deref(), Some("second"));
}
