#![cfg(feature = "integration")]
//! Integration tests against the live DigitalOcean API.
//!
//! These tests require network access and a personal access token in
//! `DIGITALOCEAN_TOKEN`. Only free resources (tags) are created, and they are
//! removed again.
//! Run with: cargo test --features integration --test integration_tests -- --test-threads=1

use serial_test::serial;

use digitalocean_sdk::*;

fn client() -> DigitalOceanClient {
    DigitalOceanClient::from_env().expect("DIGITALOCEAN_TOKEN must be set for integration tests")
}

#[tokio::test]
#[serial]
async fn test_get_account() {
    let account = client().v2().account().get().await.unwrap();
    assert!(account.account.email.is_some());
    assert!(account.account.uuid.is_some());
}

#[tokio::test]
#[serial]
async fn test_get_balance() {
    let balance = client().v2().customers().my().balance().get().await.unwrap();
    assert!(balance.month_to_date_usage.is_some());
}

#[tokio::test]
#[serial]
async fn test_catalogs() {
    let v2 = client().v2();
    let regions = v2.regions().get().await.unwrap();
    assert!(regions.regions.iter().any(|r| r.available == Some(true)));

    let sizes = v2.sizes().get_with(&ListQuery::page(1, 10)).await.unwrap();
    assert!(!sizes.sizes.is_empty());
    assert!(sizes.sizes.len() <= 10);

    let query = ImagesQuery {
        type_: Some("distribution".into()),
        per_page: Some(5),
        ..Default::default()
    };
    let images = v2.images().get_with(&query).await.unwrap();
    assert!(!images.images.is_empty());
}

#[tokio::test]
#[serial]
async fn test_paginate_sizes() {
    let sizes = client().v2().sizes();
    let first = sizes.get_with(&ListQuery::page(1, 2)).await.unwrap();
    let next = first
        .links
        .as_ref()
        .and_then(|l| l.next_page())
        .map(str::to_string);
    if let Some(url) = next {
        let second = sizes.with_url(url).get().await.unwrap();
        assert!(!second.sizes.is_empty());
        assert_ne!(first.sizes[0].slug, second.sizes[0].slug);
    }
}

#[tokio::test]
#[serial]
async fn test_missing_droplet_is_not_found() {
    let err = client()
        .v2()
        .droplets()
        .by_droplet_id(1)
        .get()
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
    assert!(err.response_body().is_some());
}

#[tokio::test]
#[serial]
async fn test_tag_lifecycle() {
    let tags = client().v2().tags();
    let name = format!("sdk-integration-{}", std::process::id());

    let created = tags
        .post(&TagCreateRequest { name: name.clone() })
        .await
        .unwrap();
    assert_eq!(created.tag.name, name);

    let fetched = tags.by_tag_id(&name).get().await;
    let deleted = tags.by_tag_id(&name).delete().await;

    assert_eq!(fetched.unwrap().tag.name, name);
    deleted.unwrap();
    assert!(tags.by_tag_id(&name).get().await.unwrap_err().is_not_found());
}

#[tokio::test]
#[serial]
async fn test_bad_token_is_unauthorized() {
    let client = DigitalOceanClient::from_token("dop_v1_definitely_not_valid").unwrap();
    let err = client.v2().account().get().await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
}
