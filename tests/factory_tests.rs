//! Factory and navigation behavior checked with an in-memory adapter that
//! records every request instead of sending it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};

use digitalocean_sdk::*;

#[derive(Debug, Clone)]
struct Recorded {
    method: HttpMethod,
    url: String,
    authorization: Vec<String>,
    body: Option<serde_json::Value>,
}

struct RecordingAdapter {
    base_url: Option<String>,
    auth: BearerTokenProvider,
    log: Arc<Mutex<Vec<Recorded>>>,
    status: u16,
    reply: String,
}

impl RecordingAdapter {
    fn new(base_url: Option<&str>, reply: &str) -> (Self, Arc<Mutex<Vec<Recorded>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let adapter = Self {
            base_url: base_url.map(str::to_string),
            auth: BearerTokenProvider::new("dop_v1_recording").unwrap(),
            log: log.clone(),
            status: 200,
            reply: reply.to_string(),
        };
        (adapter, log)
    }
}

#[async_trait]
impl RequestAdapter for RecordingAdapter {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn set_base_url(&mut self, base_url: String) {
        self.base_url = Some(base_url);
    }

    async fn send(&self, mut request: RequestInformation) -> Result<HttpResponse, DoError> {
        let url = request.uri(self.base_url.as_deref().unwrap_or_default())?;
        self.auth.authenticate_request(&mut request);
        let authorization = request
            .headers
            .get_all(AUTHORIZATION)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        let body = request
            .body
            .as_ref()
            .map(|b| serde_json::from_slice(b).unwrap());
        self.log.lock().unwrap().push(Recorded {
            method: request.method,
            url: url.to_string(),
            authorization,
            body,
        });
        Ok(HttpResponse {
            status: self.status,
            headers: HeaderMap::new(),
            body: self.reply.clone().into_bytes(),
        })
    }
}

#[tokio::test]
async fn unset_base_url_targets_digitalocean() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"account": {"email": "a@b.c"}}"#);
    let client = ClientFactory::create(adapter);
    assert_eq!(client.base_url().as_deref(), Some("https://api.digitalocean.com"));

    let account = client.v2().account().get().await.unwrap();
    assert_eq!(account.account.email.as_deref(), Some("a@b.c"));

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, HttpMethod::Get);
    assert_eq!(log[0].url, "https://api.digitalocean.com/v2/account");
    assert_eq!(log[0].authorization, vec!["Bearer dop_v1_recording"]);
}

#[tokio::test]
async fn existing_base_url_is_kept() {
    let (adapter, log) = RecordingAdapter::new(Some("http://localhost:8080/"), r#"{"regions": []}"#);
    let client = ClientFactory::create(adapter);

    client.v2().regions().get().await.unwrap();

    assert_eq!(log.lock().unwrap()[0].url, "http://localhost:8080/v2/regions");
}

#[tokio::test]
async fn identifiers_are_encoded_as_single_segments() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"tag": {"name": "x"}}"#);
    let client = ClientFactory::create(adapter);

    client.v2().tags().by_tag_id("env/prod test").get().await.unwrap();

    assert_eq!(
        log.lock().unwrap()[0].url,
        "https://api.digitalocean.com/v2/tags/env%2Fprod%20test"
    );
}

#[tokio::test]
async fn query_parameters_are_appended() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"domain_records": []}"#);
    let client = ClientFactory::create(adapter);

    let query = RecordsQuery {
        name: Some("www.example.com".into()),
        type_: Some("CNAME".into()),
        ..Default::default()
    };
    client
        .v2()
        .domains()
        .by_domain_name("example.com")
        .records()
        .get_with(&query)
        .await
        .unwrap();

    assert_eq!(
        log.lock().unwrap()[0].url,
        "https://api.digitalocean.com/v2/domains/example.com/records?name=www.example.com&type=CNAME"
    );
}

#[tokio::test]
async fn request_bodies_are_serialized() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"project": {"name": "web"}}"#);
    let client = ClientFactory::create(adapter);

    let update = ProjectUpdateRequest {
        environment: Some("Production".into()),
        ..Default::default()
    };
    client
        .v2()
        .projects()
        .default_project()
        .patch(&update)
        .await
        .unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log[0].method, HttpMethod::Patch);
    assert_eq!(log[0].url, "https://api.digitalocean.com/v2/projects/default");
    assert_eq!(
        log[0].body,
        Some(serde_json::json!({"environment": "Production"}))
    );
}

#[tokio::test]
async fn clones_share_the_adapter() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"sizes": []}"#);
    let client = ClientFactory::create(adapter);
    let other = client.clone();

    let (sizes_a, sizes_b) = (client.v2().sizes(), other.v2().sizes());
    let (a, b) = tokio::join!(sizes_a.get(), sizes_b.get());
    a.unwrap();
    b.unwrap();

    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let (mut adapter, _log) = RecordingAdapter::new(None, "rate limited");
    adapter.status = 429;
    let client = ClientFactory::create(adapter);

    let err = client.v2().droplets().get().await.unwrap_err();
    assert_eq!(err.status_code(), Some(429));
    assert_eq!(err.response_body(), Some("rate limited"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn next_page_links_stay_on_the_api_origin() {
    let (adapter, log) = RecordingAdapter::new(None, r#"{"droplets": []}"#);
    let client = ClientFactory::create(adapter);
    let droplets = client.v2().droplets();

    droplets
        .with_url("https://api.digitalocean.com/v2/droplets?page=2&per_page=20")
        .get()
        .await
        .unwrap();
    let err = droplets
        .with_url("https://attacker.example/v2/droplets?page=2")
        .get()
        .await
        .unwrap_err();

    assert!(matches!(err, DoError::Configuration(_)));
    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log[0].url,
        "https://api.digitalocean.com/v2/droplets?page=2&per_page=20"
    );
}
