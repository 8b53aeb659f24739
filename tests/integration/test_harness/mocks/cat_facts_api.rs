use std::time::Duration;

use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FACTS_PATH: &str = "/facts";

pub struct MockCatFactsApi(MockServer);

impl MockCatFactsApi {
    pub async fn new() -> Self {
        Self(MockServer::builder().start().await)
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.0.uri(), FACTS_PATH)
    }

    /// Answer requests carrying `limit` with that many distinct facts.
    pub async fn configure_facts(&self, limit: u8) -> Vec<String> {
        let facts: Vec<String> = (0..limit)
            .map(|_| format!("This cat is called {}.", Uuid::new_v4()))
            .collect();
        let data: Vec<Value> = facts.iter().map(|fact| json!({ "fact": fact })).collect();

        Mock::given(method("GET"))
            .and(path(FACTS_PATH))
            .and(query_param("limit", limit.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .expect(1)
            .mount(&self.0)
            .await;
        facts
    }

    /// Answer any request with the given JSON body.
    pub async fn configure_body(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(FACTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.0)
            .await;
    }

    pub async fn setup_failure(&self) {
        Mock::given(method("GET"))
            .and(path(FACTS_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&self.0)
            .await;
    }

    pub async fn setup_slow_response(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(FACTS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": ["too late"] }))
                    .set_delay(delay),
            )
            .mount(&self.0)
            .await;
    }

    pub async fn expect_no_requests(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.0)
            .await;
    }

    pub async fn received_request_count(&self) -> usize {
        self.0
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
