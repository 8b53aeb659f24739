
use std::time::Duration;

use pet_facts_page::api::{create_router, AppState};
use pet_facts_page::Config;
use tokio::net::TcpListener;

pub use self::mocks::{MockCatFactsApi, MockDogImagesApi};

/// Timeout the service runs with in tests; well below the production 5s.
pub const TEST_HTTP_TIMEOUT: Duration = Duration::from_millis(500);

pub struct TestHarness {
    /// Plain client for talking to the service.
    pub client: reqwest::Client,

    /// The configuration that this instance of the service started with.
    pub config: Config,

    /// State handed to the router, for driving handlers directly.
    pub state: AppState,

    /// The mock cat facts API.
    pub mock_cat_facts_api: MockCatFactsApi,

    /// The mock dog image API.
    pub mock_dog_images_api: MockDogImagesApi,
}

impl TestHarness {
    /// Starts a new instance of the service and both mock APIs.
    pub async fn start() -> TestHarness {
        let mock_cat_facts_api = MockCatFactsApi::new().await;
        let mock_dog_images_api = MockDogImagesApi::new().await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = Config {
            host: "127.0.0.1".into(),
            port,
            cat_facts_api_url: mock_cat_facts_api.url(),
            dog_api_url: mock_dog_images_api.url(),
            http_timeout_ms: TEST_HTTP_TIMEOUT.as_millis() as u64,
            ..Config::default()
        };
        config.validate().expect("Test configuration is invalid");

        let state = AppState::from_config(&config).expect("Failed to build app state");
        let router = create_router(state.clone());
        let _join_handle = tokio::spawn(async move { axum::serve(listener, router).await });

        let client = reqwest::ClientBuilder::new()
            .build()
            .expect("Failed to build http client");

        TestHarness {
            client,
            config,
            state,
            mock_cat_facts_api,
            mock_dog_images_api,
        }
    }

    /// Builds a URL to a relative path hosted by our service
    pub fn build_url(&self, relative_path: impl Into<String>) -> String {
        format!(
            "http://{}:{}{}",
            self.config.host,
            self.config.port,
            relative_path.into()
        )
    }

    /// GET the index page and return its HTML.
    pub async fn get_page(&self) -> String {
        self.client
            .get(self.build_url("/"))
            .send()
            .await
            .expect("Failed to make request to server")
            .error_for_status()
            .expect("Server returned an error status code")
            .text()
            .await
            .expect("Failed to read body")
    }

    /// Submit the form, optionally with a `limit` field, and return the HTML.
    pub async fn submit(&self, limit: Option<&str>) -> String {
        let fields: Vec<(&str, &str)> = limit.into_iter().map(|l| ("limit", l)).collect();
        self.client
            .post(self.build_url("/"))
            .form(&fields)
            .send()
            .await
            .expect("Failed to make request to server")
            .error_for_status()
            .expect("Server returned an error status code")
            .text()
            .await
            .expect("Failed to read body")
    }
}

/// Number of fact list items in a rendered page.
pub fn rendered_fact_count(html: &str) -> usize {
    html.matches("<li>").count()
}
