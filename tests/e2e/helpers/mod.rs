use axum::Router;
use lingualearn_backend::infrastructure::config::Config;
use lingualearn_backend::infrastructure::http::build_app;
use mockito::{Mock, Server, ServerGuard};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;

pub const TEST_API_KEY: &str = "test-key";
pub const TRANSLATION_MODEL_PATH: &str = "/facebook/m2m100_418M";
pub const QUIZ_MODEL_PATH: &str = "/google/flan-t5-large";

/// Server started without an inference credential
pub struct TestContext {
    pub client: TestClient,
    pub base_url: String,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config();
            let base_url = spawn_app(config.clone()).await;

            Self {
                client: TestClient::new(&base_url),
                base_url,
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

/// Server in live mode, its inference API replaced by a mock server
pub struct LiveContext {
    pub client: TestClient,
    pub base_url: String,
    pub upstream: ServerGuard,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for LiveContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        Self::start(5)
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

impl LiveContext {
    /// Start a live server whose upstream calls give up after `upstream_timeout_secs`
    pub async fn start(upstream_timeout_secs: u64) -> Self {
        let upstream = Server::new_async().await;

        let config = Config {
            hf_api_key: Some(TEST_API_KEY.to_string()),
            inference_base_url: upstream.url(),
            upstream_timeout_secs,
            ..test_config()
        };
        let base_url = spawn_app(config.clone()).await;

        Self {
            client: TestClient::new(&base_url),
            base_url,
            upstream,
            config,
        }
    }

    /// Mock a successful JSON answer from the model at `path`
    pub async fn mock_model_json(&mut self, path: &str, body: &serde_json::Value) -> Mock {
        self.upstream
            .mock("POST", path)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Mock a failing answer from the model at `path`
    pub async fn mock_model_error(&mut self, path: &str, status: usize) -> Mock {
        self.upstream
            .mock("POST", path)
            .with_status(status)
            .with_body(r#"{"error":"Model is currently loading"}"#)
            .create_async()
            .await
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        ..Config::default()
    }
}

async fn spawn_app(config: Config) -> String {
    let app: Router = build_app(Arc::new(config)).expect("Failed to create app");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to be ready
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    format!("http://{}", addr)
}
