use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use yatra_rs::{create_app, handlers::RequestLimits, repositories::MemStorage, Metrics};

pub const TEST_MAX_REQUEST_SIZE: usize = 16 * 1024;

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    pub storage: Arc<MemStorage>,
}

impl TestEnvironment {
    /// Serve a freshly seeded application on an ephemeral port
    pub async fn new() -> Self {
        let storage = Arc::new(MemStorage::new());
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let app = create_app(
            storage.clone(),
            metrics,
            RequestLimits {
                max_request_size: TEST_MAX_REQUEST_SIZE,
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        Self {
            client: Client::new(),
            base_url,
            storage,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }

    pub async fn post_contact(&self, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url("/api/contact"))
            .json(body)
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}

pub fn valid_contact_body() -> Value {
    json!({
        "name": "Ramesh Iyer",
        "email": "ramesh.iyer@example.in",
        "phone": "(044) 2345-6789",
        "message": "Interested in the Bodh Gaya trip for two seniors in March."
    })
}
