#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Cargo builds the binary before integration tests and exports its path
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_notely"));
        cmd.env("PORT", port.to_string())
            .env("HOST", "127.0.0.1")
            .env("DATABASE_URL", "sqlite::memory:")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/v1/healthz", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Start a dedicated server for one test; it is killed when dropped
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Register a user and return the JSON body, including its API key
pub async fn create_user(server: &TestServer, name: &str) -> Result<Value> {
    let res = reqwest::Client::new()
        .post(server.url("/v1/users"))
        .json(&json!({ "name": name }))
        .send()
        .await?;

    anyhow::ensure!(res.status() == StatusCode::CREATED, "unexpected status: {}", res.status());
    Ok(res.json().await?)
}

pub fn api_key_header(user: &Value) -> String {
    format!("ApiKey {}", user["api_key"].as_str().unwrap_or_default())
}
