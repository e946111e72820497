use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// The exact header value the server accepts.
pub const AUTH_HEADER: &str = "Bearer mysecrettoken";

/// A server process spawned for one test.
///
/// Each test gets its own process so every test starts from the pristine
/// three-record seed state; tests that mutate the collection cannot bleed
/// into each other. The process is killed when the test drops the handle.
pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{port}");

        // Cargo builds the binary before integration tests run and exports its path
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_product-api"));
        cmd.env("SERVER_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        let server = Self { base_url, child };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            // Any HTTP response means the listener is up; without a token
            // this will be a 401, which is fine for a readiness probe
            if client.get(&self.base_url).send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
