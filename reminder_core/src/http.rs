//! Blocking reqwest transport.

use reminder_traits::Transport;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// The client is built on first POST, so runs that never send stay offline.
pub struct HttpTransport {
    timeout: Option<Duration>,
    client: OnceLock<reqwest::blocking::Client>,
}

impl HttpTransport {
    /// `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, reqwest::Error> {
        if let Some(c) = self.client.get() {
            return Ok(c);
        }
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let built = builder.build()?;
        Ok(self.client.get_or_init(|| built))
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self.client()?.post(url).json(body).send()?;
        let status = resp.status().as_u16();
        // Response body is informational only.
        let text = resp.text().unwrap_or_default();
        debug!(status, response = %text, "webhook responded");
        Ok(status)
    }
}
