//! Test and helper mocks for reminder_core

use reminder_traits::Transport;
use std::cell::{Cell, RefCell};

/// Records every POST and answers with a fixed status code.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    status: u16,
    requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl RecordingTransport {
    pub fn ok() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_url(&self) -> Option<String> {
        self.requests.borrow().last().map(|(u, _)| u.clone())
    }

    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.requests.borrow().last().map(|(_, b)| b.clone())
    }
}

impl Transport for RecordingTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        Ok(self.status)
    }
}

/// Fails every POST as a connection error would.
#[derive(Debug, Default)]
pub struct FailingTransport {
    attempts: Cell<usize>,
}

impl FailingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.attempts.get()
    }
}

impl Transport for FailingTransport {
    fn post_json(
        &self,
        _url: &str,
        _body: &serde_json::Value,
    ) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        self.attempts.set(self.attempts.get() + 1);
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
