use crate::domain::{AppError, Credentials};
use crate::ports::ConfigurationClient;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum FakeResponse {
    Body(String),
    Transport(String),
}

#[derive(Clone)]
pub struct FakeConfigurationClient {
    pub requests: Arc<Mutex<Vec<String>>>,
    response: FakeResponse,
}

impl FakeConfigurationClient {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: FakeResponse::Body(body.into()) }
    }

    pub fn failing_transport(message: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            response: FakeResponse::Transport(message.into()),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl ConfigurationClient for FakeConfigurationClient {
    fn get_configuration(
        &self,
        request_url: &str,
        _credentials: &Credentials,
    ) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request_url.to_string());
        match &self.response {
            FakeResponse::Body(body) => Ok(body.clone()),
            FakeResponse::Transport(message) => Err(AppError::Transport(message.clone())),
        }
    }
}
