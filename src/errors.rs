use std::fmt;

#[derive(Debug)]
pub struct RemoteCounterError {
    message: String,
}

impl RemoteCounterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn status(endpoint: &str, status: reqwest::StatusCode) -> Self {
        Self::new(format!("counter service returned {status} for /{endpoint}"))
    }

    pub fn transport(endpoint: &str, err: reqwest::Error) -> Self {
        Self::new(format!("request to /{endpoint} failed: {err}"))
    }

    pub fn body(endpoint: &str, err: reqwest::Error) -> Self {
        Self::new(format!("malformed count payload from /{endpoint}: {err}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RemoteCounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RemoteCounterError {}
