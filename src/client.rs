use crate::errors::RemoteCounterError;
use crate::models::CountPayload;
use std::future::Future;
use tracing::debug;

pub trait CounterApi {
    fn hit(&self, key: &str) -> impl Future<Output = Result<u64, RemoteCounterError>> + Send;
    fn get(&self, key: &str) -> impl Future<Output = Result<u64, RemoteCounterError>> + Send;
}

#[derive(Debug, Clone)]
pub struct CounterClient {
    http: reqwest::Client,
    base_url: String,
}

impl CounterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn call(&self, endpoint: &str, key: &str) -> Result<u64, RemoteCounterError> {
        let url = format!("{}/{endpoint}", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await
            .map_err(|err| RemoteCounterError::transport(endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteCounterError::status(endpoint, status));
        }

        let payload: CountPayload = response
            .json()
            .await
            .map_err(|err| RemoteCounterError::body(endpoint, err))?;
        debug!(endpoint, count = payload.count, "counter service responded");
        Ok(payload.count)
    }
}

impl CounterApi for CounterClient {
    async fn hit(&self, key: &str) -> Result<u64, RemoteCounterError> {
        self.call("hit", key).await
    }

    async fn get(&self, key: &str) -> Result<u64, RemoteCounterError> {
        self.call("get", key).await
    }
}
