use crate::client::CounterClient;
use crate::config::Config;
use crate::controller::CounterKeys;

#[derive(Clone)]
pub struct AppState {
    pub client: CounterClient,
    pub keys: CounterKeys,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            client: CounterClient::new(config.api_base_url.clone()),
            keys: CounterKeys {
                access: config.access_key.clone(),
                like: config.like_key.clone(),
            },
        }
    }
}
