use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.counterapi.dev/v1";

const DEFAULT_ACCESS_KEY: &str = "ut_mne2sniPiULSMSTCuuMfYnBObykW7BGgIs813L1I";
const DEFAULT_LIKE_KEY: &str = "ut_nrNhrSDG76KN3nmWb6I4eFmO8fFhi2YiVW81xQqG";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub access_key: String,
    pub like_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env_or("COUNTER_API_BASE_URL", DEFAULT_API_BASE_URL),
            access_key: env_or("ACCESS_COUNTER_KEY", DEFAULT_ACCESS_KEY),
            like_key: env_or("LIKE_COUNTER_KEY", DEFAULT_LIKE_KEY),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8080),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
