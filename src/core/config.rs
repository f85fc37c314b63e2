use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::PaymentPlan,
    persistence::{
        data_file_exists,
        load_json_or_default,
        save_json,
    },
};

const CONFIG_FILE: &str = "config.json";
pub const SERVER_URL_ENV: &str = "FLIPWISE_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub payment_plan: PaymentPlan,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 120,
            payment_plan: PaymentPlan::default(),
        }
    }
}

impl AppConfig {
    /// Reads `config.json` from the data dir, writing the defaults out on
    /// first run, then applies `FLIPWISE_SERVER_URL`.
    pub fn load() -> Self {
        let first_run = !data_file_exists(CONFIG_FILE);
        let mut config = load_json_or_default::<AppConfig>(CONFIG_FILE);

        if first_run {
            if let Err(e) = save_json(&config, CONFIG_FILE) {
                log::warn!("Failed to write default config: {}", e);
            }
        }

        config.apply_env_override(std::env::var(SERVER_URL_ENV).ok());
        config
    }

    pub fn apply_env_override(&mut self, server_url: Option<String>) {
        if let Some(url) = server_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            log::info!("Using server URL from {}: {}", SERVER_URL_ENV, url);
            self.server_url = url;
        }
    }
}
