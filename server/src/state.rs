use std::{sync::Arc, time::Duration};

use reqwest::Client;

use super::config::Config;

/// Bound on every upstream call. A completion can take tens of seconds on a
/// long input; past a minute the request is dead.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

pub struct State {
    pub config: Config,
    pub http: Client,
}

impl State {
    pub fn new() -> Arc<Self> {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let http = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("HTTP client misconfigured!");

        Arc::new(Self { config, http })
    }
}
