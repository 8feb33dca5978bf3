use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub completion_url: String,
    pub completion_key: String,
    pub model: String,
    pub referer: String,
    pub app_title: String,
    pub mail_url: String,
    pub mail_key: String,
    pub contact_recipient: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "5000"),
            completion_url: try_load("OPENROUTER_URL", "https://openrouter.ai/api/v1"),
            completion_key: read_secret("OPENROUTER_API_KEY"),
            model: try_load("OPENROUTER_MODEL", "minimax/minimax-m2:free"),
            referer: try_load("APP_REFERER", "http://localhost:3000"),
            app_title: try_load("APP_TITLE", "Simple Writing Dev"),
            mail_url: try_load("RESEND_URL", "https://api.resend.com"),
            mail_key: read_secret("RESEND_API_KEY"),
            contact_recipient: read_secret("CONTACT_TO_EMAIL"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

// Docker-style file secrets first, plain env second. Local runs only have
// the env form.
fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    if let Ok(s) = read_to_string(&path) {
        return s.trim().to_string();
    }

    env::var(secret_name)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file or environment: {e}");
        })
        .expect("Secrets misconfigured!")
}
