use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    pub auth: AuthEndpoints,
    pub log_level: String,
    /// Device-storage location for the persisted session.
    pub session_file: PathBuf,
    pub poll_interval: Duration,
}

/// Auth endpoint paths, individually overridable via environment variables.
#[derive(Debug, Clone)]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub logout: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_string(),
            register: "/auth/register".to_string(),
            logout: "/auth/logout".to_string(),
        }
    }
}

const DEFAULT_BASE_URL: &str = "http://localhost:5134/api";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional: `API_BASE_URL`, `AUTH_LOGIN_ENDPOINT`,
    /// `AUTH_REGISTER_ENDPOINT`, `AUTH_LOGOUT_ENDPOINT`, `LOG_LEVEL`,
    /// `SESSION_FILE`, `POLL_INTERVAL_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `POLL_INTERVAL_SECS` is not a positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let defaults = AuthEndpoints::default();
        let auth = AuthEndpoints {
            login: std::env::var("AUTH_LOGIN_ENDPOINT").unwrap_or(defaults.login),
            register: std::env::var("AUTH_REGISTER_ENDPOINT").unwrap_or(defaults.register),
            logout: std::env::var("AUTH_LOGOUT_ENDPOINT").unwrap_or(defaults.logout),
        };

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let session_file = std::env::var("SESSION_FILE").map_or_else(
            |_| Self::default_session_file(),
            PathBuf::from,
        );

        let poll_secs = std::env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("POLL_INTERVAL_SECS must be a positive integer"))?;
        if poll_secs == 0 {
            return Err(anyhow::anyhow!("POLL_INTERVAL_SECS must be at least 1"));
        }

        Ok(Self {
            base_url,
            auth,
            log_level,
            session_file,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }

    /// Compose an absolute URL for a relative API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn default_session_file() -> PathBuf {
        std::env::var("HOME").map_or_else(
            |_| PathBuf::from(".reelparty-session.json"),
            |home| PathBuf::from(home).join(".reelparty").join("session.json"),
        )
    }
}
