use async_trait::async_trait;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub url: String,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
}

#[derive(Clone)]
pub struct ApiContext {
    pub url: String,
    pub http: reqwest::Client,
}

impl ApiContext {
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

#[derive(Clone)]
pub struct Context {
    pub api: ApiContext,
}

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

impl Config {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            environment: AppEnvironment::Development,
            api: ApiConfig {
                url: url.into(),
                timeout: None,
            },
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.api.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Production deployments must name their backend; development falls
    /// back to a local server.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = AppEnvironment::from(
            lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        );
        let url = match (lookup("LIKES_API_URL"), &environment) {
            (Some(url), _) => url,
            (None, AppEnvironment::Production) => {
                return Err(ConfigError::Missing("LIKES_API_URL"))
            }
            (None, AppEnvironment::Development) => DEFAULT_API_URL.to_string(),
        };
        let timeout = match lookup("LIKES_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            environment,
            api: ApiConfig { url, timeout },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            name: "LIKES_REQUEST_TIMEOUT_SECS",
            value: raw.to_string(),
        })
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ConfigError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.api.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(
            "Using likes api at {} in {:?} (timeout: {:?})",
            self.api.url,
            self.environment,
            self.api.timeout
        );

        Ok(Context {
            api: ApiContext {
                url: self.api.url,
                http,
            },
        })
    }
}
