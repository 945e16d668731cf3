use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub inquiries: InquiryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            inquiries: InquiryConfig::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the inquiry submission pipeline.
///
/// The elapsed-time and message-length thresholds gate the spam filter; the
/// fake-success delay is how long a honeypot-tripping submission waits before
/// receiving its fabricated confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryConfig {
    pub min_elapsed_ms: u64,
    pub min_message_chars: usize,
    pub fake_success_delay_ms: u64,
    pub fallback_email: String,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            min_elapsed_ms: 3_000,
            min_message_chars: 10,
            fake_success_delay_ms: 1_500,
            fallback_email: "hello@studio.example".to_string(),
        }
    }
}

impl InquiryConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            min_elapsed_ms: parse_env("INQUIRY_MIN_ELAPSED_MS")?.unwrap_or(defaults.min_elapsed_ms),
            min_message_chars: parse_env("INQUIRY_MIN_MESSAGE_CHARS")?
                .unwrap_or(defaults.min_message_chars),
            fake_success_delay_ms: parse_env("INQUIRY_FAKE_SUCCESS_DELAY_MS")?
                .unwrap_or(defaults.fake_success_delay_ms),
            fallback_email: env::var("INQUIRY_FALLBACK_EMAIL")
                .unwrap_or(defaults.fallback_email),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
