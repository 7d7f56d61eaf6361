use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Settings read from the process environment, after any `.env` file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationSourceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = non_blank("APP_PORT")
            .map(|raw| raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw)))
            .transpose()?
            .unwrap_or(3000);

        Ok(Self {
            server: ServerConfig {
                host: non_blank("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: non_blank("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            evaluation: EvaluationSourceConfig {
                input_path: non_blank("APP_EVALUATION_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("evaluation.json")),
            },
        })
    }
}

fn non_blank(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` is accepted as an alias for the IPv4 loopback.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Evaluator output read by `evaluate` when no path is passed.
#[derive(Debug, Clone)]
pub struct EvaluationSourceConfig {
    pub input_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("APP_HOST {host:?} is not an IP address")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
