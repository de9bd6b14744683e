/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the tracker locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// SQLite database URL (default: `sqlite://data.db`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CLIENT_ORIGIN`        | unset                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `DATABASE_URL`         | `sqlite://data.db`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// `CLIENT_ORIGIN` names the single browser origin allowed to call the
    /// API; when it is unset the comma-separated `CORS_ORIGINS` list is used.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = parse_var("PORT", "3000", "u16")?;

        let origins = std::env::var("CLIENT_ORIGIN")
            .or_else(|_| std::env::var("CORS_ORIGINS"))
            .unwrap_or_else(|_| "http://localhost:5173".into());
        let cors_origins = split_origins(&origins);
        for origin in &cors_origins {
            if origin.parse::<axum::http::HeaderValue>().is_err() {
                return Err(ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "origin",
                    value: origin.clone(),
                });
            }
        }

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data.db".into());

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30", "u64")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            database_url,
            request_timeout_secs,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.into());
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            split_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn invalid_number_reports_variable() {
        let err = parse_var::<u16>("KNITNOTE_TEST_UNSET_PORT", "not-a-port", "u16").unwrap_err();
        assert_eq!(
            err.to_string(),
            "KNITNOTE_TEST_UNSET_PORT must be a valid u16, got 'not-a-port'"
        );
    }
}
