use std::path::PathBuf;

/// Descriptive metadata for the service. `GET /` reports the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    /// Static service version (the crate version by default).
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: "StoRe API".into(),
            description: "Storage Reloaded Backend".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded once at startup and never mutated.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8081`).
    pub port: u16,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// When set, the API moves under `/api` and other paths serve [`Self::static_dir`].
    pub static_serving: bool,
    pub static_dir: PathBuf,
    pub index_file: String,
    pub service: ServiceInfo,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8081,
            cors_origins: vec!["*".into()],
            request_timeout_secs: 30,
            static_serving: false,
            static_dir: PathBuf::from("./static"),
            index_file: "index.html".into(),
            service: ServiceInfo::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `8081`        |
    /// | `CORS_ORIGINS`         | `*`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `STATIC_SERVING`       | `false`       |
    /// | `STATIC_DIR`           | `./static`    |
    /// | `INDEX_FILE`           | `index.html`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", "a valid u16", &raw)?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_var("REQUEST_TIMEOUT_SECS", "a valid u64", &raw)?,
            None => defaults.request_timeout_secs,
        };

        let static_serving = match lookup("STATIC_SERVING") {
            Some(raw) => parse_bool("STATIC_SERVING", &raw)?,
            None => defaults.static_serving,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let index_file = lookup("INDEX_FILE").unwrap_or(defaults.index_file);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_serving,
            static_dir,
            index_file,
            service: defaults.service,
        })
    }

    /// Whether CORS is configured to accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "a boolean",
            value: raw.to_string(),
        }),
    }
}
