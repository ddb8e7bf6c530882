//! Server configuration from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ROUTELAB_ADDR` | `127.0.0.1:8000` | listen address |
//! | `ROUTELAB_DATA_DIR` | `data` | directory holding `dados.csv` and `cidade.csv` |
//! | `ROUTELAB_STATIC_DIR` | `static` | frontend assets, `index.html` at the root |
//! | `ROUTELAB_ROUTES_URL` | unset | where to download `dados.csv` when it is missing |
//! | `ROUTELAB_CITIES_URL` | unset | where to download `cidade.csv` when it is missing |
//! | `ROUTELAB_CORS_ORIGINS` | `http://localhost:8000` | comma-separated origins, `*` for any |
//! | `ROUTELAB_ENCODING` | `latin1` | dataset encoding, `latin1` or `utf8` |
//!
//! Nothing is downloaded unless a URL is set: without `ROUTELAB_ROUTES_URL`,
//! `dados.csv` must already be in the data directory or the load fails.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ingest::TextEncoding;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Default allowed CORS origin (the local frontend).
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8000";

const ROUTES_FILE: &str = "dados.csv";
const CITIES_FILE: &str = "cidade.csv";

/// Errors in environment configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address does not parse
    #[error("invalid ROUTELAB_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },

    /// Unknown text encoding name
    #[error("invalid ROUTELAB_ENCODING {value:?}: expected latin1 or utf8")]
    InvalidEncoding { value: String },
}

/// Configuration for the HTTP server and data loading.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory holding the dataset files.
    pub data_dir: PathBuf,

    /// Directory of static frontend assets.
    pub static_dir: PathBuf,

    /// Where to download the route dataset from when it is missing.
    pub routes_url: Option<String>,

    /// Where to download the city table from when it is missing.
    pub cities_url: Option<String>,

    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,

    /// Encoding of the dataset files.
    pub encoding: TextEncoding,
}

impl ServerConfig {
    /// Read configuration from `ROUTELAB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_value = var("ROUTELAB_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                value: addr_value.clone(),
            })?;

        let encoding = match var("ROUTELAB_ENCODING") {
            Some(value) => {
                TextEncoding::parse(&value).ok_or(ConfigError::InvalidEncoding { value })?
            }
            None => TextEncoding::default(),
        };

        let cors_origins = var("ROUTELAB_CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Ok(Self {
            addr,
            data_dir: var("ROUTELAB_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            static_dir: var("ROUTELAB_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            routes_url: var("ROUTELAB_ROUTES_URL"),
            cities_url: var("ROUTELAB_CITIES_URL"),
            cors_origins,
            encoding,
        })
    }

    /// Path of the route dataset.
    pub fn routes_path(&self) -> PathBuf {
        self.data_dir.join(ROUTES_FILE)
    }

    /// Path of the city coordinate table.
    pub fn cities_path(&self) -> PathBuf {
        self.data_dir.join(CITIES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();

        assert_eq!(c.addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(c.data_dir, PathBuf::from("data"));
        assert_eq!(c.static_dir, PathBuf::from("static"));
        assert_eq!(c.routes_url, None);
        assert_eq!(c.cities_url, None);
        assert_eq!(c.cors_origins, vec!["http://localhost:8000"]);
        assert_eq!(c.encoding, TextEncoding::Latin1);
        assert_eq!(c.routes_path(), PathBuf::from("data/dados.csv"));
        assert_eq!(c.cities_path(), PathBuf::from("data/cidade.csv"));
    }

    #[test]
    fn overrides() {
        let c = config(&[
            ("ROUTELAB_ADDR", "0.0.0.0:9000"),
            ("ROUTELAB_DATA_DIR", "/srv/routelab"),
            ("ROUTELAB_ROUTES_URL", "https://example.com/dados.csv"),
            ("ROUTELAB_CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("ROUTELAB_ENCODING", "utf-8"),
        ])
        .unwrap();

        assert_eq!(c.addr.port(), 9000);
        assert_eq!(c.routes_path(), PathBuf::from("/srv/routelab/dados.csv"));
        assert_eq!(c.routes_url.as_deref(), Some("https://example.com/dados.csv"));
        assert_eq!(c.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(c.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let c = config(&[("ROUTELAB_ROUTES_URL", "  "), ("ROUTELAB_ADDR", "")]).unwrap();
        assert_eq!(c.routes_url, None);
        assert_eq!(c.addr.port(), 8000);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            config(&[("ROUTELAB_ADDR", "localhost")]).unwrap_err(),
            ConfigError::InvalidAddr {
                value: "localhost".to_string()
            }
        );
        assert!(matches!(
            config(&[("ROUTELAB_ENCODING", "ebcdic")]).unwrap_err(),
            ConfigError::InvalidEncoding { .. }
        ));
    }
}
