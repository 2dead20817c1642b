use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const HOST_VAR: &str = "MERGINGTON_HOST";
pub const PORT_VAR: &str = "MERGINGTON_PORT";
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

const DEFAULT_PORT: u16 = 8000;
const DEV_PORTS: [u16; 5] = [3000, 5173, 8000, 8080, 8081];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': expected an IP address")]
    InvalidHost { var: &'static str, value: String },
    #[error("Invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Runtime settings of the backend, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(HOST_VAR) {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost {
                    var: HOST_VAR,
                    value,
                })?;
        }
        if let Some(value) = get(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?;
        }
        if let Some(value) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Origins allowed by CORS. Only local dev servers in debug builds.
    pub fn cors_origins(&self) -> Vec<String> {
        if cfg!(debug_assertions) {
            let mut allowed_origins = Vec::new();
            for port in DEV_PORTS {
                allowed_origins.push(format!("http://localhost:{port}"));
                allowed_origins.push(format!("http://127.0.0.1:{port}"));
            }
            allowed_origins
        } else {
            // Production origins - add your domains here
            vec![]
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
        assert!(config.static_dir.ends_with("static"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9090 "),
            (STATIC_DIR_VAR, "/srv/mergington"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.static_dir, PathBuf::from("/srv/mergington"));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[(PORT_VAR, "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_invalid_values() {
        let port = Config::from_lookup(lookup(&[(PORT_VAR, "eighty")]));
        assert!(matches!(port, Err(ConfigError::InvalidPort { .. })));

        let port = Config::from_lookup(lookup(&[(PORT_VAR, "70000")]));
        assert!(matches!(port, Err(ConfigError::InvalidPort { .. })));

        let host = Config::from_lookup(lookup(&[(HOST_VAR, "not-an-ip")]));
        assert!(matches!(host, Err(ConfigError::InvalidHost { .. })));
    }

    #[test]
    fn debug_builds_allow_local_dev_origins() {
        let origins = Config::default().cors_origins();
        if cfg!(debug_assertions) {
            assert!(origins.contains(&"http://localhost:5173".to_string()));
            assert!(origins.contains(&"http://127.0.0.1:8000".to_string()));
        } else {
            assert!(origins.is_empty());
        }
    }
}
