use std::env;
use std::net::SocketAddr;

use crate::error::{invalid_input_error, Error};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads the process environment. Call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let database_url = lookup("DATABASE_URL")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().map_err(|_| invalid_input_error())?,
            Err(env::VarError::NotPresent) => DEFAULT_MAX_CONNECTIONS,
            Err(err) => return Err(err.into()),
        };

        let bind_address = match lookup("BIND_ADDRESS") {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => DEFAULT_BIND_ADDRESS.into(),
            Err(err) => return Err(err.into()),
        }
        .parse()
        .map_err(|_| invalid_input_error())?;

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn applies_defaults() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgresql://localhost/chauffeur")]))
                .unwrap();

        assert_eq!(config.database_url, "postgresql://localhost/chauffeur");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgresql://db/chauffeur"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("BIND_ADDRESS", "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_address.port(), 8080);
    }

    #[test]
    fn requires_database_url() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.code, 1);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgresql://db/chauffeur"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, 101);

        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgresql://db/chauffeur"),
            ("BIND_ADDRESS", "localhost"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, 101);
    }
}
