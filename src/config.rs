//! Service Configuration
//!
//! Database settings come from the environment with development defaults;
//! the listen port comes from a `--port` command-line flag.

use sqlx::mysql::MySqlConnectOptions;

/// Both services listen on all interfaces on this port unless overridden.
pub const DEFAULT_PORT: u16 = 5000;

/// MySQL connection settings for the notification logger.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_USER`, `DB_PASS` and `DB_NAME`, falling back to
    /// local development defaults for any variable that is unset.
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", "localhost"),
            user: env_or("DB_USER", "root"),
            password: env_or("DB_PASS", "root_password"),
            database: env_or("DB_NAME", "notifyhub_db"),
        }
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an optional `--port <port>` flag from argv. Unknown arguments are
/// ignored so both binaries accept the same command line shape.
pub fn port_from_args(args: &[String]) -> anyhow::Result<u16> {
    let mut port = DEFAULT_PORT;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--port requires a value"))?;
                port = value.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_port_defaults_without_flag() {
        let port = port_from_args(&args(&["logger"])).unwrap();
        assert_eq!(port, DEFAULT_PORT);
    }

    #[test]
    fn test_port_flag_is_parsed() {
        let port = port_from_args(&args(&["registry", "--port", "8080"])).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_port_flag_without_value_fails() {
        assert!(port_from_args(&args(&["registry", "--port"])).is_err());
    }

    #[test]
    fn test_port_flag_with_garbage_fails() {
        assert!(port_from_args(&args(&["registry", "--port", "http"])).is_err());
    }

    #[test]
    fn test_env_or_falls_back_to_default() {
        let value = env_or("NOTIFYHUB_UNSET_FOR_TESTS", "fallback");
        assert_eq!(value, "fallback");
    }
}
