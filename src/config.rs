//! Database settings read from the environment, optionally seeded from a `.env`
//! file. Nothing here opens a connection.

use std::{collections::HashMap, env, fmt, path::Path};

use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// Key holding the database host
pub const DB_HOST: &str = "DB_HOST";
/// Key holding the database user
pub const DB_USER: &str = "DB_USER";
/// Key holding the database password
pub const DB_PASSWORD: &str = "DB_PASSWORD";
/// Key holding the database name
pub const DB_NAME: &str = "DB_NAME";

/// Shown in place of a value that was never set
const UNSET: &str = "<unset>";

/// The four named database values
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host
    pub host: Option<String>,
    /// Database user
    pub user: Option<String>,
    /// Database password
    pub password: Option<String>,
    /// Database name
    pub name: Option<String>,
}

// Manual implementation of Debug so the password never reaches a log line
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build a config by asking `lookup` for each key
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup(DB_HOST),
            user: lookup(DB_USER),
            password: lookup(DB_PASSWORD),
            name: lookup(DB_NAME),
        }
    }

    /// Load `.env` from the working directory (or a parent) into the process
    /// environment if there is one, then read the four keys
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if a `.env` file exists but cannot be read
    /// or parsed. A missing file is fine.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded env file"),
            Err(err) if err.not_found() => debug!("No .env file, using process environment"),
            Err(err) => return Err(err.into()),
        }
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Read the keys from `path`, falling back to the process environment for
    /// keys the file does not mention. The process environment is not modified.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the file cannot be opened or parsed.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        for entry in dotenvy::from_path_iter(path)? {
            let (key, value) = entry?;
            values.insert(key, value);
        }
        debug!(path = %path.display(), keys = values.len(), "Parsed env file");

        Ok(Self::from_lookup(|key| values.get(key).cloned().or_else(|| env::var(key).ok())))
    }

    /// Pretend to connect. Succeeds when both user and password are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredentials` naming whichever of
    /// `DB_USER`/`DB_PASSWORD` is absent or empty.
    pub fn connect(&self) -> Result<ConnectionSummary, ConfigError> {
        let mut missing = Vec::new();
        if !is_set(self.user.as_ref()) {
            missing.push(DB_USER);
        }
        if !is_set(self.password.as_ref()) {
            missing.push(DB_PASSWORD);
        }

        if !missing.is_empty() {
            let err = ConfigError::MissingCredentials { missing };
            warn!("{err}");
            return Err(err);
        }

        info!(config = ?self, "Connection successful (pretend)");
        Ok(self.summary())
    }

    /// The values a connection would use, whether or not they are complete
    #[must_use]
    pub fn summary(&self) -> ConnectionSummary {
        ConnectionSummary {
            host: self.host.clone(),
            database: self.name.clone(),
            user: self.user.clone(),
        }
    }
}

/// Whether `value` holds something other than an empty string
fn is_set(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Host, database and user of a (pretend) connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSummary {
    /// Host connected to
    pub host: Option<String>,
    /// Database connected to
    pub database: Option<String>,
    /// User connected as
    pub user: Option<String>,
}

impl fmt::Display for ConnectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Host: {}", self.host.as_deref().unwrap_or(UNSET))?;
        writeln!(f, "Database: {}", self.database.as_deref().unwrap_or(UNSET))?;
        write!(f, "User: {}", self.user.as_deref().unwrap_or(UNSET))
    }
}
