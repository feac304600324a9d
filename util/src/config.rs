//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables (and a `.env`
//! file when present). Free accessor functions at the bottom of this module are
//! what the rest of the workspace calls.

use std::env;
use std::sync::{OnceLock, RwLock};
use url::Url;

pub const DEFAULT_PORT: u16 = 5000;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub db_user: String,
    pub db_pass: String,
    pub host: String,
    pub port: u16,
}

static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, so this never panics.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "assignment-arena".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/assignment_arena.db".into()),
            db_user: env::var("DB_User").unwrap_or_default(),
            db_pass: env::var("DB_Pass").unwrap_or_default(),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_port(env::var("PORT").ok().as_deref()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the configuration from the environment, dropping any overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_db_credentials(user: impl Into<String>, pass: impl Into<String>) {
        let (user, pass) = (user.into(), pass.into());
        AppConfig::set_field(|cfg| {
            cfg.db_user = user;
            cfg.db_pass = pass;
        });
    }

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }
}

/// Parses `PORT`, falling back to [`DEFAULT_PORT`] when unset or invalid.
pub fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

/// Store credentials as `(DB_User, DB_Pass)`.
pub fn db_credentials() -> (String, String) {
    let cfg = AppConfig::global();
    (cfg.db_user.clone(), cfg.db_pass.clone())
}

/// Resolves `DATABASE_PATH` into a connection URL.
///
/// A bare path becomes a read-write-create SQLite URL. A `postgres://` DSN that
/// carries no username gets `DB_User` / `DB_Pass` injected. Anything starting
/// with `sqlite:` is passed through untouched.
pub fn database_url() -> String {
    let path_or_url = database_path();
    let (user, pass) = db_credentials();
    resolve_database_url(&path_or_url, &user, &pass)
}

/// True when `DATABASE_PATH` names a local SQLite file rather than a DSN.
pub fn is_file_database(path_or_url: &str) -> bool {
    !(path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("postgresql://"))
}

pub fn resolve_database_url(path_or_url: &str, user: &str, pass: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        return path_or_url.to_string();
    }
    if is_file_database(path_or_url) {
        return format!("sqlite://{path_or_url}?mode=rwc");
    }

    let Ok(mut url) = Url::parse(path_or_url) else {
        return path_or_url.to_string();
    };
    if url.username().is_empty() && !user.is_empty() {
        // Both setters only fail for cannot-be-a-base URLs, which a postgres DSN never is.
        let _ = url.set_username(user);
        if !pass.is_empty() {
            let _ = url.set_password(Some(pass));
        }
    }
    url.to_string()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}
