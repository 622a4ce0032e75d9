use std::str::FromStr;

use anyhow::Context;
use dotenv::{dotenv, var};

use crate::id_pool::IdPoolError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdPoolSettings {
    /// Number of ids generated each time the pool runs dry.
    pub batch_size: usize,
    /// Inclusive lower bound of generated ids.
    pub min_id: i64,
    /// Exclusive upper bound of generated ids.
    pub max_id: i64,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub log_level: String,
    pub id_pool: IdPoolSettings,
}

impl Default for IdPoolSettings {
    fn default() -> Self {
        Self {
            batch_size: 25,
            min_id: 100_000,
            max_id: 999_999,
            seed: None,
        }
    }
}

impl IdPoolSettings {
    pub fn validate(&self) -> Result<(), IdPoolError> {
        if self.batch_size == 0 {
            return Err(IdPoolError::InvalidSettings(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if self.min_id <= 0 {
            return Err(IdPoolError::InvalidSettings(format!(
                "minimum id {} is not positive",
                self.min_id
            )));
        }
        if self.min_id >= self.max_id {
            return Err(IdPoolError::InvalidSettings(format!(
                "id range {}..{} is empty",
                self.min_id, self.max_id
            )));
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    dotenv().ok();

    let defaults = IdPoolSettings::default();
    let id_pool = IdPoolSettings {
        batch_size: parse_var("ID_POOL_BATCH_SIZE")?.unwrap_or(defaults.batch_size),
        min_id: parse_var("ID_POOL_MIN_ID")?.unwrap_or(defaults.min_id),
        max_id: parse_var("ID_POOL_MAX_ID")?.unwrap_or(defaults.max_id),
        seed: parse_var("ID_POOL_SEED")?,
    };
    id_pool
        .validate()
        .context("Invalid id pool configuration.")?;

    Ok(Settings {
        log_level: var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        id_pool,
    })
}

fn parse_var<T>(key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} cannot be parsed: {:?}", key, value)),
        Err(_) => Ok(None),
    }
}
