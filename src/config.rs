use crate::names::{DEFAULT_DATABASE_PREFIX, DEFAULT_INSTANCE_PREFIX, MAX_PREFIX_LEN};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Default)]
pub struct NamingConfig {
    pub instance_prefix: Option<String>,
    pub database_prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub naming: Option<NamingConfig>,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading file: {0}")]
    ReadFile(std::io::Error),
    #[error("Error deserializing file: {}", .0.message())]
    Deserialize(toml::de::Error),
    #[error("Invalid prefix '{0}': must start with a letter, contain only legal name characters and leave room for the random suffix")]
    InvalidPrefix(String),
    #[error("Conflicting prefixes '{0}' and '{1}': instance and database names must stay distinguishable")]
    ConflictingPrefixes(String, String),
}

impl Config {
    pub fn load(path: String) -> Result<Self, LoadError> {
        let file = match std::fs::read_to_string(path) {
            Ok(f) => f,
            Err(e) => return Err(LoadError::ReadFile(e)),
        };
        let cfg = match toml::from_str::<Config>(&file) {
            Ok(f) => f,
            Err(e) => return Err(LoadError::Deserialize(e)),
        };

        cfg.validate()?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let Some(naming) = &self.naming else {
            return Ok(());
        };

        // instance names may carry hyphens, database names may not
        let instance_re = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();
        let database_re = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

        if let Some(prefix) = &naming.instance_prefix {
            if !instance_re.is_match(prefix) || prefix.len() > MAX_PREFIX_LEN {
                return Err(LoadError::InvalidPrefix(prefix.clone()));
            }
        }
        if let Some(prefix) = &naming.database_prefix {
            if !database_re.is_match(prefix) || prefix.len() > MAX_PREFIX_LEN {
                return Err(LoadError::InvalidPrefix(prefix.clone()));
            }
        }

        // one prefix shadowing the other makes instance and database
        // names indistinguishable, defaults included
        let instance = naming
            .instance_prefix
            .as_deref()
            .unwrap_or(DEFAULT_INSTANCE_PREFIX);
        let database = naming
            .database_prefix
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_PREFIX);
        if instance.starts_with(database) || database.starts_with(instance) {
            return Err(LoadError::ConflictingPrefixes(
                instance.to_owned(),
                database.to_owned(),
            ));
        }

        Ok(())
    }
}
