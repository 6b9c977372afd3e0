use crate::credentials::{self, PasswordError, UsernameError};
use rand::prelude::*;

pub const DEFAULT_INSTANCE_PREFIX: &str = "inst-";
pub const DEFAULT_DATABASE_PREFIX: &str = "db_";

// length ceiling common to cloud naming schemes
pub const MAX_NAME_LEN: usize = 63;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
// 25 base-36 characters carry just over 128 bits of entropy, and the
// longest default name stays well under the 63-character ceiling
const SUFFIX_LEN: usize = 25;

/// Longest prefix that still leaves room for the random suffix under
/// [`MAX_NAME_LEN`].
pub const MAX_PREFIX_LEN: usize = MAX_NAME_LEN - SUFFIX_LEN;

fn random_suffix() -> String {
    let mut rng = rand::rng();

    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

/// Base capability set: anything that can name a resource instance.
pub trait NameGenerator {
    /// Returns a fresh instance name. Never empty, always starts with a
    /// letter, practically unique across calls.
    fn instance_name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct BasicNameGenerator {
    prefix: String,
}

impl BasicNameGenerator {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_INSTANCE_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for BasicNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameGenerator for BasicNameGenerator {
    fn instance_name(&self) -> String {
        format!("{}{}", self.prefix, random_suffix())
    }
}

/// Extends [`BasicNameGenerator`] with database names and credentials for
/// managed relational database provisioning.
#[derive(Debug, Clone)]
pub struct SqlNameGenerator {
    base: BasicNameGenerator,
    database_prefix: String,
}

impl SqlNameGenerator {
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_INSTANCE_PREFIX, DEFAULT_DATABASE_PREFIX)
    }

    pub fn with_prefixes(
        instance_prefix: impl Into<String>,
        database_prefix: impl Into<String>,
    ) -> Self {
        Self {
            base: BasicNameGenerator::with_prefix(instance_prefix),
            database_prefix: database_prefix.into(),
        }
    }

    /// Returns a fresh database name. Same guarantees as
    /// [`NameGenerator::instance_name`], with a distinct prefix restricted
    /// to characters legal in SQL database names.
    pub fn database_name(&self) -> String {
        format!("{}{}", self.database_prefix, random_suffix())
    }

    /// Derives a username for one (instance, binding) pair.
    ///
    /// Fails with [`UsernameError::MissingIdentifiers`] when both IDs are
    /// empty; a single empty identifier is accepted.
    pub fn generate_username(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<String, UsernameError> {
        credentials::derive_username(instance_id, binding_id)
    }

    /// Returns a fresh random password from the OS cryptographic RNG.
    pub fn generate_password(&self) -> Result<String, PasswordError> {
        credentials::random_password()
    }
}

impl Default for SqlNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameGenerator for SqlNameGenerator {
    fn instance_name(&self) -> String {
        self.base.instance_name()
    }
}
