use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

const USERNAME_PREFIX: &str = "usr";
// identifier limit shared by the common managed relational engines
const MAX_USERNAME_LEN: usize = 63;
const TOKEN_HEAD_LEN: usize = 10;
const TOKEN_HASH_BYTES: usize = 4;
const PASSWORD_BYTES: usize = 24;

#[derive(Debug, Error)]
pub enum UsernameError {
    #[error("instance ID and binding ID are both empty")]
    MissingIdentifiers,
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to read from the system randomness source: {0}")]
    RandomnessSource(rand::rand_core::OsError),
}

/// Reduces one caller-supplied identifier to a fixed-budget token.
///
/// Identifiers that are short and already clean pass through lowercased.
/// Anything longer than the head budget, or carrying characters illegal in
/// SQL usernames, keeps a readable head plus a short hash of the original
/// so two long identifiers that share a head still produce different
/// tokens.
fn identifier_token(id: &str) -> String {
    let sanitized: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if sanitized.chars().count() == id.chars().count() && sanitized.len() <= TOKEN_HEAD_LEN {
        return sanitized;
    }

    let digest = Sha256::digest(id.as_bytes());
    let hash: String = digest[..TOKEN_HASH_BYTES]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    let head: String = sanitized.chars().take(TOKEN_HEAD_LEN).collect();

    format!("{head}{hash}")
}

pub fn derive_username(instance_id: &str, binding_id: &str) -> Result<String, UsernameError> {
    if instance_id.is_empty() && binding_id.is_empty() {
        return Err(UsernameError::MissingIdentifiers);
    }

    let mut username = format!(
        "{}_{}_{}",
        USERNAME_PREFIX,
        identifier_token(instance_id),
        identifier_token(binding_id)
    );
    username.truncate(MAX_USERNAME_LEN);

    Ok(username)
}

pub fn random_password() -> Result<String, PasswordError> {
    let mut bytes = [0u8; PASSWORD_BYTES];

    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => Ok(URL_SAFE_NO_PAD.encode(bytes)),
        Err(e) => Err(PasswordError::RandomnessSource(e)),
    }
}
