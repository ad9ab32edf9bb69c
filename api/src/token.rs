//! Encrypted session-token storage.
//!
//! The one piece of durable client state: the bearer token handed out at
//! sign-in. Stored AES-256-GCM encrypted in the platform config directory,
//! with the key derived from a machine identifier, so the file is useless
//! when copied to another device. Layout on disk: `nonce || ciphertext`.

use std::fs;
use std::path::PathBuf;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::ApiError;

const NONCE_SIZE: usize = 12;
const TOKEN_FILE: &str = "token.enc";

/// Where the encrypted token lives. `KICKZONE_TOKEN_PATH` overrides the
/// default location so tests can point at a scratch directory.
fn token_path() -> Result<PathBuf, ApiError> {
    if let Ok(path) = std::env::var("KICKZONE_TOKEN_PATH") {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir()
        .ok_or_else(|| ApiError::Token("no config directory available".to_string()))?
        .join("kickzone");
    Ok(dir.join(TOKEN_FILE))
}

/// Machine identifier used for key derivation.
fn machine_id() -> String {
    #[cfg(target_os = "linux")]
    {
        if let Ok(id) = fs::read_to_string("/etc/machine-id") {
            return id.trim().to_string();
        }
        if let Ok(id) = fs::read_to_string("/var/lib/dbus/machine-id") {
            return id.trim().to_string();
        }
    }
    // Other platforms fall back to a per-user constant; the file still only
    // readable through this app's config directory permissions.
    std::env::var("USER").unwrap_or_else(|_| "kickzone-device".to_string())
}

fn derive_key() -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"kickzone-token-v1");
    hasher.update(machine_id().as_bytes());
    hasher.finalize().into()
}

/// Encrypt and persist the session token.
pub fn save(token: &str) -> Result<(), ApiError> {
    let path = token_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ApiError::Token(e.to_string()))?;
    }

    let cipher = Aes256Gcm::new(&derive_key().into());
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, token.as_bytes())
        .map_err(|e| ApiError::Token(e.to_string()))?;

    let mut contents = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    contents.extend_from_slice(&nonce_bytes);
    contents.extend_from_slice(&ciphertext);
    fs::write(&path, contents).map_err(|e| ApiError::Token(e.to_string()))
}

/// Read and decrypt the stored token. Any failure (missing file, key change,
/// corruption) is logged and treated as "not signed in".
pub fn load() -> Option<String> {
    let path = token_path().ok()?;
    let contents = fs::read(&path).ok()?;
    if contents.len() <= NONCE_SIZE {
        tracing::warn!("token file too short, ignoring");
        return None;
    }

    let (nonce_bytes, ciphertext) = contents.split_at(NONCE_SIZE);
    let cipher = Aes256Gcm::new(&derive_key().into());
    match cipher.decrypt(Nonce::from_slice(nonce_bytes), ciphertext) {
        Ok(plain) => String::from_utf8(plain).ok(),
        Err(_) => {
            tracing::warn!("token file could not be decrypted, ignoring");
            None
        }
    }
}

/// Remove the stored token (sign-out).
pub fn clear() -> Result<(), ApiError> {
    let path = token_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ApiError::Token(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.enc");
        std::env::set_var("KICKZONE_TOKEN_PATH", &path);

        save("session-token-123").unwrap();
        assert_eq!(load().as_deref(), Some("session-token-123"));

        // Ciphertext must not contain the plaintext token.
        let raw = fs::read(&path).unwrap();
        assert!(!raw
            .windows("session-token-123".len())
            .any(|w| w == b"session-token-123"));

        clear().unwrap();
        assert_eq!(load(), None);
        // Clearing twice is fine.
        clear().unwrap();

        std::env::remove_var("KICKZONE_TOKEN_PATH");
    }
}
