//! API credential resolution and storage.
//!
//! The credential for the Gemini API is resolved from a priority chain: an
//! explicitly provided key wins, then the `GEMINI_API_KEY` environment
//! variable, then a key the user previously saved to disk. When none of
//! those yield a key, resolution fails with an authentication error and the
//! caller is expected to prompt for configuration.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the stored-key file location.
pub const KEY_FILE_ENV: &str = "CITEBOT_KEY_FILE";

/// Returns the path of the stored-key file.
///
/// `CITEBOT_KEY_FILE` overrides the default of
/// `$HOME/.config/citebot/api-key`.
pub fn key_file_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(KEY_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = env::var("HOME")
        .map_err(|_| Error::authentication("cannot locate key file: HOME is not set"))?;
    Ok(PathBuf::from(home).join(".config").join("citebot").join("api-key"))
}

/// Reads the user-saved key from disk, if one exists.
///
/// A missing file is not an error; unreadable or empty files yield `None`.
pub fn load_stored_key() -> Option<String> {
    let path = key_file_path().ok()?;
    let key = fs::read_to_string(path).ok()?;
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// Saves a user-entered key to the stored-key file, creating parent
/// directories as needed.
pub fn store_key(key: &str) -> Result<()> {
    let path = key_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| Error::io("failed to create key file directory", err))?;
    }
    fs::write(&path, key.trim())
        .map_err(|err| Error::io("failed to write key file", err))
}

/// Removes the stored key, if any.
pub fn clear_stored_key() -> Result<()> {
    let path = key_file_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(Error::io("failed to remove key file", err)),
    }
}

/// Resolves the API key: explicit value, then environment, then stored key.
///
/// # Errors
///
/// Returns `Error::Authentication` when no source yields a key.
pub fn resolve(explicit: Option<String>) -> Result<String> {
    if let Some(key) = explicit {
        return Ok(key);
    }
    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }
    if let Some(key) = load_stored_key() {
        return Ok(key);
    }
    Err(Error::authentication(format!(
        "API key not provided, {API_KEY_ENV} not set, and no stored key found"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        let key = resolve(Some("explicit-key".to_string())).unwrap();
        assert_eq!(key, "explicit-key");
    }

    #[test]
    fn store_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api-key");
        // Route through the env override so load/store agree on the path.
        unsafe {
            env::set_var(KEY_FILE_ENV, &path);
        }
        store_key("  secret-key \n").unwrap();
        assert_eq!(load_stored_key(), Some("secret-key".to_string()));
        clear_stored_key().unwrap();
        assert_eq!(load_stored_key(), None);
        unsafe {
            env::remove_var(KEY_FILE_ENV);
        }
    }
}
