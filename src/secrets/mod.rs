//! Credential supply for the Trading 212 API.
//!
//! Credentials are resolved once at startup and held read-only for the
//! whole run. Environment variables win; the OS keyring is the fallback so
//! the key pair does not have to live in shell profiles.

use keyring::Entry;
use log::debug;

use crate::constants::SECRET_SERVICE;
use crate::errors::{Error, Result};

const API_KEY_ENV: &str = "T212_API_KEY";
const API_SECRET_ENV: &str = "T212_API_SECRET";

const API_KEY_USER: &str = "api-key";
const API_SECRET_USER: &str = "api-secret";

/// The two opaque strings the API authenticates with.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

/// Provides simple API key storage using the operating system keyring.
pub struct SecretManager;

impl SecretManager {
    /// Store a secret under the given user name.
    pub fn set_secret(user: &str, value: &str) -> Result<()> {
        let entry = Entry::new(SECRET_SERVICE, user).map_err(Error::from)?;
        entry.set_password(value).map_err(Error::from)
    }

    /// Retrieve a secret for the given user name.
    pub fn get_secret(user: &str) -> Result<Option<String>> {
        let entry = Entry::new(SECRET_SERVICE, user).map_err(Error::from)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(Error::from(e)),
        }
    }

    /// Delete a secret for the given user name.
    pub fn delete_secret(user: &str) -> Result<()> {
        let entry = Entry::new(SECRET_SERVICE, user).map_err(Error::from)?;
        match entry.delete_password() {
            Ok(_) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(Error::from(e)),
        }
    }
}

/// Resolve the API key pair, environment first, keyring second.
///
/// Absence of either value is a fatal precondition failure: the run must
/// not issue a single network call without a complete key pair.
pub fn load_credentials() -> Result<Credentials> {
    let api_key = resolve(API_KEY_ENV, API_KEY_USER)?;
    let api_secret = resolve(API_SECRET_ENV, API_SECRET_USER)?;
    Ok(Credentials {
        api_key,
        api_secret,
    })
}

fn resolve(env_var: &str, keyring_user: &str) -> Result<String> {
    if let Ok(value) = std::env::var(env_var) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            debug!("using {} from environment", env_var);
            return Ok(trimmed.to_string());
        }
    }

    match SecretManager::get_secret(keyring_user)? {
        Some(value) if !value.trim().is_empty() => {
            debug!("using {} from keyring", keyring_user);
            Ok(value.trim().to_string())
        }
        _ => Err(Error::MissingCredentials(format!(
            "set {} or store the '{}' entry in the keyring",
            env_var, keyring_user
        ))),
    }
}
