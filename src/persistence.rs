//! localStorage persistence for the session and small string settings.

use harvest_tiers::session::SavedState;
use log::{debug, info, warn};
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage access for '{0}' failed")]
    Access(String),
    #[error("stored value for '{key}' is invalid: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

pub fn read_string(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Access(key.to_string()))
}

pub fn write_string(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Access(key.to_string()))
}

pub fn load_session(key: &str) -> Result<Option<SavedState>, StorageError> {
    match read_string(key)? {
        Some(json) => SavedState::from_json(&json)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn save_session(key: &str, cooldown: f64) -> Result<(), StorageError> {
    let state = SavedState::new(cooldown, js_sys::Date::now());
    let json = state.to_json().map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    write_string(key, &json)?;
    debug!("Saved session: {}", json);
    Ok(())
}

/// Restore the saved cooldown, falling back to `default` on any failure.
pub fn restore_cooldown(key: &str, default: f64) -> f64 {
    match load_session(key) {
        Ok(Some(state)) => {
            info!("Restored cooldown {} from previous session", state.cooldown);
            state.cooldown
        }
        Ok(None) => default,
        Err(e) => {
            warn!("Could not restore session: {}", e);
            default
        }
    }
}
