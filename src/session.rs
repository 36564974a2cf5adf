//! Saved session state and user input parsing.
//!
//! The browser side stores `SavedState` as JSON and replays resolution
//! against `cooldown` after a restore.

use crate::numeric;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    /// Last cooldown value entered by the user.
    pub cooldown: f64,
    /// Milliseconds since the Unix epoch at save time.
    #[serde(default)]
    pub saved_at: f64,
}

impl SavedState {
    pub fn new(cooldown: f64, saved_at: f64) -> Self {
        Self {
            cooldown: sanitize_cooldown(cooldown),
            saved_at,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored state, clamping a non-finite cooldown back to zero.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut state: SavedState = serde_json::from_str(json)?;
        state.cooldown = sanitize_cooldown(state.cooldown);
        Ok(state)
    }
}

fn sanitize_cooldown(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Read a cooldown typed by the user. Anything non-numeric counts as zero.
pub fn parse_cooldown_input(input: &str) -> f64 {
    numeric::leading_float(input).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cooldown_input() {
        assert_eq!(parse_cooldown_input("62.5"), 62.5);
        assert_eq!(parse_cooldown_input(" 40% "), 40.0);
        assert_eq!(parse_cooldown_input("abc"), 0.0);
        assert_eq!(parse_cooldown_input(""), 0.0);
    }

    #[test]
    fn test_saved_state_json() {
        let state = SavedState::new(55.5, 1_700_000_000_000.0);
        let json = state.to_json().unwrap();
        assert!(json.contains("\"savedAt\""));
        assert_eq!(SavedState::from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_saved_state_missing_timestamp() {
        let state = SavedState::from_json(r#"{"cooldown": 12}"#).unwrap();
        assert_eq!(state.cooldown, 12.0);
        assert_eq!(state.saved_at, 0.0);
    }

    #[test]
    fn test_saved_state_rejects_garbage() {
        assert!(SavedState::from_json("not json").is_err());
        assert!(SavedState::from_json(r#"{"savedAt": 1}"#).is_err());
    }
}
