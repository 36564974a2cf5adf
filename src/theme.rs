//! Light/dark theme applied as a `data-theme` attribute on `<html>`.

use crate::config::THEME_STORAGE_KEY;
use crate::persistence::{read_string, write_string};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Stored theme, or light when nothing usable was stored.
pub fn load_theme() -> Theme {
    match read_string(THEME_STORAGE_KEY) {
        Ok(stored) => stored
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or(Theme::Light),
        Err(e) => {
            warn!("Could not read theme: {}", e);
            Theme::Light
        }
    }
}

/// Apply `theme` to the document and remember it.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = gloo_utils::document().document_element() {
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            warn!("Could not set data-theme attribute");
        }
    }
    if let Err(e) = write_string(THEME_STORAGE_KEY, theme.as_str()) {
        warn!("Could not store theme: {}", e);
    }
}
