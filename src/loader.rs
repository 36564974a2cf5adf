//! Fetches the tier text and turns it into a `TierTable`.

use harvest_tiers::{parse_tier_table, TierTable};
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request for '{url}' failed: {reason}")]
    Request { url: String, reason: String },
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of '{url}': {reason}")]
    Body { url: String, reason: String },
}

fn describe(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch `url` as text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let request_failed = |reason: String| LoadError::Request {
        url: url.to_string(),
        reason,
    };
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| request_failed(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| request_failed(describe(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body_failed = |reason: String| LoadError::Body {
        url: url.to_string(),
        reason,
    };
    let promise = response.text().map_err(|e| body_failed(describe(&e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| body_failed(describe(&e)))?;
    text.as_string()
        .ok_or_else(|| body_failed("body is not a string".to_string()))
}

/// Fetch and parse the tier table. Any failure yields an empty table.
pub async fn load_tier_table(url: &str) -> TierTable {
    match fetch_text(url).await {
        Ok(text) => {
            info!("Fetched {} bytes of tier data from '{}'", text.len(), url);
            parse_tier_table(&text)
        }
        Err(e) => {
            warn!("Tier data unavailable: {}", e);
            TierTable::default()
        }
    }
}
