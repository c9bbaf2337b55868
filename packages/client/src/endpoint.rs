//! Endpoint derivation from the configured server address.

use reqwest::Url;

use crate::error::ClientError;

/// WebSocket path served by the chat backend
pub const WEBSOCKET_PATH: &str = "/ws";

/// Waitlist REST path
pub const WAITLIST_PATH: &str = "/api/waitlist";

fn parse_base(base: &str) -> Result<Url, ClientError> {
    let url = Url::parse(base.trim()).map_err(|_| ClientError::InvalidServerUrl(base.to_string()))?;
    if url.host_str().is_none() {
        return Err(ClientError::InvalidServerUrl(base.to_string()));
    }
    Ok(url)
}

fn with_path(mut url: Url, scheme: &str, path: &str, base: &str) -> Result<Url, ClientError> {
    url.set_scheme(scheme)
        .map_err(|_| ClientError::InvalidServerUrl(base.to_string()))?;
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build `ws(s)://<host>/ws` from an `http(s)://` or `ws(s)://` base.
///
/// Secure bases map to `wss`, plain ones to `ws`; any path on the base is replaced.
pub fn websocket_url(base: &str) -> Result<Url, ClientError> {
    let url = parse_base(base)?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        _ => return Err(ClientError::InvalidServerUrl(base.to_string())),
    };
    with_path(url, scheme, WEBSOCKET_PATH, base)
}

/// Build `http(s)://<host>/api/waitlist` from the same base address.
pub fn waitlist_url(base: &str) -> Result<Url, ClientError> {
    let url = parse_base(base)?;
    let scheme = match url.scheme() {
        "http" | "ws" => "http",
        "https" | "wss" => "https",
        _ => return Err(ClientError::InvalidServerUrl(base.to_string())),
    };
    with_path(url, scheme, WAITLIST_PATH, base)
}
