//! Request authentication for the external match API.
//!
//! Every request carries an API key, the SDK version and a short-lived expiration, all in the
//! `x-renegade-*` namespace. A signature over the path, those headers and the body is attached
//! last in `x-renegade-auth`:
//!
//! 1. [`expiring_headers`] builds the full header set without the signature.
//! 2. The request is built with those headers and its encoded body.
//! 3. [`HmacKey::sign_request`] signs the built request and the signature header is inserted.

mod signer;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub use signer::HmacKey;

use crate::{Result, SDK_VERSION, Timestamp};

/// Namespace of headers covered by the signature.
pub const HEADER_PREFIX: &str = "x-renegade";
pub const API_KEY_HEADER: &str = "x-renegade-api-key";
pub const SDK_VERSION_HEADER: &str = "x-renegade-sdk-version";
/// Epoch milliseconds after which the server rejects the request.
pub const AUTH_EXPIRATION_HEADER: &str = "x-renegade-auth-expiration";
pub const AUTH_HEADER: &str = "x-renegade-auth";

pub const DEFAULT_AUTH_EXPIRATION: Duration = Duration::from_secs(10);

/// Headers that precede the signature: API key, SDK version and expiration.
pub fn expiring_headers(api_key: &str, expiration: Timestamp) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    map.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key)?,
    );
    map.insert(
        HeaderName::from_static(SDK_VERSION_HEADER),
        HeaderValue::from_static(SDK_VERSION),
    );
    map.insert(
        HeaderName::from_static(AUTH_EXPIRATION_HEADER),
        HeaderValue::from(expiration),
    );

    Ok(map)
}

/// Expiration timestamp for a request sent at `now`.
#[must_use]
pub fn expiration_after(now: Timestamp, window: Duration) -> Timestamp {
    let window = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
    now.saturating_add(window)
}
