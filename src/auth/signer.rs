use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use hmac::{Hmac, Mac as _};
use reqwest::Request;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret as _, SecretString};
use sha2::Sha256;

use crate::Result;
use crate::auth::{AUTH_HEADER, HEADER_PREFIX};
use crate::error::Error;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 key derived once from the base64 API secret.
///
/// Holds a keyed MAC that is cloned for every signature, so the secret bytes are not kept around
/// in any other form.
#[derive(Clone)]
pub struct HmacKey {
    mac: HmacSha256,
}

impl HmacKey {
    /// Decodes a standard base64 secret.
    pub fn from_base64(secret: &SecretString) -> Result<Self> {
        let bytes = STANDARD
            .decode(secret.expose_secret().trim())
            .map_err(|e| Error::validation(format!("api secret is not valid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::validation("api secret is empty"));
        }
        let mac = HmacSha256::new_from_slice(key)
            .map_err(|e| Error::validation(format!("invalid HMAC key: {e}")))?;
        Ok(Self { mac })
    }

    /// Signs `path` (with its query), the `x-renegade-*` headers except the signature itself,
    /// and `body`.
    ///
    /// Headers are fed sorted by name, each as name bytes followed by value bytes. The digest is
    /// base64 without padding.
    #[must_use]
    pub fn sign(&self, path: &str, headers: &HeaderMap, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(path.as_bytes());

        let mut signed: Vec<_> = headers
            .iter()
            .filter(|(name, _)| {
                let name = name.as_str();
                name.len() >= HEADER_PREFIX.len()
                    && name.as_bytes()[..HEADER_PREFIX.len()]
                        .eq_ignore_ascii_case(HEADER_PREFIX.as_bytes())
                    && !name.eq_ignore_ascii_case(AUTH_HEADER)
            })
            .collect();
        signed.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));

        for (name, value) in signed {
            mac.update(name.as_str().as_bytes());
            mac.update(value.as_bytes());
        }

        mac.update(body);
        STANDARD_NO_PAD.encode(mac.finalize().into_bytes())
    }

    /// Signs a fully built request exactly as it will go on the wire.
    pub fn sign_request(&self, request: &Request) -> Result<String> {
        let url = request.url();
        let path = match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_owned(),
        };
        let body = match request.body() {
            None => &[][..],
            Some(body) => body
                .as_bytes()
                .ok_or(Error::validation("streaming request bodies cannot be signed"))?,
        };

        Ok(self.sign(&path, request.headers(), body))
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacKey(<redacted>)")
    }
}
