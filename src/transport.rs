//! Authenticated HTTP transport.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::{self, AUTH_HEADER, HmacKey};
use crate::codec::JsonCodec;
use crate::error::Error;
use crate::{Result, Timestamp};

/// Outcome of a request that the server accepted.
///
/// `data` is `None` for `204 No Content` and for empty bodies.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub data: Option<Value>,
}

/// Signs and sends requests to the auth server.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Clone, Debug)]
pub struct AuthenticatedTransport {
    client: ReqwestClient,
    host: Url,
    api_key: String,
    key: HmacKey,
    codec: JsonCodec,
    auth_expiration: Duration,
}

impl AuthenticatedTransport {
    #[must_use]
    pub fn new(
        client: ReqwestClient,
        host: Url,
        api_key: String,
        key: HmacKey,
        codec: JsonCodec,
        auth_expiration: Duration,
    ) -> Self {
        Self {
            client,
            host,
            api_key,
            key,
            codec,
            auth_expiration,
        }
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[must_use]
    pub fn codec(&self) -> JsonCodec {
        self.codec
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.send(Method::GET, path, None, HeaderMap::new()).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let body = self.codec.encode(body)?;
        self.send(Method::POST, path, Some(body), HeaderMap::new())
            .await
    }

    /// Sends one signed request.
    ///
    /// `body` must already be encoded; those exact bytes are both signed and sent.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        extra_headers: HeaderMap,
    ) -> Result<Response> {
        let request = self.build_signed(
            method.clone(),
            path,
            body,
            extra_headers,
            Utc::now().timestamp_millis(),
        )?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, path, "sending external match request");

        let response = self.client.execute(request).await?;
        let status = response.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, path, %status, "external match response");

        if status == StatusCode::NO_CONTENT {
            return Ok(Response { status, data: None });
        }

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::status(status, method, path.to_owned(), text));
        }

        let data = if text.trim().is_empty() {
            None
        } else {
            Some(self.codec.decode(&text))
        };

        Ok(Response { status, data })
    }

    /// Builds the request with every header but the signature, signs it, then attaches the
    /// signature.
    pub(crate) fn build_signed(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        extra_headers: HeaderMap,
        now: Timestamp,
    ) -> Result<reqwest::Request> {
        let url = self.host.join(path)?;
        let expiration = auth::expiration_after(now, self.auth_expiration);

        let mut headers = auth::expiring_headers(&self.api_key, expiration)?;
        for (name, value) in &extra_headers {
            if name.as_str() == AUTH_HEADER || headers.contains_key(name) {
                return Err(Error::validation(format!(
                    "{name} is set by the transport and cannot be supplied"
                )));
            }
            headers.append(name.clone(), value.clone());
        }

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        let mut request = builder.build()?;

        let signature = self.key.sign_request(&request)?;
        request.headers_mut().insert(
            HeaderName::from_static(AUTH_HEADER),
            HeaderValue::from_str(&signature)?,
        );

        Ok(request)
    }
}
