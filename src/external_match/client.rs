use reqwest::Client as ReqwestClient;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::auth::HmacKey;
use crate::codec::JsonCodec;
use crate::external_match::{
    AssembleQuoteOptions, ClientConfig, Environment, ExternalMatchOptions, RequestQuoteOptions,
};
use crate::transport::{AuthenticatedTransport, Response};
use crate::types::{
    AssembleExternalMatchRequest, ExternalMatchRequest, ExternalMatchResponse, ExternalOrder,
    ExternalQuoteRequest, ExternalQuoteResponse, SignedExternalQuote,
};

/// Client for the external match API.
///
/// Each call is one signed round trip. Failures are returned as-is: no retries and no timeout
/// beyond what the supplied [`reqwest::Client`] is configured with.
#[derive(Clone, Debug)]
pub struct Client {
    transport: AuthenticatedTransport,
}

impl Client {
    /// Creates a client; fails if the config is invalid or the secret is not base64.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_http_client(config, ReqwestClient::new())
    }

    /// Creates a client that sends through a caller-configured HTTP client.
    pub fn with_http_client(config: ClientConfig, client: ReqwestClient) -> Result<Self> {
        config.validate()?;
        let key = HmacKey::from_base64(&config.api_secret)?;

        Ok(Self {
            transport: AuthenticatedTransport::new(
                client,
                config.host,
                config.api_key,
                key,
                JsonCodec::new(),
                config.auth_expiration,
            ),
        })
    }

    pub fn testnet(api_key: String, api_secret: SecretString) -> Result<Self> {
        Self::new(ClientConfig::for_environment(
            Environment::Testnet,
            api_key,
            api_secret,
        )?)
    }

    pub fn mainnet(api_key: String, api_secret: SecretString) -> Result<Self> {
        Self::new(ClientConfig::for_environment(
            Environment::Mainnet,
            api_key,
            api_secret,
        )?)
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        self.transport.host()
    }

    /// Requests a quote with default options. `Ok(None)` means no quote is available right now.
    pub async fn request_quote(&self, order: &ExternalOrder) -> Result<Option<SignedExternalQuote>> {
        self.request_quote_with_options(order, &RequestQuoteOptions::default())
            .await
    }

    pub async fn request_quote_with_options(
        &self,
        order: &ExternalOrder,
        options: &RequestQuoteOptions,
    ) -> Result<Option<SignedExternalQuote>> {
        order.validate()?;
        let path = options.request_path()?;
        let request = ExternalQuoteRequest {
            external_order: order,
        };

        let response = self.transport.post(&path, &request).await?;
        let quote = self.parse::<ExternalQuoteResponse>(response)?;

        Ok(quote.map(SignedExternalQuote::from))
    }

    /// Turns a quote into a settlement bundle. `Ok(None)` means the quote could not be filled.
    pub async fn assemble_quote(
        &self,
        quote: &SignedExternalQuote,
    ) -> Result<Option<ExternalMatchResponse>> {
        self.assemble_quote_with_options(quote, &AssembleQuoteOptions::default())
            .await
    }

    pub async fn assemble_quote_with_options(
        &self,
        quote: &SignedExternalQuote,
        options: &AssembleQuoteOptions,
    ) -> Result<Option<ExternalMatchResponse>> {
        if let Some(order) = &options.updated_order {
            order.validate()?;
        }
        let path = options.request_path()?;
        let request = AssembleExternalMatchRequest {
            do_gas_estimation: options.do_gas_estimation,
            receiver_address: options.receiver_address.as_deref(),
            signed_quote: quote.to_api_signed_quote(),
            updated_order: options.updated_order.as_ref(),
        };

        let response = self.transport.post(&path, &request).await?;
        self.parse(response)
    }

    /// Quotes and assembles in one call, without the chance to inspect the quote.
    pub async fn request_external_match(
        &self,
        order: &ExternalOrder,
    ) -> Result<Option<ExternalMatchResponse>> {
        self.request_external_match_with_options(order, &ExternalMatchOptions::default())
            .await
    }

    pub async fn request_external_match_with_options(
        &self,
        order: &ExternalOrder,
        options: &ExternalMatchOptions,
    ) -> Result<Option<ExternalMatchResponse>> {
        order.validate()?;
        let path = options.request_path()?;
        let request = ExternalMatchRequest {
            do_gas_estimation: options.do_gas_estimation,
            receiver_address: options.receiver_address.as_deref(),
            external_order: order,
        };

        let response = self.transport.post(&path, &request).await?;
        self.parse(response)
    }

    fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<Option<T>> {
        response
            .data
            .map(|data| self.transport.codec().decode_as(data))
            .transpose()
    }
}
