use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::Result;
use crate::auth::DEFAULT_AUTH_EXPIRATION;
use crate::error::Error;

pub const TESTNET_BASE_URL: &str = "https://testnet.auth-server.renegade.fi:3000";
pub const MAINNET_BASE_URL: &str = "https://mainnet.auth-server.renegade.fi:3000";

/// Deployment the client talks to.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Environment {
    Testnet,
    Mainnet,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Environment> {
        match value.trim().to_ascii_lowercase().as_str() {
            "testnet" | "sepolia" | "arbitrum-sepolia" => Ok(Environment::Testnet),
            "mainnet" | "arbitrum" | "arbitrum-one" => Ok(Environment::Mainnet),
            other => Err(Error::validation(format!(
                "invalid environment `{other}`; expected one of: testnet|mainnet"
            ))),
        }
    }

    pub fn base_url(self) -> Result<Url> {
        let url = match self {
            Environment::Testnet => TESTNET_BASE_URL,
            Environment::Mainnet => MAINNET_BASE_URL,
        };
        Ok(Url::parse(url)?)
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Environment::parse(s)
    }
}

/// Credentials as they usually arrive from app-level config.
#[derive(Clone, Debug)]
pub struct RawCredentials {
    pub api_key: String,
    /// Standard base64.
    pub api_secret: SecretString,
}

/// Everything a [`Client`](crate::Client) needs to authenticate against a host.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub host: Url,
    pub api_key: String,
    pub api_secret: SecretString,
    /// How long after sending a signed request stays valid.
    pub auth_expiration: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(host: Url, api_key: String, api_secret: SecretString) -> Self {
        Self {
            host,
            api_key,
            api_secret,
            auth_expiration: DEFAULT_AUTH_EXPIRATION,
        }
    }

    pub fn for_environment(
        environment: Environment,
        api_key: String,
        api_secret: SecretString,
    ) -> Result<Self> {
        Ok(Self::new(environment.base_url()?, api_key, api_secret))
    }

    pub fn from_raw(host: &str, raw: RawCredentials) -> Result<Self> {
        let host = match Environment::parse(host) {
            Ok(environment) => environment.base_url()?,
            Err(_e) => Url::parse(host)?,
        };
        let config = Self::new(host, raw.api_key, raw.api_secret);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::validation("api key must not be empty"));
        }
        if self.api_secret.expose_secret().trim().is_empty() {
            return Err(Error::validation("api secret must not be empty"));
        }
        if self.auth_expiration.is_zero() {
            return Err(Error::validation("auth expiration window must be positive"));
        }
        if !matches!(self.host.scheme(), "http" | "https") {
            return Err(Error::validation(format!(
                "host must be an http(s) url, got {}",
                self.host
            )));
        }
        Ok(())
    }
}
