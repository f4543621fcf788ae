//! Quote, assemble and direct match calls against the external match API.
//!
//! A typical flow:
//! - request a quote for an [`ExternalOrder`](crate::types::ExternalOrder)
//! - inspect it (amounts, fees, price)
//! - assemble it into a bundle whose settlement transaction the caller submits
//!
//! Empty responses mean "nothing available" and come back as `Ok(None)`.

mod client;
mod config;
mod options;

pub use client::Client;
pub use config::{ClientConfig, Environment, MAINNET_BASE_URL, RawCredentials, TESTNET_BASE_URL};
pub use options::{
    ASSEMBLE_EXTERNAL_MATCH_ROUTE, AssembleQuoteOptions, ExternalMatchOptions,
    REQUEST_EXTERNAL_MATCH_ROUTE, REQUEST_EXTERNAL_QUOTE_ROUTE, RequestQuoteOptions,
};
