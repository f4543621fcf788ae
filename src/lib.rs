#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod codec;
pub mod error;
pub mod external_match;
pub mod transport;
pub mod types;

pub use error::Error;
pub use external_match::{
    AssembleQuoteOptions, Client, ClientConfig, Environment, ExternalMatchOptions,
    RequestQuoteOptions,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Value of the `x-renegade-sdk-version` header.
pub const SDK_VERSION: &str = concat!("renegade-sdk-rust-v", env!("CARGO_PKG_VERSION"));
