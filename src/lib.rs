//! Client SDK for the VeriFace identity verification API.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod mapper;
pub mod telemetry;

pub use client::VeriFace;
pub use config::{ErrorPolicy, VerifaceConfig};
pub use error::{ApiError, MappingError, TransportError, VerifaceError};
