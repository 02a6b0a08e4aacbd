//! Records exchanged with the VeriFace API and the port the gateway talks through.

pub mod models;
pub mod ports;
