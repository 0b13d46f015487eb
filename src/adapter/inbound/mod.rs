//! Inbound adapters (driving side): the terminal CLI and the HTTP endpoint.

pub mod cli;
pub mod http;
