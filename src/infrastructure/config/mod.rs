//! TOML configuration, one module per section.

pub mod logging;
pub mod server;
pub mod settings;
pub mod sport;
