//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::outbound::odds_api::settings::API_KEY_ENV;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Annotated starter configuration written by `config init`.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the configuration at `path`.
///
/// A missing file at the default location is not an error: the built-in
/// defaults are used so that `ODDS_API_KEY` alone is enough to run a scan.
#[allow(clippy::result_large_err)]
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() && path == paths::default_config() {
        return Config::parse_toml("");
    }
    Config::load(path)
}

/// Execute `config init`: write the starter file to `path`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    match (path.exists(), force) {
        (true, false) => {
            return Err(ConfigError::InvalidValue {
                field: "config",
                reason: format!("{} already exists (use --force to replace it)", path.display()),
            }
            .into());
        }
        (true, true) => output::warning(&format!("Replacing {}", path.display())),
        _ => {}
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    let shown = path.display();
    output::success(&format!("Wrote {shown}"));
    output::section("Next");
    output::note(&format!("export {API_KEY_ENV}=<your key>"));
    output::note(&format!("linescout config validate -c {shown}"));
    output::note(&format!("linescout scan -c {shown}"));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
            "api_key_loaded": config.provider.api_key.is_some(),
        }));
        return Ok(());
    }

    output::section("Provider");
    output::field("API", &config.provider.api_url);
    output::field("Regions", &config.provider.regions);
    output::field("Concurrency", config.provider.max_concurrent_requests);
    if config.provider.api_key.is_some() {
        output::success("API key loaded");
    } else {
        output::warning(&format!("API key not set ({API_KEY_ENV})"));
    }

    output::section("Sports");
    for sport in &config.sports {
        output::field(sport.key.as_str(), format!("{} markets", sport.markets.len()));
        if output::verbosity() > 0 {
            output::note(&sport.markets.join(", "));
        }
    }

    output::section("Selection");
    output::field("Bookmaker", &config.selection.bookmaker);
    output::field("Max price", output::price(config.selection.max_price));
    output::field("Competitors", format!("> {}", config.selection.min_competitors));
    output::field("Limit", config.selection.limit);

    output::section("Storage");
    output::field("Database", &config.database);
    output::field("Server", &config.server.bind);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = load(path)?;
    output::success("Config file is valid");

    if config.provider.api_key.is_none() {
        output::section("Warnings");
        output::warning(&ConfigError::MissingApiKey { env: API_KEY_ENV }.to_string());
    }

    output::field(
        "Next",
        format!("linescout config show -c {}", path.display()),
    );

    Ok(())
}
