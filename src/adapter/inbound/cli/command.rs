//! `clap` definitions for the `linescout` binary.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use super::paths;
use crate::domain::{BookmakerKey, SportKey};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::sport::SportConfig;

/// Sportsbook line scanner: find prices that beat the market consensus
#[derive(Parser, Debug)]
#[command(name = "linescout", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Color output mode [auto, always, never]
    #[arg(long, global = true, value_enum, default_value_t, hide_possible_values = true)]
    pub color: ColorChoice,

    /// Print JSON lines instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print warnings, errors and results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan configured sports and print the ranked offers
    Scan(ScanArgs),

    /// Scan, then interactively pick offers to record as bets
    Pick(ScanArgs),

    /// List recorded bets
    Bets(BetsArgs),

    /// Serve offers and bet recording over HTTP
    Serve(ServeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a starter config file
    Init(ConfigInitArgs),
    /// Print the effective configuration
    Show(ConfigPathArg),
    /// Check a config file without scanning
    Validate(ConfigPathArg),
}

/// `-c/--config`, defaulting to `~/.linescout/config.toml`.
#[derive(Args, Debug, Clone)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(short = 'c', long = "config", default_value_os_t = paths::default_config())]
    pub path: PathBuf,
}

/// Overrides for the `[selection]` section, shared by `scan` and `pick`.
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Only keep offers from this bookmaker
    #[arg(long)]
    pub bookmaker: Option<String>,

    /// Keep offers priced strictly below this American price
    #[arg(long, allow_hyphen_values = true)]
    pub max_price: Option<i64>,

    /// Keep offers quoted by strictly more bookmakers than this
    #[arg(long)]
    pub min_competitors: Option<usize>,

    /// Maximum number of offers
    #[arg(long)]
    pub limit: Option<usize>,

    /// Scan this sport instead of the configured ones (repeatable)
    #[arg(long = "sport")]
    pub sports: Vec<String>,
}

impl SelectionArgs {
    /// Write the overrides into `config`, then re-validate it.
    #[allow(clippy::result_large_err)]
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        let selection = &mut config.selection;
        if let Some(bookmaker) = &self.bookmaker {
            selection.bookmaker = BookmakerKey::from(bookmaker.as_str());
        }
        selection.max_price = self.max_price.unwrap_or(selection.max_price);
        selection.min_competitors = self.min_competitors.unwrap_or(selection.min_competitors);
        selection.limit = self.limit.unwrap_or(selection.limit);

        if !self.sports.is_empty() {
            let configured = std::mem::take(&mut config.sports);
            config.sports = self
                .sports
                .iter()
                .map(|key| {
                    // A sport already in the file keeps its market list.
                    configured
                        .iter()
                        .find(|sport| sport.key.as_str() == key)
                        .cloned()
                        .unwrap_or_else(|| SportConfig::preset(SportKey::from(key.as_str())))
                })
                .collect();
        }
        config.validate()
    }
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args, Debug)]
pub struct BetsArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// SQLite database to read instead of the configured one
    #[arg(long)]
    pub db: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Listen address, replacing `[server].bind`
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}
