//! CLI module graph.

pub mod bets;
pub mod command;
pub mod config;
pub mod output;
pub mod paths;
pub mod pick;
pub mod scan;
pub mod serve;

use command::{Cli, ColorChoice, Commands, ConfigCommand};
use output::OutputConfig;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Apply global flags: output mode and color override.
pub fn configure(cli: &Cli) {
    let flags = &cli.global;
    output::configure(OutputConfig::new(flags.json, flags.quiet, flags.verbose));
    match flags.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
}

/// Initialize logging for a command.
///
/// Terminal commands log at `warn` unless `-v` is given, so log lines do not
/// interleave with tables and prompts. `-v`, `-vv` and `-vvv` select `info`,
/// `debug` and `trace`. `RUST_LOG` still wins over all of these.
pub fn init_logging(config: &Config, interactive: bool) {
    let mut logging = config.logging.clone();
    match output::verbosity() {
        0 if interactive => logging.level = "warn".into(),
        0 => {}
        1 => logging.level = "info".into(),
        2 => logging.level = "debug".into(),
        _ => logging.level = "trace".into(),
    }
    logging.init();
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan(ref args) => scan::execute(args).await,
        Commands::Pick(ref args) => pick::execute(args).await,
        Commands::Bets(ref args) => bets::execute(args).await,
        Commands::Serve(ref args) => serve::execute(args).await,
        Commands::Config(ConfigCommand::Init(ref args)) => {
            config::execute_init(&args.path, args.force)
        }
        Commands::Config(ConfigCommand::Show(ref args)) => config::execute_show(&args.path),
        Commands::Config(ConfigCommand::Validate(ref args)) => {
            config::execute_validate(&args.path)
        }
    }
}
