use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, ValueHint,
    builder::{PossibleValuesParser, TypedValueParser},
};
use log::LevelFilter;

mod handlers;
mod repl;

use handlers::utils::WriteAdapter;
use repl::Repl;
use spindle_core::{
    config::Settings,
    logger::{init_logger, init_tracing},
};
use spindle_storage::collection::Collection;

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "spindle", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path
    #[clap(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// Set the log level
    #[clap(
        long,
        value_parser = PossibleValuesParser::new([ "off", "trace", "debug", "info", "warn", "error"])
        .map(|s| s.parse::<LevelFilter>().unwrap())
    )]
    log_level: Option<LevelFilter>,
    /// Set the prompt shown before each line of input
    #[clap(long, value_hint = ValueHint::Other)]
    prompt: Option<String>,
}

#[test]
fn verify_cli() {
    Flags::command().debug_assert();
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    clap_complete::CompleteEnv::with_factory(Flags::command).complete();

    let flags = Flags::parse();

    let config_file = match flags.config {
        Some(config_file) => config_file,
        None => Settings::get_config_path()?,
    };
    let settings = Settings::init(config_file, flags.log_level, flags.prompt)?;

    init_logger(settings.logging.level);
    tracing::subscriber::set_global_default(init_tracing())?;

    let mut stdout_adapter = WriteAdapter(std::io::stdout());
    let mut stderr_adapter = WriteAdapter(std::io::stderr());

    Repl::new(Collection::new(), settings.repl).run(
        &std::io::stdin(),
        &mut stdout_adapter,
        &mut stderr_adapter,
    )
}
