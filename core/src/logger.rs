//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::Style;
use log::info;
use once_cell::sync::Lazy;
use tracing_subscriber::{Layer as _, layer::SubscriberExt as _};

use crate::format_duration;

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

//---------------------------------------------------------------------------------------------------- Logger init function
/// The filter used when `RUST_LOG` isn't set: everything but spindle and its sub-crates is off.
#[must_use]
pub fn default_filter(filter: log::LevelFilter) -> String {
    format!("off,spindle={filter}")
}

#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables logging on all the internals of `Spindle`, to stderr so that it doesn't
/// interleave with what the REPL prints.
///
/// Functionality is provided by [`log`].
///
/// The levels are:
/// - ERROR
/// - WARN
/// - INFO
/// - DEBUG
/// - TRACE
///
/// # Panics
/// This must only be called _once_.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(filter: log::LevelFilter) {
    // Initialize timer.
    let now = *Lazy::force(&INIT_INSTANT);

    // If `RUST_LOG` is set it wins, otherwise disable
    // all library crate logs except for spindle and its sub-crates.
    let env = std::env::var("RUST_LOG").ok().filter(|e| !e.is_empty());
    let filters = env.clone().unwrap_or_else(|| default_filter(filter));

    env_logger::Builder::new()
        .format(move |buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            let dimmed = Style::new().dimmed();
            let level = match record.level() {
                log::Level::Debug => "D",
                log::Level::Trace => "T",
                log::Level::Info => "I",
                log::Level::Warn => "W",
                log::Level::Error => "E",
            };
            writeln!(
                buf,
                // Longest PATH in the repo: `cli/src/handlers/implementations.rs` - `35` characters
                // Longest file in the repo: `storage/src/collection.rs`           - `3` digits
                //
                //      Longest PATH ---|        |--- Longest file
                //                      |        |
                //                      v        v
                "| {level_style}{level}{level_style:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >35} @ {: <3}{dimmed:#} | {}",
                format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .target(env_logger::Target::Stderr)
        .write_style(env_logger::WriteStyle::Auto)
        .parse_filters(&filters)
        .init();

    match env {
        Some(env) => info!("Log Level (RUST_LOG) ... {env}"),
        None => info!("Log Level (Flag) ... {filter}"),
    }
}

/// Initializes the tracing layer.
///
/// Spans are only printed (to stderr, when they close) if the `verbose_tracing` feature is
/// enabled, otherwise the returned subscriber discards everything.
#[must_use]
pub fn init_tracing() -> impl tracing::Subscriber + Send + Sync {
    #[cfg(not(feature = "verbose_tracing"))]
    let filter = tracing_subscriber::EnvFilter::new("off");
    #[cfg(feature = "verbose_tracing")]
    let filter = tracing_subscriber::EnvFilter::new("off,spindle=trace");

    tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_filter(filter),
    )
}
