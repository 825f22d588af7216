//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use self::config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::{
    Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};
use writer::FileWriter;

/// Install the global subscriber described by `config`.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    build_subscriber(&config)?.try_init()?;
    Ok(())
}

/// Build the subscriber without installing it.
///
/// The file layer goes first so span fields are formatted without ANSI
/// escapes (tokio-rs/tracing#1817).
pub fn build_subscriber(
    config: &LoggerConfig,
) -> anyhow::Result<impl Subscriber + Send + Sync + 'static> {
    config.validate()?;

    let filter = config.filter()?;
    let file = if config.file.enabled {
        Some(file_layer(&config.file)?)
    } else {
        None
    };
    let console = config.console.enabled.then(|| console_layer(&config.console));

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(file)
        .with(console))
}

fn use_ansi(config: &ConsoleConfig) -> bool {
    config.colored && std::io::stdout().is_terminal()
}

fn console_layer<S>(config: &ConsoleConfig) -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(use_ansi(config))
        .with_target(true)
        .with_level(true)
}

fn file_layer<S>(config: &FileConfig) -> Result<Box<dyn Layer<S> + Send + Sync>, LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let writer = FileWriter::new(config)?;
    let layer = match config.format {
        LogFormat::Full => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_ansi(false)
            .json()
            .with_writer(writer)
            .boxed(),
    };
    Ok(layer)
}
