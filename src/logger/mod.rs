//! Logging built on `tracing-subscriber`
//!
//! Supports:
//! - Console output with color control
//! - File output in Full, Compact or JSON format

pub mod config;
pub mod error;
pub(crate) mod writer;


pub use self::config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Install the global subscriber described by `config`
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = level_filter(&config)?;

    // File layer goes before the console layer so ANSI codes from span field
    // formatting never reach the file (tokio-rs/tracing#1817).
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer(&config.file)?)
        .with(console_layer(&config.console))
        .try_init()
        .map_err(|e| LoggerError::config(e.to_string()))?;

    Ok(())
}

/// Filter admitting events at or above the configured level
pub(crate) fn level_filter(config: &LoggerConfig) -> anyhow::Result<EnvFilter> {
    let level = config.parse_level()?;
    Ok(EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
}

fn file_layer<S>(config: &FileConfig) -> Result<Option<BoxedLayer<S>>, LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if !config.enabled {
        return Ok(None);
    }

    let writer = writer::open_log_file(config)?;
    let layer = fmt::layer().with_ansi(false).with_writer(writer);

    let layer = match config.format {
        LogFormat::Full => layer.with_target(true).boxed(),
        LogFormat::Compact => layer.with_target(true).compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };
    Ok(Some(layer))
}

fn console_layer<S>(config: &ConsoleConfig) -> Option<BoxedLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if !config.enabled {
        return None;
    }

    let use_ansi = config.colored && std::io::stdout().is_terminal();
    Some(
        fmt::layer()
            .with_ansi(use_ansi)
            .with_target(true)
            .with_level(true)
            .boxed(),
    )
}
