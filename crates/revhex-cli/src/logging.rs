//! Logger setup for the `revhex` binary.
//!
//! The library only emits `log` records; this installs a stderr console
//! appender so they become visible with `-v`.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Map the `-v` count to a level filter.
///
/// | `-v` count | Level |
/// |------------|-------|
/// | 0          | warn  |
/// | 1          | debug |
/// | 2+         | trace |
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// # Errors
///
/// Returns an error if the configuration is rejected or a logger is
/// already installed.
pub fn init(verbose: u8) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:>5} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_for(verbose)))
        .context("invalid logging configuration")?;

    log4rs::init_config(config).context("cannot install logger")?;
    Ok(())
}
