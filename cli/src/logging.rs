use anyhow::Context;
use chrono::Local;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Logger, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

const CONSOLE_PATTERN: &str = "{h({l}):<5} {m}{n}";
const FILE_PATTERN: &str = "[{d(%Y-%m-%d %H:%M:%S)}] [{l}] [{M}] {m}{n}";

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr so stdout stays clean for reports. With a log
/// directory, a copy goes to a file named after the start time.
pub fn init_logger(verbosity: u8, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let level = level_for(verbosity);

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let mut config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        // The terminal library is chatty at debug level
        .logger(Logger::builder().build("linefeed", LevelFilter::Warn));
    let mut root = Root::builder().appender("console");

    if let Some(dir) = log_dir {
        let path = dir.join(format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S")));
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(&path)
            .with_context(|| format!("Error opening log file {}", path.display()))?;
        config = config.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = config
        .build(root.build(level))
        .context("Invalid logger configuration")?;
    log4rs::init_config(config).context("Logger already initialized")?;

    Ok(())
}
