//! Module provides initialization of global application logger

use chrono::{Local, SecondsFormat};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

use crate::error::AppError;

const PATTERN: &str = "{d:<35} {l:<5} {t} >> {m}{n}";

/// Initializes the global logger for an application.
///
/// Records are written both to the console and to the new file in `logs` directory.
///
/// # Errors
///
/// An error is returned if log file cannot be created
/// or if logger has already been initialized.
///
pub fn init(level: LevelFilter) -> Result<Handle, AppError> {
    let encoder = Box::new(PatternEncoder::new(PATTERN));

    let stdout = ConsoleAppender::builder().encoder(encoder.clone()).build();
    let file = FileAppender::builder()
        .encoder(encoder)
        .build(file_name())?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appenders(["stdout", "file"]).build(level))
        .map_err(|errors| AppError::LogConfig(errors.to_string()))?;
    Ok(log4rs::init_config(config)?)
}

fn file_name() -> String {
    format!(
        "logs/logfile_{}.log",
        Local::now()
            .to_rfc3339_opts(SecondsFormat::Nanos, true)
            .replace(':', "-"),
    )
}
