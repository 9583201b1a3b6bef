use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::Path;

/// Environment variable holding the log specification, e.g. `debug` or
/// `calview::index=debug`
pub const LOG_ENV_VAR: &str = "CALVIEW_LOG";

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_BASENAME: &str = "calview";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts logging to rotating files in `dir`.  Logs never go to the terminal,
/// which belongs to the calendar display.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn init_file_logging(dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    let spec = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| String::from(DEFAULT_LEVEL));
    let handle = Logger::try_with_str(spec)?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .format_for_files(detailed_format)
        .start()?;
    log::info!(
        "{} {} logging to {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );
    Ok(handle)
}
