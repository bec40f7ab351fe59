//! Tracing setup for vidlib
//!
//! Console logs go to stderr so they never interleave with command replies on
//! stdout. A second layer writes everything to a per-run log file.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Tracing targets owned by this workspace: the core library and the binary.
const VIDLIB_TARGETS: &[&str] = &["vidlib_core", "vidlib"];

/// Name of the per-run debug log inside the logs directory.
pub const LOG_FILE_NAME: &str = "vidlib-last-run.log";

/// Initialize tracing with a stderr console layer and a trace-level file layer
///
/// # Arguments
/// * `console_level` - Level for vidlib's own targets on the console
/// * `logs_dir` - Directory for the debug log (defaults to "./logs")
///
/// `RUST_LOG` replaces the console filter entirely when set.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If logs directory cannot be created, log file cannot be opened, or a subscriber is already installed
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let logs_path = logs_dir.unwrap_or_else(|| Path::new("logs"));
    create_dir_all(logs_path)?;

    let log_file_path = logs_path.join(LOG_FILE_NAME);
    let log_file = File::create(&log_file_path)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directives(console_level)));

    let console_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::new(file_directives()));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(
        console = %console_directives(console_level),
        debug_file = %log_file_path.display(),
        "Tracing initialized"
    );

    Ok(())
}

/// Console filter: vidlib targets at `level`, everything else at warn.
///
/// Dependencies never get chattier than warn on the console, even at
/// `--log-level trace`.
pub fn console_directives(level: Level) -> String {
    let mut directives = vec![Level::WARN.min(level).to_string()];
    directives.extend(
        VIDLIB_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

/// File filter: vidlib targets at trace, dependencies at debug.
fn file_directives() -> String {
    let mut directives = vec![Level::DEBUG.to_string()];
    directives.extend(VIDLIB_TARGETS.iter().map(|target| format!("{target}=trace")));
    directives.join(",")
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Playback transitions and catalog loading summaries
    Info,
    /// Every command and rejected input line
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use vidlib_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Warn.as_tracing_level();
    /// assert_eq!(level, tracing::Level::WARN);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}
