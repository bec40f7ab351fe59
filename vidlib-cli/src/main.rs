//! vidlib CLI - interactive video library
//!
//! Reads commands from stdin and prints replies to stdout.

use std::path::PathBuf;

use clap::Parser;
use vidlib_core::tracing_setup::{CliLogLevel, init_tracing};
use vidlib_core::{Session, VidlibConfig, VidlibError};

#[derive(Parser)]
#[command(name = "vidlib")]
#[command(about = "A command-line video library player")]
#[command(version)]
struct Cli {
    /// Catalog file with one `title | id | #tag , #tag` entry per line
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for PLAY_RANDOM, for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Console log level (full trace always goes to the log file)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    /// Directory for the per-run debug log
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Echo each command after the prompt
    #[arg(long)]
    echo: bool,
}

impl Cli {
    /// Layers CLI flags over environment configuration.
    fn into_config(self) -> VidlibConfig {
        let mut config = VidlibConfig::from_env();

        if let Some(path) = self.catalog {
            config.catalog.source_path = Some(path);
        }
        if let Some(seed) = self.seed {
            config.playback.random_seed = Some(seed);
        }
        if self.echo {
            config.session.echo_commands = true;
        }

        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let config = cli.into_config();
    tracing::debug!(?config, "Resolved configuration");

    let mut session = Session::from_config(&config).map_err(into_report)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    session
        .run(stdin.lock(), &mut stdout)
        .map_err(|e| into_report(VidlibError::from(e)))?;

    Ok(())
}

/// Wraps an error so `main` prints the user message once, with the
/// underlying cause listed beneath it.
fn into_report(error: VidlibError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "vidlib",
            "--catalog",
            "videos.txt",
            "--seed",
            "7",
            "--echo",
        ]);
        let config = cli.into_config();

        assert_eq!(config.catalog.source_path, Some(PathBuf::from("videos.txt")));
        assert_eq!(config.playback.random_seed, Some(7));
        assert!(config.session.echo_commands);
    }

    #[test]
    fn test_report_shows_user_message_once() {
        let error = VidlibError::from(vidlib_core::CatalogError::DuplicateVideoId {
            video_id: "dup_id".to_string(),
        });
        let report = into_report(error);

        assert_eq!(
            report.to_string(),
            "Catalog file lists video dup_id more than once"
        );
        let chain: Vec<String> = report.chain().map(ToString::to_string).collect();
        assert_eq!(
            chain,
            [
                "Catalog file lists video dup_id more than once",
                "Catalog error: Duplicate video id: dup_id",
                "Duplicate video id: dup_id",
            ]
        );
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["vidlib"]);
        assert_eq!(cli.log_level, CliLogLevel::Warn);
        assert!(cli.catalog.is_none());
    }
}
