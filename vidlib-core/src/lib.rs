//! vidlib core - video library playback simulation
//!
//! Holds an immutable catalog of videos and a single-slot player that
//! tracks which video, if any, is playing or paused. Commands arrive as
//! text lines and every command produces a reply string.

pub mod catalog;
pub mod command;
pub mod config;
pub mod player;
pub mod selection;
pub mod session;
pub mod tracing_setup;
pub mod video;

// Re-export main types for convenient access
pub use catalog::{Catalog, CatalogError};
pub use command::{Command, CommandDispatcher, CommandError, CommandOutcome};
pub use config::VidlibConfig;
pub use player::{PlaybackState, Player};
pub use selection::{RandomSelector, VideoSelector};
pub use session::{Session, SessionSummary};
pub use video::Video;

/// Errors that can stop a vidlib session from starting or running.
///
/// Playback refusals are never errors; they are replies.
#[derive(Debug, thiserror::Error)]
pub enum VidlibError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VidlibError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            VidlibError::Catalog(e) => match e {
                CatalogError::MalformedEntry { line, reason } => {
                    format!("Catalog file has a bad entry on line {line}: {reason}")
                }
                CatalogError::DuplicateVideoId { video_id } => {
                    format!("Catalog file lists video {video_id} more than once")
                }
                CatalogError::Io(_) => "Catalog file could not be read".to_string(),
                CatalogError::EmptyCatalog => e.to_string(),
            },
            VidlibError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            VidlibError::Io(_) => "Terminal input/output failed".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VidlibError::Configuration { .. }
                | VidlibError::Catalog(
                    CatalogError::MalformedEntry { .. } | CatalogError::DuplicateVideoId { .. }
                )
        )
    }
}

pub type Result<T> = std::result::Result<T, VidlibError>;
