//! Single-slot playback state machine.
//!
//! The player owns the catalog and one [`PlaybackState`]. Every operation
//! returns the message to show the user; refusals such as "Cannot stop
//! video" are ordinary results, not errors.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::selection::VideoSelector;
use crate::video::Video;

const NOTHING_PLAYING: &str = "No video is currently playing";

/// What the player currently holds.
///
/// A paused state always refers to a loaded video.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Empty,
    /// Video loaded and running
    Playing { video_id: String },
    /// Video loaded and paused
    Paused { video_id: String },
}

impl PlaybackState {
    /// Id of the loaded video, if any.
    pub fn current(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Playing { video_id } | Self::Paused { video_id } => Some(video_id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Playback controller over an immutable catalog.
#[derive(Debug)]
pub struct Player {
    catalog: Catalog,
    state: PlaybackState,
}

impl Player {
    /// Creates a player with nothing loaded.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: PlaybackState::Empty,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The loaded video resolved against the catalog.
    pub fn current_video(&self) -> Option<&Video> {
        self.state
            .current()
            .and_then(|video_id| self.catalog.find(video_id))
    }

    /// Plays `video_id`, stopping whatever is loaded first.
    ///
    /// Playing the video that is already loaded restarts it, so the reply
    /// still carries both the stop and the play line.
    pub fn play(&mut self, video_id: &str) -> String {
        let Some(video) = self.catalog.find(video_id) else {
            debug!(video_id, "Play requested for unknown video");
            return "Cannot play video: Video does not exist".to_string();
        };

        let mut lines = Vec::with_capacity(2);
        if let Some(current) = self.current_video() {
            lines.push(format!("Stopping video: {}", current.title()));
        }
        lines.push(format!("Playing video: {}", video.title()));

        let next = PlaybackState::Playing {
            video_id: video.video_id().to_string(),
        };
        debug!(from = ?self.state, to = ?next, "Playback transition");
        self.state = next;

        lines.join("\n")
    }

    /// Plays a video chosen by `selector`.
    pub fn play_random<S>(&mut self, selector: &mut S) -> String
    where
        S: VideoSelector + ?Sized,
    {
        let video_id = match self.catalog.random_pick(selector) {
            Ok(video) => video.video_id().to_string(),
            Err(error) => {
                warn!(%error, "Random playback unavailable");
                return error.to_string();
            }
        };

        self.play(&video_id)
    }

    pub fn stop(&mut self) -> String {
        let Some(title) = self.current_title() else {
            return format!("Cannot stop video: {NOTHING_PLAYING}");
        };

        debug!(from = ?self.state, "Playback stopped");
        self.state = PlaybackState::Empty;
        format!("Stopping video: {title}")
    }

    pub fn pause(&mut self) -> String {
        let Some(title) = self.current_title() else {
            return format!("Cannot pause video: {NOTHING_PLAYING}");
        };

        match std::mem::take(&mut self.state) {
            PlaybackState::Playing { video_id } => {
                debug!(video_id, "Playback paused");
                self.state = PlaybackState::Paused { video_id };
                format!("Pausing video: {title}")
            }
            paused => {
                self.state = paused;
                format!("Video already paused: {title}")
            }
        }
    }

    /// Resumes a paused video. This is the `CONTINUE` command.
    pub fn resume(&mut self) -> String {
        let Some(title) = self.current_title() else {
            return format!("Cannot continue video: {NOTHING_PLAYING}");
        };

        match std::mem::take(&mut self.state) {
            PlaybackState::Paused { video_id } => {
                debug!(video_id, "Playback resumed");
                self.state = PlaybackState::Playing { video_id };
                format!("Continuing video: {title}")
            }
            playing => {
                self.state = playing;
                "Cannot continue video: Video is not paused".to_string()
            }
        }
    }

    pub fn show_playing(&self) -> String {
        match self.current_video() {
            Some(video) if self.state.is_paused() => {
                format!("Currently playing: {video} - PAUSED")
            }
            Some(video) => format!("Currently playing: {video}"),
            None => NOTHING_PLAYING.to_string(),
        }
    }

    fn current_title(&self) -> Option<String> {
        self.current_video().map(|video| video.title().to_string())
    }
}
