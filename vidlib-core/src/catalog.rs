//! Immutable video catalog.
//!
//! Videos keep the order in which they were defined. Lookups by id go
//! through a side index so listing order and lookup cost stay independent.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::selection::VideoSelector;
use crate::video::Video;

/// Errors raised while building or sampling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No videos available")]
    EmptyCatalog,

    #[error("Duplicate video id: {video_id}")]
    DuplicateVideoId { video_id: String },

    #[error("Malformed catalog entry on line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The full set of videos available for a run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from videos in definition order.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateVideoId` - Two videos share an id
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for video in videos {
            if catalog.index.contains_key(video.video_id()) {
                return Err(CatalogError::DuplicateVideoId {
                    video_id: video.video_id().to_string(),
                });
            }
            catalog.push_unchecked(video);
        }

        Ok(catalog)
    }

    /// The built-in library used when no catalog file is configured.
    pub fn with_default_videos() -> Self {
        let videos = [
            Video::new("amazing_cats_video_id", "Amazing Cats", ["cat", "animal"]),
            Video::new("another_cat_video_id", "Another Cat Video", ["cat", "animal"]),
            Video::new("funny_dogs_video_id", "Funny Dogs", ["dog", "animal"]),
            Video::new("life_at_google_video_id", "Life at Google", ["google", "career"]),
            Video::new("nothing_video_id", "Video about nothing", Vec::<&str>::new()),
        ];

        let mut catalog = Self::default();
        for video in videos {
            catalog.push_unchecked(video);
        }
        catalog
    }

    /// Appends a video whose id is known to be new.
    fn push_unchecked(&mut self, video: Video) {
        self.index
            .insert(video.video_id().to_string(), self.videos.len());
        self.videos.push(video);
    }

    /// Parses catalog text with one `title | id | #tag , #tag` entry per line.
    ///
    /// Blank lines are skipped. The tag field is optional.
    ///
    /// # Errors
    /// - `CatalogError::MalformedEntry` - Missing id field, empty id/title, or
    ///   whitespace inside the id
    /// - `CatalogError::DuplicateVideoId` - Two entries share an id
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut videos = Vec::new();

        for (line_index, raw_line) in text.lines().enumerate() {
            if raw_line.trim().is_empty() {
                continue;
            }
            videos.push(parse_entry(raw_line, line_index + 1)?);
        }

        Self::from_videos(videos)
    }

    /// Loads a catalog file from disk.
    ///
    /// # Errors
    /// - `CatalogError::Io` - File could not be read
    /// - `CatalogError::MalformedEntry` - A line does not follow the entry format
    /// - `CatalogError::DuplicateVideoId` - Two entries share an id
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&text)?;

        info!(
            path = %path.display(),
            videos = catalog.count(),
            "Loaded video catalog"
        );

        Ok(catalog)
    }

    /// Builds the catalog described by the configuration.
    ///
    /// # Errors
    /// - Any error from [`Catalog::load`] when a source path is configured
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match &config.source_path {
            Some(path) => Self::load(path),
            None => {
                debug!("No catalog file configured, using built-in videos");
                Ok(Self::with_default_videos())
            }
        }
    }

    pub fn count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All videos in definition order.
    pub fn list_all(&self) -> &[Video] {
        &self.videos
    }

    /// Looks up a video by id. Unknown ids are a normal outcome.
    pub fn find(&self, video_id: &str) -> Option<&Video> {
        self.index.get(video_id).map(|&position| &self.videos[position])
    }

    /// Picks one video uniformly using `selector`.
    ///
    /// Indices returned by the selector are wrapped into range.
    ///
    /// # Errors
    /// - `CatalogError::EmptyCatalog` - Catalog holds no videos
    pub fn random_pick<S>(&self, selector: &mut S) -> Result<&Video, CatalogError>
    where
        S: VideoSelector + ?Sized,
    {
        if self.videos.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let position = selector.select_index(self.videos.len()) % self.videos.len();
        Ok(&self.videos[position])
    }
}

fn parse_entry(raw_line: &str, line: usize) -> Result<Video, CatalogError> {
    let mut fields = raw_line.splitn(3, '|').map(str::trim);

    let title = fields.next().unwrap_or_default();
    let video_id = fields.next().ok_or_else(|| CatalogError::MalformedEntry {
        line,
        reason: "expected `title | id | tags`".to_string(),
    })?;
    let tags = fields.next().unwrap_or_default();

    if title.is_empty() {
        return Err(CatalogError::MalformedEntry {
            line,
            reason: "empty title".to_string(),
        });
    }
    if video_id.is_empty() {
        return Err(CatalogError::MalformedEntry {
            line,
            reason: "empty video id".to_string(),
        });
    }
    if video_id.contains(char::is_whitespace) {
        return Err(CatalogError::MalformedEntry {
            line,
            reason: "video id contains whitespace".to_string(),
        });
    }

    let tags = tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "#");

    Ok(Video::new(video_id, title, tags))
}
