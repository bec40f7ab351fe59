//! Video records held by the catalog.

use std::fmt;

/// A single catalog entry.
///
/// Videos are created once when the catalog is built and never change
/// afterwards. Tags are stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Video {
    video_id: String,
    title: String,
    tags: Vec<String>,
}

impl Video {
    /// Creates a video record, stripping any leading `#` from the tags.
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            tags: tags
                .into_iter()
                .map(|tag| {
                    let tag: String = tag.into();
                    tag.trim_start_matches('#').to_string()
                })
                .collect(),
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags rendered as space-separated `#tag` tokens, empty when untagged.
    pub fn rendered_tags(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Formats as `{title} ({id}) [{tags}]`, the listing form used by
/// `SHOW_ALL_VIDEOS` and `SHOW_PLAYING`.
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}]",
            self.title,
            self.video_id,
            self.rendered_tags()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_tags() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", ["cat", "animal"]);
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new());
        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
        assert_eq!(video.rendered_tags(), "");
    }

    #[test]
    fn test_hash_prefix_is_normalized() {
        let video = Video::new("id", "Title", ["#dog", "animal"]);
        assert_eq!(video.tags(), ["dog".to_string(), "animal".to_string()]);
        assert_eq!(video.rendered_tags(), "#dog #animal");
    }
}
