//! Centralized configuration for vidlib.
//!
//! Defaults reproduce the built-in library with a random seed; environment
//! variables and CLI flags override individual fields.

use std::path::PathBuf;

use crate::VidlibError;

/// Central configuration for all vidlib components.
#[derive(Debug, Clone, Default)]
pub struct VidlibConfig {
    pub catalog: CatalogConfig,
    pub playback: PlaybackConfig,
    pub session: SessionConfig,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Catalog file in `title | id | #tags` format (None = built-in videos)
    pub source_path: Option<PathBuf>,
}

/// Playback behavior.
#[derive(Debug, Clone, Default)]
pub struct PlaybackConfig {
    /// Seed for `PLAY_RANDOM` (None = fresh seed per run)
    pub random_seed: Option<u64>,
}

/// Interactive session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Prompt written before each command
    pub prompt: String,
    /// Echo each command after the prompt, for piped input
    pub echo_commands: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "YT> ".to_string(),
            echo_commands: false,
        }
    }
}

impl VidlibConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("VIDLIB_CATALOG_PATH")
            && !path.trim().is_empty()
        {
            config.catalog.source_path = Some(PathBuf::from(path));
        }

        if let Ok(seed) = std::env::var("VIDLIB_RANDOM_SEED")
            && let Ok(seed_value) = seed.parse::<u64>()
        {
            config.playback.random_seed = Some(seed_value);
        }

        if let Ok(prompt) = std::env::var("VIDLIB_PROMPT") {
            config.session.prompt = prompt;
        }

        if let Ok(echo) = std::env::var("VIDLIB_ECHO_COMMANDS")
            && let Some(enabled) = parse_flag(&echo)
        {
            config.session.echo_commands = enabled;
        }

        config
    }

    /// Creates a configuration optimized for testing.
    pub fn for_testing() -> Self {
        Self {
            playback: PlaybackConfig {
                random_seed: Some(42),
            },
            session: SessionConfig {
                prompt: "YT> ".to_string(),
                echo_commands: true,
            },
            ..Default::default()
        }
    }

    /// Checks settings that cannot be enforced by the types.
    ///
    /// # Errors
    /// - `VidlibError::Configuration` - Prompt contains a line break
    pub fn validate(&self) -> crate::Result<()> {
        if self.session.prompt.contains(['\n', '\r']) {
            return Err(VidlibError::Configuration {
                reason: "prompt must fit on a single line".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses a boolean environment value: `true/false`, `1/0`, `yes/no`, `on/off`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = VidlibConfig::default();

        assert!(config.catalog.source_path.is_none());
        assert!(config.playback.random_seed.is_none());
        assert_eq!(config.session.prompt, "YT> ");
        assert!(!config.session.echo_commands);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_testing_preset() {
        let config = VidlibConfig::for_testing();
        assert_eq!(config.playback.random_seed, Some(42));
        assert!(config.session.echo_commands);
    }

    #[test]
    fn test_multiline_prompt_rejected() {
        let mut config = VidlibConfig::default();
        config.session.prompt = "YT\n> ".to_string();

        let error = config.validate().unwrap_err();
        assert!(error.is_user_error());
    }

    #[test]
    fn test_parse_flag_spellings() {
        for enabled in ["true", "1", "yes", "ON", " Yes "] {
            assert_eq!(parse_flag(enabled), Some(true), "{enabled:?}");
        }
        for disabled in ["false", "0", "no", "Off"] {
            assert_eq!(parse_flag(disabled), Some(false), "{disabled:?}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("VIDLIB_CATALOG_PATH", "/tmp/videos.txt");
            std::env::set_var("VIDLIB_RANDOM_SEED", "12345");
            std::env::set_var("VIDLIB_PROMPT", "YT > ");
            std::env::set_var("VIDLIB_ECHO_COMMANDS", "1");
        }

        let config = VidlibConfig::from_env();

        assert_eq!(
            config.catalog.source_path,
            Some(PathBuf::from("/tmp/videos.txt"))
        );
        assert_eq!(config.playback.random_seed, Some(12345));
        assert_eq!(config.session.prompt, "YT > ");
        assert!(config.session.echo_commands);

        // Cleanup
        unsafe {
            std::env::remove_var("VIDLIB_CATALOG_PATH");
            std::env::remove_var("VIDLIB_RANDOM_SEED");
            std::env::remove_var("VIDLIB_PROMPT");
            std::env::remove_var("VIDLIB_ECHO_COMMANDS");
        }
    }
}
