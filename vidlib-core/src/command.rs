//! Command parsing and dispatch.
//!
//! A line of input becomes a [`Command`], which the [`CommandDispatcher`]
//! runs against its player and turns into a reply.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::player::Player;
use crate::selection::{RandomSelector, VideoSelector};

/// Help listing printed by `HELP`.
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    Help,
    Exit,
}

/// Input that could not be turned into a command.
///
/// The display text is the reply shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown { name: String },

    #[error("Please enter PLAY command followed by video_id.")]
    MissingVideoId,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Splits on whitespace; the command word is case-insensitive, the
    /// argument is kept as typed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arguments: Vec<&str> = words.collect();

        let command = match name.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Self::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Self::ShowAllVideos,
            "PLAY" => match arguments.as_slice() {
                [video_id] => Self::Play {
                    video_id: (*video_id).to_string(),
                },
                _ => return Err(CommandError::MissingVideoId),
            },
            "PLAY_RANDOM" => Self::PlayRandom,
            "STOP" => Self::Stop,
            "PAUSE" => Self::Pause,
            "CONTINUE" => Self::Continue,
            "SHOW_PLAYING" => Self::ShowPlaying,
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => {
                return Err(CommandError::Unknown {
                    name: name.to_string(),
                });
            }
        };

        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberOfVideos => write!(f, "NUMBER_OF_VIDEOS"),
            Self::ShowAllVideos => write!(f, "SHOW_ALL_VIDEOS"),
            Self::Play { video_id } => write!(f, "PLAY {video_id}"),
            Self::PlayRandom => write!(f, "PLAY_RANDOM"),
            Self::Stop => write!(f, "STOP"),
            Self::Pause => write!(f, "PAUSE"),
            Self::Continue => write!(f, "CONTINUE"),
            Self::ShowPlaying => write!(f, "SHOW_PLAYING"),
            Self::Help => write!(f, "HELP"),
            Self::Exit => write!(f, "EXIT"),
        }
    }
}

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Text to show the user, possibly spanning several lines
    Reply(String),
    /// The user asked to end the session
    Exit,
}

/// Routes commands to the player and formats catalog listings.
#[derive(Debug)]
pub struct CommandDispatcher<S = RandomSelector> {
    player: Player,
    selector: S,
}

impl<S: VideoSelector> CommandDispatcher<S> {
    pub fn new(player: Player, selector: S) -> Self {
        Self { player, selector }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Parses and runs one line of input. Parse failures become replies.
    pub fn handle_line(&mut self, line: &str) -> CommandOutcome {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(error) => {
                debug!(line, %error, "Rejected input");
                CommandOutcome::Reply(error.to_string())
            }
        }
    }

    /// Runs a parsed command.
    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        debug!(%command, "Executing command");

        let reply = match command {
            Command::NumberOfVideos => self.number_of_videos(),
            Command::ShowAllVideos => self.show_all_videos(),
            Command::Play { video_id } => self.player.play(&video_id),
            Command::PlayRandom => self.player.play_random(&mut self.selector),
            Command::Stop => self.player.stop(),
            Command::Pause => self.player.pause(),
            Command::Continue => self.player.resume(),
            Command::ShowPlaying => self.player.show_playing(),
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => return CommandOutcome::Exit,
        };

        CommandOutcome::Reply(reply)
    }

    fn number_of_videos(&self) -> String {
        format!("{} videos in the library", self.player.catalog().count())
    }

    fn show_all_videos(&self) -> String {
        let mut listing = String::from("Here's a list of all available videos:");
        for video in self.player.catalog().list_all() {
            listing.push_str("\n  ");
            listing.push_str(&video.to_string());
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn dispatcher() -> CommandDispatcher<fn(usize) -> usize> {
        fn first(_len: usize) -> usize {
            0
        }
        CommandDispatcher::new(
            Player::new(Catalog::with_default_videos()),
            first as fn(usize) -> usize,
        )
    }

    fn reply(outcome: CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Reply(text) => text,
            CommandOutcome::Exit => panic!("Expected a reply, got exit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("NUMBER_OF_VIDEOS".parse::<Command>(), Ok(Command::NumberOfVideos));
        assert_eq!("  stop  ".parse::<Command>(), Ok(Command::Stop));
        assert_eq!("Continue".parse::<Command>(), Ok(Command::Continue));
        assert_eq!(
            "play Amazing_ID".parse::<Command>(),
            Ok(Command::Play {
                video_id: "Amazing_ID".to_string()
            })
        );
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("PLAY".parse::<Command>(), Err(CommandError::MissingVideoId));
        assert_eq!(
            "PLAY a b".parse::<Command>(),
            Err(CommandError::MissingVideoId)
        );
        assert_eq!(
            "REWIND".parse::<Command>(),
            Err(CommandError::Unknown {
                name: "REWIND".to_string()
            })
        );
    }

    #[test]
    fn test_number_of_videos() {
        let mut dispatcher = dispatcher();
        assert_eq!(
            reply(dispatcher.handle_line("NUMBER_OF_VIDEOS")),
            "5 videos in the library"
        );
    }

    #[test]
    fn test_show_all_videos() {
        let mut dispatcher = dispatcher();
        let expected = "Here's a list of all available videos:
  Amazing Cats (amazing_cats_video_id) [#cat #animal]
  Another Cat Video (another_cat_video_id) [#cat #animal]
  Funny Dogs (funny_dogs_video_id) [#dog #animal]
  Life at Google (life_at_google_video_id) [#google #career]
  Video about nothing (nothing_video_id) []";

        assert_eq!(reply(dispatcher.handle_line("SHOW_ALL_VIDEOS")), expected);
    }

    #[test]
    fn test_dispatch_to_player() {
        let mut dispatcher = dispatcher();

        assert_eq!(
            reply(dispatcher.handle_line("PLAY_RANDOM")),
            "Playing video: Amazing Cats"
        );
        assert_eq!(
            reply(dispatcher.handle_line("PAUSE")),
            "Pausing video: Amazing Cats"
        );
        assert_eq!(
            reply(dispatcher.handle_line("CONTINUE")),
            "Continuing video: Amazing Cats"
        );
        assert_eq!(
            reply(dispatcher.handle_line("STOP")),
            "Stopping video: Amazing Cats"
        );
        assert!(dispatcher.player().state().is_empty());
    }

    #[test]
    fn test_invalid_input_replies() {
        let mut dispatcher = dispatcher();

        assert_eq!(
            reply(dispatcher.handle_line("DANCE")),
            "Please enter a valid command, type HELP for a list of available commands."
        );
        assert_eq!(
            reply(dispatcher.handle_line("PLAY")),
            "Please enter PLAY command followed by video_id."
        );
    }

    #[test]
    fn test_help_and_exit() {
        let mut dispatcher = dispatcher();

        let help = reply(dispatcher.handle_line("HELP"));
        assert!(help.starts_with("Available commands:"));
        assert!(help.contains("PLAY <video_id>"));
        assert_eq!(dispatcher.handle_line("EXIT"), CommandOutcome::Exit);
    }
}
