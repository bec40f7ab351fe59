//! Interactive read-dispatch-reply loop.
//!
//! The session is generic over its input and output so the binary can hand
//! it stdin/stdout while tests feed it an in-memory script.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::command::{CommandDispatcher, CommandOutcome};
use crate::config::{SessionConfig, VidlibConfig};
use crate::player::Player;
use crate::selection::{RandomSelector, VideoSelector};

pub const GREETING: &str = "Hello and welcome to YouTube, what would you like to do? \
Enter HELP for list of available commands or EXIT to terminate.";

pub const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Lines read, including invalid ones
    pub lines_read: usize,
    /// Whether the session ended on `EXIT` rather than end of input
    pub exited_by_command: bool,
}

/// One interactive run of the video library.
#[derive(Debug)]
pub struct Session<S = RandomSelector> {
    dispatcher: CommandDispatcher<S>,
    config: SessionConfig,
}

impl Session<RandomSelector> {
    /// Builds a session from configuration: catalog source, seed, prompt.
    ///
    /// # Errors
    /// - `VidlibError::Configuration` - Invalid session settings
    /// - `VidlibError::Catalog` - Catalog file missing or malformed
    pub fn from_config(config: &VidlibConfig) -> crate::Result<Self> {
        config.validate()?;

        let catalog = Catalog::from_config(&config.catalog)?;
        let selector = RandomSelector::from_seed_option(config.playback.random_seed);

        Ok(Self::new(
            CommandDispatcher::new(Player::new(catalog), selector),
            config.session.clone(),
        ))
    }
}

impl<S: VideoSelector> Session<S> {
    pub fn new(dispatcher: CommandDispatcher<S>, config: SessionConfig) -> Self {
        Self { dispatcher, config }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher<S> {
        &self.dispatcher
    }

    /// Reads commands until `EXIT` or end of input, writing every reply.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and answered like
    /// any other unrecognized input.
    ///
    /// # Errors
    /// - `std::io::Error` - Reading input or writing output failed
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> io::Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        info!(
            videos = self.dispatcher.player().catalog().count(),
            "Session started"
        );

        let mut summary = SessionSummary::default();
        let mut buffer = Vec::new();

        writeln!(output, "{GREETING}")?;
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                // Keep the farewell off the prompt line.
                writeln!(output)?;
                break;
            }
            summary.lines_read += 1;

            let line = decode_line(&buffer);

            if self.config.echo_commands {
                writeln!(output, "{line}")?;
            }

            match self.dispatcher.handle_line(&line) {
                CommandOutcome::Reply(reply) => writeln!(output, "{reply}")?,
                CommandOutcome::Exit => {
                    summary.exited_by_command = true;
                    break;
                }
            }
        }
        writeln!(output, "{FAREWELL}")?;
        output.flush()?;

        info!(
            lines = summary.lines_read,
            exited_by_command = summary.exited_by_command,
            "Session ended"
        );

        Ok(summary)
    }
}

/// Strips the line terminator and replaces invalid UTF-8 sequences.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = &line {
        warn!(bytes = raw.len(), "Input line is not valid UTF-8");
    }
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str, echo: bool) -> (String, SessionSummary) {
        let mut config = VidlibConfig::for_testing();
        config.session.echo_commands = echo;
        let mut session = Session::from_config(&config).unwrap();

        let mut output = Vec::new();
        let summary = session.run(Cursor::new(script), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_exit_command_ends_session() {
        let (output, summary) = run_script("NUMBER_OF_VIDEOS\nexit\nSTOP\n", true);

        let expected = format!(
            "{GREETING}\nYT> NUMBER_OF_VIDEOS\n5 videos in the library\nYT> exit\n{FAREWELL}\n"
        );
        assert_eq!(output, expected);
        assert_eq!(summary.lines_read, 2);
        assert!(summary.exited_by_command);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, summary) = run_script("STOP\n", false);

        let expected = format!(
            "{GREETING}\nYT> Cannot stop video: No video is currently playing\nYT> \n{FAREWELL}\n"
        );
        assert_eq!(output, expected);
        assert_eq!(summary.lines_read, 1);
        assert!(!summary.exited_by_command);
    }

    #[test]
    fn test_blank_line_gets_hint() {
        let (output, _) = run_script("\nEXIT\n", true);
        assert!(output.contains(
            "YT> \nPlease enter a valid command, type HELP for a list of available commands.\n"
        ));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_alive() {
        let mut session = Session::from_config(&VidlibConfig::for_testing()).unwrap();
        let input: &[u8] = b"PLAY amazing_cats_video_id\n\xff\xfe\nSHOW_PLAYING\nEXIT\n";

        let mut output = Vec::new();
        let summary = session.run(input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains(
            "Please enter a valid command, type HELP for a list of available commands.\n\
             YT> SHOW_PLAYING\n\
             Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]\n"
        ));
        assert!(output.ends_with(&format!("YT> EXIT\n{FAREWELL}\n")));
        assert_eq!(summary.lines_read, 4);
        assert!(summary.exited_by_command);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (output, _) = run_script("NUMBER_OF_VIDEOS\r\nEXIT\r\n", true);
        assert!(output.contains("YT> NUMBER_OF_VIDEOS\n5 videos in the library\n"));
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let mut config = VidlibConfig::for_testing();
        config.catalog.source_path = Some("/nonexistent/videos.txt".into());

        let error = Session::from_config(&config).unwrap_err();
        assert!(matches!(error, crate::VidlibError::Catalog(_)));
    }
}
