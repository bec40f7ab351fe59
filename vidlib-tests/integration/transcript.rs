//! Replays the reference YouTube session end to end.

use std::io::Cursor;

use vidlib_core::config::SessionConfig;
use vidlib_core::session::{FAREWELL, GREETING};
use vidlib_core::{Catalog, CommandDispatcher, Player, Session};

const SCRIPT: &str = "\
NUMBER_OF_VIDEOS
SHOW_ALL_VIDEOS
PLAY amazing_cats_video_id
PLAY funny_dogs_video_id
PLAY funny_dogs_video_id
PLAY some_other_video_id
PLAY amazing_cats_video_id
STOP
STOP
PLAY_RANDOM
PLAY_RANDOM
PLAY amazing_cats_video_id
PAUSE
PAUSE
STOP
PAUSE
PLAY amazing_cats_video_id
PAUSE
PLAY another_cat_video_id
PAUSE
PLAY amazing_cats_video_id
CONTINUE
PAUSE
CONTINUE
CONTINUE
STOP
CONTINUE
PLAY amazing_cats_video_id
SHOW_PLAYING
PAUSE
SHOW_PLAYING
STOP
SHOW_PLAYING
EXIT
";

const EXPECTED_REPLIES: &str = "\
YT> NUMBER_OF_VIDEOS
5 videos in the library
YT> SHOW_ALL_VIDEOS
Here's a list of all available videos:
  Amazing Cats (amazing_cats_video_id) [#cat #animal]
  Another Cat Video (another_cat_video_id) [#cat #animal]
  Funny Dogs (funny_dogs_video_id) [#dog #animal]
  Life at Google (life_at_google_video_id) [#google #career]
  Video about nothing (nothing_video_id) []
YT> PLAY amazing_cats_video_id
Playing video: Amazing Cats
YT> PLAY funny_dogs_video_id
Stopping video: Amazing Cats
Playing video: Funny Dogs
YT> PLAY funny_dogs_video_id
Stopping video: Funny Dogs
Playing video: Funny Dogs
YT> PLAY some_other_video_id
Cannot play video: Video does not exist
YT> PLAY amazing_cats_video_id
Stopping video: Funny Dogs
Playing video: Amazing Cats
YT> STOP
Stopping video: Amazing Cats
YT> STOP
Cannot stop video: No video is currently playing
YT> PLAY_RANDOM
Playing video: Life at Google
YT> PLAY_RANDOM
Stopping video: Life at Google
Playing video: Funny Dogs
YT> PLAY amazing_cats_video_id
Stopping video: Funny Dogs
Playing video: Amazing Cats
YT> PAUSE
Pausing video: Amazing Cats
YT> PAUSE
Video already paused: Amazing Cats
YT> STOP
Stopping video: Amazing Cats
YT> PAUSE
Cannot pause video: No video is currently playing
YT> PLAY amazing_cats_video_id
Playing video: Amazing Cats
YT> PAUSE
Pausing video: Amazing Cats
YT> PLAY another_cat_video_id
Stopping video: Amazing Cats
Playing video: Another Cat Video
YT> PAUSE
Pausing video: Another Cat Video
YT> PLAY amazing_cats_video_id
Stopping video: Another Cat Video
Playing video: Amazing Cats
YT> CONTINUE
Cannot continue video: Video is not paused
YT> PAUSE
Pausing video: Amazing Cats
YT> CONTINUE
Continuing video: Amazing Cats
YT> CONTINUE
Cannot continue video: Video is not paused
YT> STOP
Stopping video: Amazing Cats
YT> CONTINUE
Cannot continue video: No video is currently playing
YT> PLAY amazing_cats_video_id
Playing video: Amazing Cats
YT> SHOW_PLAYING
Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]
YT> PAUSE
Pausing video: Amazing Cats
YT> SHOW_PLAYING
Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED
YT> STOP
Stopping video: Amazing Cats
YT> SHOW_PLAYING
No video is currently playing
YT> EXIT
";

#[test]
fn test_reference_session_transcript() {
    // Random picks in the reference run: Life at Google, then Funny Dogs.
    let mut picks = [3usize, 2].into_iter();
    let selector = move |_len: usize| picks.next().unwrap_or(0);

    let dispatcher = CommandDispatcher::new(Player::new(Catalog::with_default_videos()), selector);
    let config = SessionConfig {
        prompt: "YT> ".to_string(),
        echo_commands: true,
    };
    let mut session = Session::new(dispatcher, config);

    let mut output = Vec::new();
    let summary = session.run(Cursor::new(SCRIPT), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    let expected = format!("{GREETING}\n{EXPECTED_REPLIES}{FAREWELL}\n");
    assert_eq!(output, expected);
    assert_eq!(summary.lines_read, SCRIPT.lines().count());
    assert!(summary.exited_by_command);
    assert!(session.dispatcher().player().state().is_empty());
}

#[test]
fn test_seeded_sessions_repeat_random_picks() -> anyhow::Result<()> {
    let script = "PLAY_RANDOM\nPLAY_RANDOM\nPLAY_RANDOM\nSHOW_PLAYING\n";

    let mut config = vidlib_core::VidlibConfig::for_testing();
    config.playback.random_seed = Some(2024);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let mut session = Session::from_config(&config)?;
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output)?;
        outputs.push(String::from_utf8(output)?);
    }

    assert_eq!(outputs[0], outputs[1]);
    assert!(outputs[0].contains("Currently playing: "));
    Ok(())
}
