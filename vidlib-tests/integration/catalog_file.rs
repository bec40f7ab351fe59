//! Sessions running over catalogs loaded from disk.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use vidlib_core::{CatalogError, Session, VidlibConfig, VidlibError};

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(config: &VidlibConfig, script: &str) -> String {
    let mut session = Session::from_config(config).unwrap();
    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_session_over_catalog_file() {
    let file = catalog_file(
        "Tutorial on C++ | Tutorial_on_C++_id |  #tutorial , #coding\n\
         Endgame trailer | endgame_trailer_id |  #trailers , #entertainment\n\
         Video about nothing | nothing_video_id |\n",
    );
    let mut config = VidlibConfig::for_testing();
    config.catalog.source_path = Some(file.path().to_path_buf());

    let output = run(
        &config,
        "NUMBER_OF_VIDEOS\nSHOW_ALL_VIDEOS\nPLAY endgame_trailer_id\nPAUSE\nSHOW_PLAYING\nEXIT\n",
    );

    assert!(output.contains("3 videos in the library"));
    assert!(output.contains(
        "Here's a list of all available videos:\n  \
         Tutorial on C++ (Tutorial_on_C++_id) [#tutorial #coding]\n  \
         Endgame trailer (endgame_trailer_id) [#trailers #entertainment]\n  \
         Video about nothing (nothing_video_id) []\n"
    ));
    assert!(output.contains(
        "Currently playing: Endgame trailer (endgame_trailer_id) [#trailers #entertainment] - PAUSED"
    ));
}

#[test]
fn test_empty_catalog_file_random_play() {
    let file = catalog_file("\n\n");
    let mut config = VidlibConfig::for_testing();
    config.catalog.source_path = Some(file.path().to_path_buf());

    let output = run(&config, "NUMBER_OF_VIDEOS\nPLAY_RANDOM\nSHOW_PLAYING\nEXIT\n");

    assert!(output.contains("0 videos in the library"));
    assert!(output.contains("YT> PLAY_RANDOM\nNo videos available\n"));
    assert!(output.contains("YT> SHOW_PLAYING\nNo video is currently playing\n"));
}

#[test]
fn test_malformed_catalog_file_rejected() {
    let file = catalog_file("Good | good_id | #ok\nno separators here\n");
    let mut config = VidlibConfig::for_testing();
    config.catalog.source_path = Some(file.path().to_path_buf());

    let error = Session::from_config(&config).unwrap_err();
    assert!(matches!(
        error,
        VidlibError::Catalog(CatalogError::MalformedEntry { line: 2, .. })
    ));
    assert!(error.is_user_error());
}

#[test]
fn test_duplicate_ids_rejected() {
    let file = catalog_file("One | dup_id |\nTwo | dup_id |\n");
    let mut config = VidlibConfig::for_testing();
    config.catalog.source_path = Some(file.path().to_path_buf());

    let error = Session::from_config(&config).unwrap_err();
    assert_eq!(
        error.user_message(),
        "Catalog file lists video dup_id more than once"
    );
}
