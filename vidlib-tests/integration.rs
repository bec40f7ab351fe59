//! Integration tests for vidlib
//!
//! These tests drive the library through its public surface: whole sessions
//! fed from scripted input, catalog files on disk, and randomized command
//! sequences checked against the playback rules.

#[path = "integration/transcript.rs"]
mod transcript;

#[path = "integration/catalog_file.rs"]
mod catalog_file;

#[path = "integration/playback_properties.rs"]
mod playback_properties;
