//! Randomized command sequences checked against a reference model.

use proptest::prelude::*;
use vidlib_core::{Catalog, PlaybackState, Player};

#[derive(Debug, Clone)]
enum Op {
    Play(usize),
    PlayUnknown,
    PlayRandom(usize),
    Stop,
    Pause,
    Continue,
    ShowPlaying,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..5).prop_map(Op::Play),
        Just(Op::PlayUnknown),
        (0usize..5).prop_map(Op::PlayRandom),
        Just(Op::Stop),
        Just(Op::Pause),
        Just(Op::Continue),
        Just(Op::ShowPlaying),
    ]
}

/// Loaded video position and paused flag.
type Model = Option<(usize, bool)>;

fn expected_state(catalog: &Catalog, model: Model) -> PlaybackState {
    match model {
        None => PlaybackState::Empty,
        Some((position, paused)) => {
            let video_id = catalog.list_all()[position].video_id().to_string();
            if paused {
                PlaybackState::Paused { video_id }
            } else {
                PlaybackState::Playing { video_id }
            }
        }
    }
}

fn expected_play(catalog: &Catalog, model: &mut Model, position: usize) -> String {
    let title = catalog.list_all()[position].title();
    let reply = match model {
        Some((current, _)) => format!(
            "Stopping video: {}\nPlaying video: {title}",
            catalog.list_all()[*current].title()
        ),
        None => format!("Playing video: {title}"),
    };
    *model = Some((position, false));
    reply
}

proptest! {
    #[test]
    fn player_matches_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let catalog = Catalog::with_default_videos();
        let mut player = Player::new(catalog.clone());
        let mut model: Model = None;

        for op in ops {
            let (reply, expected) = match op {
                Op::Play(position) => {
                    let video_id = catalog.list_all()[position].video_id().to_string();
                    (player.play(&video_id), expected_play(&catalog, &mut model, position))
                }
                Op::PlayUnknown => (
                    player.play("some_other_video_id"),
                    "Cannot play video: Video does not exist".to_string(),
                ),
                Op::PlayRandom(position) => {
                    let mut selector = move |_len: usize| position;
                    (
                        player.play_random(&mut selector),
                        expected_play(&catalog, &mut model, position),
                    )
                }
                Op::Stop => {
                    let expected = match model.take() {
                        Some((current, _)) => {
                            format!("Stopping video: {}", catalog.list_all()[current].title())
                        }
                        None => "Cannot stop video: No video is currently playing".to_string(),
                    };
                    (player.stop(), expected)
                }
                Op::Pause => {
                    let expected = match &mut model {
                        None => "Cannot pause video: No video is currently playing".to_string(),
                        Some((current, paused)) => {
                            let title = catalog.list_all()[*current].title();
                            if *paused {
                                format!("Video already paused: {title}")
                            } else {
                                *paused = true;
                                format!("Pausing video: {title}")
                            }
                        }
                    };
                    (player.pause(), expected)
                }
                Op::Continue => {
                    let expected = match &mut model {
                        None => "Cannot continue video: No video is currently playing".to_string(),
                        Some((current, paused)) => {
                            if *paused {
                                *paused = false;
                                format!("Continuing video: {}", catalog.list_all()[*current].title())
                            } else {
                                "Cannot continue video: Video is not paused".to_string()
                            }
                        }
                    };
                    (player.resume(), expected)
                }
                Op::ShowPlaying => {
                    let expected = match model {
                        None => "No video is currently playing".to_string(),
                        Some((current, paused)) => {
                            let suffix = if paused { " - PAUSED" } else { "" };
                            format!("Currently playing: {}{suffix}", catalog.list_all()[current])
                        }
                    };
                    (player.show_playing(), expected)
                }
            };

            prop_assert_eq!(reply, expected);
            prop_assert_eq!(player.state(), &expected_state(&catalog, model));
        }
    }

    #[test]
    fn repeated_refusals_are_stable(repeats in 1usize..8) {
        let mut player = Player::new(Catalog::with_default_videos());

        for _ in 0..repeats {
            prop_assert_eq!(
                player.stop(),
                "Cannot stop video: No video is currently playing"
            );
            prop_assert_eq!(
                player.resume(),
                "Cannot continue video: No video is currently playing"
            );
            prop_assert!(player.state().is_empty());
        }
    }

    #[test]
    fn unknown_ids_never_change_state(
        video_id in "[a-z_]{1,24}",
        paused in any::<bool>(),
    ) {
        let catalog = Catalog::with_default_videos();
        prop_assume!(catalog.find(&video_id).is_none());

        let mut player = Player::new(catalog);
        player.play("funny_dogs_video_id");
        if paused {
            player.pause();
        }
        let before = player.state().clone();

        prop_assert_eq!(
            player.play(&video_id),
            "Cannot play video: Video does not exist"
        );
        prop_assert_eq!(player.state(), &before);
    }
}
