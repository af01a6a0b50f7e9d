//! Scenario tests for the playback coordinator
//!
//! Walks the coordinator through the listening sessions the views drive:
//! loading queues, skipping around, toggling modes, clearing.

use podcastr_core::Episode;
use podcastr_playback::{PlaybackConfig, PlaybackCoordinator, ShufflePolicy};
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ===== Helpers =====

fn episode(id: &str) -> Episode {
    Episode::new(id, format!("Episode {}", id), Duration::from_secs(1800))
}

fn episodes(ids: &[&str]) -> Vec<Episode> {
    ids.iter().map(|id| episode(id)).collect()
}

fn queue_ids(coordinator: &PlaybackCoordinator) -> Vec<String> {
    coordinator
        .snapshot()
        .queue
        .iter()
        .map(|e| e.id.to_string())
        .collect()
}

fn seeded(policy: ShufflePolicy) -> PlaybackCoordinator {
    PlaybackCoordinator::new(PlaybackConfig {
        shuffle_policy: policy,
        seed: Some(2021),
        ..Default::default()
    })
}

// ===== Sequential Navigation =====

#[test]
fn three_episode_walkthrough() {
    init_tracing();
    let mut coordinator = PlaybackCoordinator::default();

    coordinator.play_queue(episodes(&["A", "B", "C"]), 0).unwrap();
    let snapshot = coordinator.snapshot();
    assert_eq!(queue_ids(&coordinator), vec!["A", "B", "C"]);
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.is_playing);

    coordinator.play_next();
    assert_eq!(coordinator.current_index(), 1);

    coordinator.play_next();
    assert_eq!(coordinator.current_index(), 2);
    assert!(!coordinator.has_next());

    coordinator.play_next();
    assert_eq!(coordinator.current_index(), 2);

    coordinator.play_previous();
    coordinator.play_previous();
    assert_eq!(coordinator.current_index(), 0);
    assert!(!coordinator.has_previous());
}

#[test]
fn n_minus_one_nexts_reach_the_end() {
    init_tracing();

    for len in 1..=8 {
        let ids: Vec<String> = (0..len).map(|i| format!("ep{}", i)).collect();
        let list = ids.iter().map(|id| episode(id)).collect();

        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play_queue(list, 0).unwrap();

        for _ in 0..len - 1 {
            assert!(coordinator.has_next());
            coordinator.play_next();
        }
        assert_eq!(coordinator.current_index(), len - 1);
        assert!(!coordinator.has_next());

        coordinator.play_next();
        assert_eq!(coordinator.current_index(), len - 1);
    }
}

#[test]
fn previous_at_start_is_noop() {
    let mut coordinator = PlaybackCoordinator::default();
    coordinator.play_queue(episodes(&["A", "B"]), 0).unwrap();

    assert!(!coordinator.has_previous());
    coordinator.play_previous();
    assert_eq!(coordinator.current_index(), 0);
}

#[test]
fn play_queue_starts_mid_list() {
    let mut coordinator = PlaybackCoordinator::default();
    coordinator.set_playing_state(false);

    coordinator
        .play_queue(episodes(&["A", "B", "C", "D"]), 2)
        .unwrap();

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.current_index, 2);
    assert!(snapshot.is_playing);
    assert!(snapshot.has_next);
    assert!(snapshot.has_previous);
    assert_eq!(snapshot.current_episode().unwrap().id.as_str(), "C");
}

// ===== Single Episode =====

#[test]
fn play_single_from_any_state() {
    let mut coordinator = PlaybackCoordinator::default();
    coordinator
        .play_queue(episodes(&["A", "B", "C", "D"]), 3)
        .unwrap();
    coordinator.set_playing_state(false);
    coordinator.toggle_shuffle();

    coordinator.play_single(episode("X"));

    let snapshot = coordinator.snapshot();
    assert_eq!(queue_ids(&coordinator), vec!["X"]);
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.is_playing);
    assert!(!snapshot.has_previous);
    // Shuffling keeps has_next true regardless of queue length
    assert!(snapshot.has_next);
}

// ===== Play/Pause and Modes =====

#[test]
fn toggle_play_is_an_involution() {
    let mut coordinator = PlaybackCoordinator::default();

    for initial in [false, true] {
        coordinator.set_playing_state(initial);
        coordinator.toggle_play();
        assert_eq!(coordinator.is_playing(), !initial);
        coordinator.toggle_play();
        assert_eq!(coordinator.is_playing(), initial);
    }
}

#[test]
fn loop_and_shuffle_are_independent() {
    let mut coordinator = PlaybackCoordinator::default();

    coordinator.toggle_loop();
    assert!(coordinator.is_looping());
    assert!(!coordinator.is_shuffling());

    coordinator.toggle_shuffle();
    assert!(coordinator.is_looping());
    assert!(coordinator.is_shuffling());

    coordinator.toggle_loop();
    assert!(!coordinator.is_looping());
    assert!(coordinator.is_shuffling());
}

#[test]
fn clear_resets_queue_only() {
    let mut coordinator = PlaybackCoordinator::default();
    coordinator.play_queue(episodes(&["A", "B", "C"]), 2).unwrap();
    coordinator.toggle_loop();

    coordinator.clear();

    let snapshot = coordinator.snapshot();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.current_index, 0);
    assert!(snapshot.current_episode().is_none());
    assert!(snapshot.is_playing);
    assert!(snapshot.is_looping);
    assert!(!snapshot.is_shuffling);
}

// ===== Shuffle =====

#[test]
fn shuffle_distribution_over_five() {
    init_tracing();
    let mut coordinator = seeded(ShufflePolicy::Uniform);
    coordinator
        .play_queue(episodes(&["A", "B", "C", "D", "E"]), 0)
        .unwrap();
    coordinator.toggle_shuffle();

    let mut counts = [0usize; 5];
    for _ in 0..1000 {
        coordinator.play_next();
        let index = coordinator.current_index();
        assert!(index < 5);
        counts[index] += 1;
    }

    let max = counts.iter().copied().max().unwrap();
    assert!(max < 400, "distribution concentrated: {:?}", counts);
    assert!(counts.iter().all(|&c| c > 0), "unvisited index: {:?}", counts);
}

#[test]
fn avoid_repeat_always_moves() {
    let mut coordinator = seeded(ShufflePolicy::AvoidRepeat);
    coordinator.play_queue(episodes(&["A", "B", "C"]), 0).unwrap();
    coordinator.toggle_shuffle();

    for _ in 0..300 {
        let before = coordinator.current_index();
        coordinator.play_next();
        assert_ne!(coordinator.current_index(), before);
    }
}

#[test]
fn shuffle_off_resumes_sequential_order() {
    let mut coordinator = seeded(ShufflePolicy::Uniform);
    coordinator
        .play_queue(episodes(&["A", "B", "C", "D", "E"]), 0)
        .unwrap();

    coordinator.toggle_shuffle();
    coordinator.play_next();
    coordinator.toggle_shuffle();

    let index = coordinator.current_index();
    coordinator.play_next();
    let expected = if index + 1 < 5 { index + 1 } else { index };
    assert_eq!(coordinator.current_index(), expected);
}

#[test]
fn same_seed_same_shuffle_path() {
    let run = || {
        let mut coordinator = seeded(ShufflePolicy::Uniform);
        coordinator
            .play_queue(episodes(&["A", "B", "C", "D", "E", "F"]), 0)
            .unwrap();
        coordinator.toggle_shuffle();
        (0..20)
            .map(|_| {
                coordinator.play_next();
                coordinator.current_index()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
