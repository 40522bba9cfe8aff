//! Playback integration tests driving the store through its public API

use std::time::Duration;

use proptest::prelude::*;

use territory_timeline::catalog::{builtin, Catalog, Territory};
use territory_timeline::core::types::{clamp_year, MAX_YEAR, MIN_YEAR};
use territory_timeline::playback::{
    FrameClock, FrameOutcome, ManualClock, PlaybackEngine, PlaybackState, Speed,
};
use territory_timeline::stats::AggregateStats;
use territory_timeline::store::{Command, SelectionSource, TimelineStore};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn store_without_auto_pause(catalog: Catalog) -> TimelineStore {
    TimelineStore::with_playback(catalog, PlaybackEngine::new(Speed::Normal, false))
}

/// Builtin catalog plus one record acquired three years after the start
fn catalog_with_early_record() -> Catalog {
    let mut early: Territory = builtin::territories()[2].clone();
    early.id = "early_1779".into();
    early.year = MIN_YEAR + 3;
    let mut records = vec![early];
    records.extend(builtin::territories());
    Catalog::new(records)
}

#[test]
fn test_four_frames_at_normal_speed_advance_three_years() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.play();

    let outcomes: Vec<_> = [0, 500, 1000, 1500]
        .into_iter()
        .filter_map(|t| store.tick(ms(t)))
        .collect();

    assert_eq!(outcomes[0], FrameOutcome::Baseline);
    assert_eq!(store.current_year(), MIN_YEAR + 3);
    assert!(store.is_playing());
}

#[test]
fn test_auto_pause_stops_on_record_year() {
    let mut store = TimelineStore::with_playback(
        catalog_with_early_record(),
        PlaybackEngine::new(Speed::Normal, true),
    );
    store.play();

    let mut clock = ManualClock::new();
    let mut last = None;
    for _ in 0..200 {
        let Some(outcome) = store.tick(clock.now()) else {
            break;
        };
        last = Some(outcome);
        clock.advance(ms(16));
    }

    assert_eq!(
        last,
        Some(FrameOutcome::AutoPaused {
            year: MIN_YEAR + 3,
            territory: "early_1779".into(),
        })
    );
    assert_eq!(store.current_year(), MIN_YEAR + 3);
    assert_eq!(store.state(), PlaybackState::Paused);
    assert_eq!(store.selection().source(), Some(SelectionSource::AutoPause));
    assert_eq!(store.selected().map(|t| t.id.as_str()), Some("early_1779"));
}

/// Tick every 16ms until `done` says stop or playback pauses
fn run_until(
    store: &mut TimelineStore,
    clock: &mut ManualClock,
    done: impl Fn(&TimelineStore) -> bool,
) -> Vec<FrameOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..100_000 {
        if done(store) {
            break;
        }
        let Some(outcome) = store.tick(clock.now()) else {
            break;
        };
        outcomes.push(outcome);
        clock.advance(ms(16));
    }
    outcomes
}

#[test]
fn test_auto_pause_toggle_applies_mid_run() {
    let mut store = TimelineStore::new(Catalog::builtin());
    let mut clock = ManualClock::new();
    assert!(store.auto_pause());
    store.play();

    run_until(&mut store, &mut clock, |s| s.current_year() == 1780);
    assert!(store.is_playing());

    store.dispatch(Command::ToggleAutoPause).unwrap();
    let outcomes = run_until(&mut store, &mut clock, |s| s.current_year() == 1790);
    assert!(store.is_playing());
    assert!(!outcomes
        .iter()
        .any(|o| matches!(o, FrameOutcome::AutoPaused { .. })));
    assert!(store.selection().current().is_none());

    store.dispatch(Command::SetAutoPause(true)).unwrap();
    let outcomes = run_until(&mut store, &mut clock, |_| false);
    assert_eq!(
        outcomes.last(),
        Some(&FrameOutcome::AutoPaused {
            year: 1803,
            territory: "louisiana_1803".into(),
        })
    );
    assert_eq!(store.state(), PlaybackState::Paused);
    assert_eq!(store.current_year(), 1803);
}

#[test]
fn test_playing_at_max_year_pauses_without_advancing() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.seek(MAX_YEAR);
    store.play();

    assert_eq!(store.tick(ms(0)), Some(FrameOutcome::Baseline));
    assert_eq!(store.tick(ms(100)), Some(FrameOutcome::Waiting));
    assert_eq!(store.tick(ms(600)), Some(FrameOutcome::ReachedEnd));
    assert_eq!(store.current_year(), MAX_YEAR);
    assert_eq!(store.state(), PlaybackState::Paused);
    assert_eq!(store.tick(ms(1200)), None);
}

#[test]
fn test_reset_from_any_state() {
    let mut store = TimelineStore::new(Catalog::builtin());
    store.seek(1850);
    store.select(&"texas_1845".into()).unwrap();
    store.play();
    store.tick(ms(0));
    store.reset();

    assert_eq!(store.current_year(), MIN_YEAR);
    assert_eq!(store.state(), PlaybackState::Paused);
    assert!(store.selection().current().is_none());
    assert!(store.pending_frame().is_none());
}

#[test]
fn test_manual_select_while_playing_pauses() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.seek(1850);
    store.play();
    store.tick(ms(0));
    store.tick(ms(500));
    assert_eq!(store.current_year(), 1851);

    store
        .dispatch(Command::Select("oregon_1846".into()))
        .unwrap();
    assert_eq!(store.state(), PlaybackState::Paused);
    assert_eq!(store.current_year(), 1851);
    assert_eq!(store.selection().source(), Some(SelectionSource::User));

    // Playing again dismisses the manual pick
    store.play();
    assert!(store.selection().current().is_none());
}

#[test]
fn test_seek_then_play_uses_fresh_baseline() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.play();
    store.tick(ms(0));
    store.tick(ms(500));
    assert_eq!(store.current_year(), MIN_YEAR + 1);

    store.seek(1900);
    store.play();
    // Long gap since the last advancement, but the first frame only sets the baseline
    assert_eq!(store.tick(ms(10_000)), Some(FrameOutcome::Baseline));
    assert_eq!(store.current_year(), 1900);
    assert_eq!(
        store.tick(ms(10_500)),
        Some(FrameOutcome::Advanced { year: 1901 })
    );
}

#[test]
fn test_large_gap_advances_one_year() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.play();
    store.tick(ms(0));
    store.tick(ms(60_000));
    assert_eq!(store.current_year(), MIN_YEAR + 1);
}

#[test]
fn test_stale_frame_is_ignored() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.play();
    let stale = store.pending_frame().unwrap();
    store.pause();
    store.play();

    assert_eq!(store.on_frame(stale, ms(0)), FrameOutcome::Stale);
    assert_eq!(store.tick(ms(0)), Some(FrameOutcome::Baseline));
}

#[test]
fn test_set_speed_keeps_play_state() {
    let mut store = store_without_auto_pause(Catalog::builtin());
    store.play();
    store.dispatch(Command::SetSpeed(Speed::Double)).unwrap();
    assert!(store.is_playing());

    store.tick(ms(0));
    store.tick(ms(250));
    assert_eq!(store.current_year(), MIN_YEAR + 1);

    store.pause();
    store.dispatch(Command::SetSpeed(Speed::Half)).unwrap();
    assert!(!store.is_playing());
}

#[test]
fn test_full_run_resumes_through_every_stop() {
    let mut store = TimelineStore::new(Catalog::builtin());
    let mut clock = ManualClock::new();
    let mut stops = Vec::new();
    store.play();

    for _ in 0..100_000 {
        match store.tick(clock.now()) {
            Some(FrameOutcome::AutoPaused { year, .. }) => {
                stops.push(year);
                store.play();
            }
            Some(FrameOutcome::ReachedEnd) => break,
            Some(_) => {}
            None => break,
        }
        clock.advance(ms(16));
    }

    assert_eq!(
        stops,
        vec![1783, 1803, 1819, 1845, 1846, 1848, 1853, 1867, 1898]
    );
    assert_eq!(store.current_year(), MAX_YEAR);
}

#[test]
fn test_stats_at_max_year_cover_catalog() {
    let catalog = Catalog::builtin();
    let stats = AggregateStats::compute(&catalog, MAX_YEAR);
    assert!((stats.total_area - catalog.total_area()).abs() < 1e-6);
    assert_eq!(stats.active_count, catalog.len());
    assert!(stats.percent_complete <= 100.0);
}

proptest! {
    #[test]
    fn prop_active_set_is_monotonic(a in MIN_YEAR..=MAX_YEAR, b in MIN_YEAR..=MAX_YEAR) {
        let catalog = Catalog::builtin();
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let early_ids: Vec<_> = catalog.active(early).map(|t| t.id.clone()).collect();
        let late_ids: Vec<_> = catalog.active(late).map(|t| t.id.clone()).collect();
        prop_assert!(early_ids.iter().all(|id| late_ids.contains(id)));
    }

    #[test]
    fn prop_seek_always_lands_in_range(year in -10_000i32..10_000) {
        let mut store = TimelineStore::new(Catalog::builtin());
        store.seek(year);
        prop_assert!((MIN_YEAR..=MAX_YEAR).contains(&store.current_year()));
        prop_assert_eq!(store.current_year(), clamp_year(year));
    }

    #[test]
    fn prop_steps_never_leave_range(steps in proptest::collection::vec(-200i32..200, 1..20)) {
        let mut store = TimelineStore::new(Catalog::builtin());
        for step in steps {
            store.dispatch(Command::Step(step)).unwrap();
            prop_assert!((MIN_YEAR..=MAX_YEAR).contains(&store.current_year()));
        }
    }
}
