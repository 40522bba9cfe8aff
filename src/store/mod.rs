//! Shared timeline state
//!
//! `TimelineStore` is the one state object every view reads. It owns the
//! catalog, the playback engine and the selection controller, and is the only
//! place either of them is mutated.

pub mod command;
pub mod selection;

pub use command::Command;
pub use selection::{Selected, SelectionController, SelectionSource};

use std::time::Duration;

use crate::catalog::{Catalog, Territory};
use crate::core::error::{Result, TimelineError};
use crate::core::types::{TerritoryId, Year};
use crate::playback::{FrameOutcome, FrameRequest, PlaybackEngine, PlaybackState, Speed};
use crate::stats::AggregateStats;

#[derive(Debug)]
pub struct TimelineStore {
    catalog: Catalog,
    playback: PlaybackEngine,
    selection: SelectionController,
}

impl TimelineStore {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_playback(catalog, PlaybackEngine::default())
    }

    pub fn with_playback(catalog: Catalog, playback: PlaybackEngine) -> Self {
        Self {
            catalog,
            playback,
            selection: SelectionController::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackEngine {
        &self.playback
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn current_year(&self) -> Year {
        self.playback.current_year()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn speed(&self) -> Speed {
        self.playback.speed()
    }

    pub fn auto_pause(&self) -> bool {
        self.playback.auto_pause()
    }

    /// The selected record, resolved against the catalog
    pub fn selected(&self) -> Option<&Territory> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    pub fn stats(&self) -> AggregateStats {
        AggregateStats::compute(&self.catalog, self.current_year())
    }

    /// Apply a command. Only `Select` with an unknown id can fail.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::TogglePlay => {
                if self.is_playing() {
                    self.pause();
                } else {
                    self.play();
                }
            }
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Reset => self.reset(),
            Command::Seek(year) => self.seek(year),
            Command::Step(delta) => self.seek(self.current_year().saturating_add(delta)),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::SetAutoPause(enabled) => self.set_auto_pause(enabled),
            Command::ToggleAutoPause => self.set_auto_pause(!self.auto_pause()),
            Command::Select(id) => self.select(&id)?,
            Command::SelectNext => self.cycle_selection(true),
            Command::SelectPrevious => self.cycle_selection(false),
            Command::ClearSelection => self.clear_selection(),
        }
        Ok(())
    }

    /// Start playing. A selection the user picked is dismissed; one made by
    /// auto-pause stays until replaced or dismissed.
    pub fn play(&mut self) {
        if self.selection.source() == Some(SelectionSource::User) {
            self.selection.clear();
        }
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn reset(&mut self) {
        self.playback.reset();
        self.selection.clear();
    }

    /// Jump to a year, paused. Selection is left alone.
    pub fn seek(&mut self, year: Year) {
        self.playback.seek(year);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.playback.set_speed(speed);
    }

    pub fn set_auto_pause(&mut self, enabled: bool) {
        self.playback.set_auto_pause(enabled);
    }

    /// User pick. Always pauses playback; the year is unchanged.
    pub fn select(&mut self, id: &TerritoryId) -> Result<()> {
        if self.catalog.get(id).is_none() {
            return Err(TimelineError::TerritoryNotFound(id.clone()));
        }
        self.playback.pause();
        self.selection.select(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn cycle_selection(&mut self, forward: bool) {
        let year = self.current_year();
        let active: Vec<&TerritoryId> = self.catalog.active(year).map(|t| &t.id).collect();
        if active.is_empty() {
            return;
        }

        let position = self
            .selection
            .id()
            .and_then(|id| active.iter().position(|a| *a == id));
        let next = match (position, forward) {
            (Some(p), true) => (p + 1) % active.len(),
            (Some(p), false) => (p + active.len() - 1) % active.len(),
            (None, true) => 0,
            (None, false) => active.len() - 1,
        };

        let id = active[next].clone();
        self.playback.pause();
        self.selection.select(id);
    }

    /// The frame the host should deliver next, if playing
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.playback.pending_frame()
    }

    /// Deliver a frame timestamp. Auto-pause hits become system selections.
    pub fn on_frame(&mut self, request: FrameRequest, timestamp: Duration) -> FrameOutcome {
        let outcome = self.playback.on_frame(request, timestamp, &self.catalog);
        if let FrameOutcome::AutoPaused { territory, .. } = &outcome {
            self.selection.select_by_system(territory.clone());
        }
        outcome
    }

    /// Deliver a frame only if one is pending
    pub fn tick(&mut self, timestamp: Duration) -> Option<FrameOutcome> {
        let request = self.pending_frame()?;
        Some(self.on_frame(request, timestamp))
    }

    /// Cancel outstanding work before the views go away
    pub fn shutdown(&mut self) {
        self.playback.cancel();
        tracing::debug!("store.shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MIN_YEAR;

    fn store() -> TimelineStore {
        TimelineStore::new(Catalog::builtin())
    }

    #[test]
    fn test_select_unknown_id_fails() {
        let mut store = store();
        let err = store.dispatch(Command::Select(TerritoryId::from("nowhere")));
        assert!(matches!(err, Err(TimelineError::TerritoryNotFound(_))));
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_play_after_user_pick_clears_selection() {
        let mut store = store();
        store.seek(1850);
        store.select(&TerritoryId::from("texas_1845")).unwrap();
        store.play();
        assert!(store.selected().is_none());
        assert!(store.is_playing());
    }

    #[test]
    fn test_play_after_auto_pause_keeps_selection() {
        let mut store = store();
        store.selection.select_by_system(TerritoryId::from("florida_1819"));
        store.play();
        assert_eq!(
            store.selected().map(|t| t.id.as_str()),
            Some("florida_1819")
        );
    }

    #[test]
    fn test_seek_keeps_selection() {
        let mut store = store();
        store.seek(1900);
        store.select(&TerritoryId::from("hawaii_1898")).unwrap();
        store.dispatch(Command::Seek(1800)).unwrap();
        assert_eq!(store.current_year(), 1800);
        assert!(store.selected().is_some());
    }

    #[test]
    fn test_step_is_clamped() {
        let mut store = store();
        store.dispatch(Command::Step(-5)).unwrap();
        assert_eq!(store.current_year(), MIN_YEAR);
        store.dispatch(Command::Step(10)).unwrap();
        assert_eq!(store.current_year(), MIN_YEAR + 10);
    }

    #[test]
    fn test_cycle_selection_over_active_records() {
        let mut store = store();
        store.dispatch(Command::SelectNext).unwrap();
        assert!(store.selected().is_none(), "nothing active in 1776");

        store.seek(1819);
        store.dispatch(Command::SelectNext).unwrap();
        assert_eq!(store.selected().unwrap().id.as_str(), "original_1783");
        store.dispatch(Command::SelectPrevious).unwrap();
        assert_eq!(store.selected().unwrap().id.as_str(), "florida_1819");
        store.dispatch(Command::SelectNext).unwrap();
        assert_eq!(store.selected().unwrap().id.as_str(), "original_1783");
    }

    #[test]
    fn test_toggle_auto_pause() {
        let mut store = store();
        store.dispatch(Command::ToggleAutoPause).unwrap();
        assert!(!store.auto_pause());
        store.dispatch(Command::SetAutoPause(true)).unwrap();
        assert!(store.auto_pause());
    }

    #[test]
    fn test_tick_without_pending_frame() {
        let mut store = store();
        assert_eq!(store.tick(Duration::from_millis(10)), None);
    }

    #[test]
    fn test_shutdown_cancels_pending_frame() {
        let mut store = store();
        store.play();
        let request = store.pending_frame().unwrap();
        store.shutdown();
        assert_eq!(
            store.on_frame(request, Duration::from_secs(10)),
            FrameOutcome::Stale
        );
        assert_eq!(store.current_year(), MIN_YEAR);
    }
}
