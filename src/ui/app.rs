//! Interactive terminal application loop

use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{debug, info, warn};

use crate::core::error::Result;
use crate::playback::{FrameClock, FrameOutcome, MonotonicClock};
use crate::render::MapGeometry;
use crate::store::{Command, TimelineStore};

use super::display;
use super::input::{key_action, mouse_action, resolve_hover, UiAction};
use super::state::UiState;
use super::terminal::TerminalGuard;

/// Terminal front end driving a `TimelineStore`
pub struct App {
    store: TimelineStore,
    geometry: MapGeometry,
    ui: UiState,
    clock: MonotonicClock,
    frame_interval: Duration,
}

impl App {
    pub fn new(
        store: TimelineStore,
        geometry: MapGeometry,
        ui: UiState,
        frame_interval: Duration,
    ) -> Self {
        Self {
            store,
            geometry,
            ui,
            clock: MonotonicClock::new(),
            frame_interval,
        }
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    /// Run until the user quits. The terminal is restored on every exit path.
    pub fn run(mut self) -> Result<TimelineStore> {
        let mut guard = TerminalGuard::new()?;
        info!(year = self.store.current_year(), "app.started");

        let result = self.event_loop(&mut guard);
        self.store.shutdown();
        drop(guard);

        result?;
        info!(year = self.store.current_year(), "app.stopped");
        Ok(self.store)
    }

    fn event_loop(&mut self, guard: &mut TerminalGuard) -> Result<()> {
        loop {
            guard
                .terminal()
                .draw(|frame| display::draw(frame, &self.store, &self.geometry, &mut self.ui))?;

            if event::poll(self.frame_interval)? {
                let action = match event::read()? {
                    Event::Key(key) => key_action(key),
                    Event::Mouse(mouse) => {
                        mouse_action(mouse, &self.ui, &self.store, &self.geometry)
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    if !self.apply(action) {
                        return Ok(());
                    }
                }
            }

            if let Some(outcome) = self.store.tick(self.clock.now()) {
                log_outcome(&outcome);
            }
            self.refresh_hover();
        }
    }

    /// Apply one UI action. Returns false when the app should exit.
    fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Command(command) => self.dispatch(command),
            UiAction::ToggleStats => self.ui.toggle_stats(),
            UiAction::PointerMoved { column, row } => self.ui.set_pointer(column, row),
            UiAction::BeginSeekDrag(year) => {
                self.ui.dragging_seek = true;
                self.dispatch(Command::Seek(year));
            }
            UiAction::EndSeekDrag => self.ui.dragging_seek = false,
            UiAction::Quit => return false,
        }
        true
    }

    /// Re-resolve hover against the current year and pointer cell
    fn refresh_hover(&mut self) {
        resolve_hover(&mut self.ui, &self.store, &self.geometry);
    }

    fn dispatch(&mut self, command: Command) {
        if let Err(err) = self.store.dispatch(command) {
            warn!(error = %err, "app.command_rejected");
        }
    }
}

fn log_outcome(outcome: &FrameOutcome) {
    match outcome {
        FrameOutcome::AutoPaused { year, territory } => {
            info!(year, territory = %territory, "app.auto_paused");
        }
        FrameOutcome::ReachedEnd => info!("app.reached_end"),
        FrameOutcome::Stale => debug!("app.stale_frame"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::types::MIN_YEAR;
    use crate::playback::Speed;

    fn app() -> App {
        let store = TimelineStore::new(Catalog::builtin());
        let geometry = MapGeometry::build(store.catalog()).unwrap();
        App::new(store, geometry, UiState::default(), Duration::from_millis(16))
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut app = app();
        assert!(app.apply(UiAction::Command(Command::TogglePlay)));
        assert!(app.store().is_playing());
        assert!(!app.apply(UiAction::Quit));
    }

    #[test]
    fn test_seek_drag_tracks_state() {
        let mut app = app();
        assert!(app.apply(UiAction::BeginSeekDrag(1850)));
        assert!(app.ui.dragging_seek);
        assert_eq!(app.store().current_year(), 1850);
        app.apply(UiAction::EndSeekDrag);
        assert!(!app.ui.dragging_seek);
    }

    #[test]
    fn test_rejected_command_keeps_running() {
        let mut app = app();
        assert!(app.apply(UiAction::Command(Command::Select("atlantis".into()))));
        assert!(app.store().selection().current().is_none());
        assert_eq!(app.store().current_year(), MIN_YEAR);
    }

    #[test]
    fn test_hover_refreshes_when_year_changes() {
        let mut app = app();
        app.ui.hitboxes.map = Some(ratatui::layout::Rect::new(0, 0, 96, 60));
        app.apply(UiAction::PointerMoved { column: 48, row: 22 });
        app.apply(UiAction::Command(Command::Seek(1802)));
        app.refresh_hover();
        assert_eq!(app.ui.hovered, None);

        app.apply(UiAction::Command(Command::Step(1)));
        app.refresh_hover();
        assert_eq!(app.ui.hovered, Some(1));
    }

    #[test]
    fn test_speed_and_stats_actions() {
        let mut app = app();
        app.apply(UiAction::Command(Command::SetSpeed(Speed::Half)));
        app.apply(UiAction::ToggleStats);
        assert_eq!(app.store().speed(), Speed::Half);
        assert!(app.ui.stats_expanded);
    }
}
