//! Keyboard and mouse handling
//!
//! Translates terminal events into `UiAction`s. Nothing here mutates state;
//! the app loop applies the returned actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::core::types::{Point, Year, MAP_HEIGHT, MAP_WIDTH, MAX_YEAR, MIN_YEAR};
use crate::playback::Speed;
use crate::render::MapGeometry;
use crate::store::{Command, TimelineStore};

use super::state::{rect_contains, UiState};

/// Result of handling one input event
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Command(Command),
    ToggleStats,
    /// Pointer moved to a terminal cell
    PointerMoved { column: u16, row: u16 },
    BeginSeekDrag(Year),
    EndSeekDrag,
    Quit,
}

/// Key bindings. Space always maps to play/pause so the host never sees it.
pub fn key_action(key: KeyEvent) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiAction::Quit);
    }

    let command = match key.code {
        KeyCode::Char(' ') => Command::TogglePlay,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
        KeyCode::Char('1') => Command::SetSpeed(Speed::Half),
        KeyCode::Char('2') => Command::SetSpeed(Speed::Normal),
        KeyCode::Char('3') => Command::SetSpeed(Speed::Double),
        KeyCode::Char('a') | KeyCode::Char('A') => Command::ToggleAutoPause,
        KeyCode::Left => Command::Step(-1),
        KeyCode::Right => Command::Step(1),
        KeyCode::Home => Command::Seek(MIN_YEAR),
        KeyCode::End => Command::Seek(MAX_YEAR),
        KeyCode::Tab => Command::SelectNext,
        KeyCode::BackTab => Command::SelectPrevious,
        KeyCode::Esc => Command::ClearSelection,
        KeyCode::Char('s') | KeyCode::Char('S') => return Some(UiAction::ToggleStats),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(UiAction::Quit),
        _ => return None,
    };
    Some(UiAction::Command(command))
}

/// Map a terminal cell inside the canvas area to canvas coordinates
/// (path space, y grows downward)
pub fn cell_to_canvas(area: Rect, column: u16, row: u16) -> Option<Point> {
    if area.width == 0 || area.height == 0 || !rect_contains(area, column, row) {
        return None;
    }
    let fx = (column - area.x) as f64 + 0.5;
    let fy = (row - area.y) as f64 + 0.5;
    Some(Point::new(
        fx / area.width as f64 * MAP_WIDTH,
        fy / area.height as f64 * MAP_HEIGHT,
    ))
}

/// Year under a seek track column, clamped to the track ends
pub fn track_year(track: Rect, column: u16) -> Year {
    if track.width <= 1 {
        return MIN_YEAR;
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1) as f64;
    let fraction = offset / (track.width - 1) as f64;
    MIN_YEAR + (fraction * (MAX_YEAR - MIN_YEAR) as f64).round() as Year
}

/// Column of the seek thumb for `year`
pub fn track_column(track: Rect, year: Year) -> u16 {
    if track.width <= 1 {
        return track.x;
    }
    let fraction = (year - MIN_YEAR) as f64 / (MAX_YEAR - MIN_YEAR) as f64;
    track.x + (fraction.clamp(0.0, 1.0) * (track.width - 1) as f64).round() as u16
}

/// Recompute the hovered region from the last pointer cell. Regions
/// appear and disappear as the year changes, so this runs every frame and
/// not only when the pointer moves.
pub fn resolve_hover(ui: &mut UiState, store: &TimelineStore, geometry: &MapGeometry) {
    ui.hovered = ui
        .pointer
        .zip(ui.hitboxes.map)
        .and_then(|((column, row), area)| cell_to_canvas(area, column, row))
        .and_then(|point| geometry.hit_test(store.catalog(), store.current_year(), point));
}

pub fn mouse_action(
    mouse: MouseEvent,
    ui: &UiState,
    store: &TimelineStore,
    geometry: &MapGeometry,
) -> Option<UiAction> {
    let (column, row) = (mouse.column, mouse.row);
    let hit = |rect: Option<Rect>| rect.is_some_and(|r| rect_contains(r, column, row));
    let boxes = &ui.hitboxes;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(boxes.detail_close) {
                return Some(UiAction::Command(Command::ClearSelection));
            }
            if hit(boxes.play) {
                return Some(UiAction::Command(Command::TogglePlay));
            }
            if hit(boxes.reset) {
                return Some(UiAction::Command(Command::Reset));
            }
            if let Some((speed, _)) = boxes
                .speeds
                .iter()
                .flatten()
                .find(|(_, rect)| rect_contains(*rect, column, row))
            {
                return Some(UiAction::Command(Command::SetSpeed(*speed)));
            }
            if hit(boxes.auto_pause) {
                return Some(UiAction::Command(Command::ToggleAutoPause));
            }
            if hit(boxes.stats_header) {
                return Some(UiAction::ToggleStats);
            }
            if let Some(track) = boxes.seek_track.filter(|r| rect_contains(*r, column, row)) {
                return Some(UiAction::BeginSeekDrag(track_year(track, column)));
            }
            let point = boxes.map.and_then(|area| cell_to_canvas(area, column, row))?;
            let index = geometry.hit_test(store.catalog(), store.current_year(), point)?;
            let territory = store.catalog().at(index)?;
            Some(UiAction::Command(Command::Select(territory.id.clone())))
        }
        MouseEventKind::Drag(MouseButton::Left) if ui.dragging_seek => {
            let track = boxes.seek_track?;
            Some(UiAction::Command(Command::Seek(track_year(track, column))))
        }
        MouseEventKind::Up(MouseButton::Left) if ui.dragging_seek => Some(UiAction::EndSeekDrag),
        MouseEventKind::Moved => {
            (ui.pointer != Some((column, row))).then_some(UiAction::PointerMoved { column, row })
        }
        _ => None,
    }
}
