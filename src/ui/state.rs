//! UI state management for the terminal front end
//!
//! Everything here is local and ephemeral: hover, panel expansion and the
//! screen regions recorded during the last draw. Timeline state lives in the
//! store, never here.

use ratatui::layout::Rect;

use crate::playback::Speed;

/// Clickable screen regions, rebuilt on every draw
#[derive(Debug, Default, Clone)]
pub struct Hitboxes {
    /// Inner canvas area of the map
    pub map: Option<Rect>,
    pub play: Option<Rect>,
    pub reset: Option<Rect>,
    pub speeds: [Option<(Speed, Rect)>; 3],
    pub auto_pause: Option<Rect>,
    /// The seek track, one column per position
    pub seek_track: Option<Rect>,
    pub stats_header: Option<Rect>,
    /// Only present while the detail panel is shown
    pub detail_close: Option<Rect>,
}

impl Hitboxes {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Terminal UI state
#[derive(Debug, Default)]
pub struct UiState {
    /// Catalog index of the region under the pointer
    pub hovered: Option<usize>,
    /// Last terminal cell the pointer moved to
    pub pointer: Option<(u16, u16)>,
    /// Whether the stats panel shows the full breakdown
    pub stats_expanded: bool,
    /// Set while the left button is held on the seek track
    pub dragging_seek: bool,
    pub hitboxes: Hitboxes,
}

impl UiState {
    pub fn new(stats_expanded: bool) -> Self {
        Self {
            stats_expanded,
            ..Self::default()
        }
    }

    pub fn toggle_stats(&mut self) {
        self.stats_expanded = !self.stats_expanded;
    }

    pub fn set_pointer(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
    }
}

/// Whether a terminal cell lies inside `rect`
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
