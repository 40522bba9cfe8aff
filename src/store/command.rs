//! Commands issued by views and input handlers

use crate::core::types::{TerritoryId, Year};
use crate::playback::Speed;

/// Every state change a view may request
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    TogglePlay,
    Play,
    Pause,
    Reset,
    /// Jump to a year (clamped)
    Seek(Year),
    /// Jump relative to the current year (clamped)
    Step(i32),
    SetSpeed(Speed),
    SetAutoPause(bool),
    ToggleAutoPause,
    Select(TerritoryId),
    /// Move the selection to the next active record in catalog order
    SelectNext,
    /// Move the selection to the previous active record in catalog order
    SelectPrevious,
    ClearSelection,
}
