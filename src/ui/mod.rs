//! UI module - ratatui front end for the timeline

pub mod app;
pub mod display;
pub mod input;
pub mod state;
pub mod terminal;

pub use app::App;
pub use input::UiAction;
pub use state::{Hitboxes, UiState};
