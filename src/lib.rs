//! Territory Timeline - animated map of national territorial growth, 1776-1920

pub mod catalog;
pub mod core;
pub mod geometry;
pub mod playback;
pub mod render;
pub mod stats;
pub mod store;
pub mod ui;
