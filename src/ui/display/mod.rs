//! Frame layout and panel rendering
//!
//! Every panel records its clickable areas into `UiState::hitboxes` while
//! drawing, so mouse handling always matches what is on screen.

pub mod detail;
pub mod map;
pub mod stats;
pub mod timeline;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::types::{MAX_YEAR, MIN_YEAR};
use crate::render::{colors, MapGeometry};
use crate::store::TimelineStore;
use crate::ui::state::UiState;

const HEADER_HEIGHT: u16 = 3;
const SIDE_WIDTH: u16 = 38;
const KEY_HINT: &str = "space play · ←/→ step · tab select · s stats · q quit";

/// Draw one full frame
pub fn draw(frame: &mut Frame, store: &TimelineStore, geometry: &MapGeometry, ui: &mut UiState) {
    ui.hitboxes.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(timeline::TIMELINE_HEIGHT),
        ])
        .split(frame.size());

    draw_header(frame, rows[0], store, ui);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(SIDE_WIDTH)])
        .split(rows[1]);

    map::draw_map(frame, body[0], store, geometry, ui);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stats::stats_height(store, ui.stats_expanded)),
            Constraint::Min(0),
        ])
        .split(body[1]);

    stats::draw_stats(frame, side[0], store, ui);
    if let Some(territory) = store.selected() {
        detail::draw_detail(frame, side[1], territory, ui);
    }

    timeline::draw_timeline(frame, rows[2], store, ui);
}

fn draw_header(frame: &mut Frame, area: Rect, store: &TimelineStore, ui: &mut UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::OUTLINE.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            " US ",
            Style::default()
                .fg(Color::White)
                .bg(colors::ACCENT.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Territorial Expansion ",
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} - {}", MIN_YEAR, MAX_YEAR),
            Style::default().fg(colors::MUTED.into()),
        ),
    ]);

    let checkbox = if store.auto_pause() { "[x]" } else { "[ ]" };
    let toggle = format!("{} Auto-pause", checkbox);
    let toggle_width = toggle.chars().count() as u16;

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(KEY_HINT.chars().count() as u16 + 2),
            Constraint::Length(toggle_width + 1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(title), cells[0]);
    frame.render_widget(
        Paragraph::new(KEY_HINT)
            .style(Style::default().fg(colors::MUTED.into()))
            .alignment(Alignment::Center),
        cells[1],
    );

    let toggle_style = if store.auto_pause() {
        Style::default().fg(colors::ACCENT.into())
    } else {
        Style::default().fg(colors::MUTED.into())
    };
    frame.render_widget(Paragraph::new(toggle).style(toggle_style), cells[2]);
    ui.hitboxes.auto_pause = Some(cells[2]);
}
