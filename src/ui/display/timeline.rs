//! Timeline controls: reset, play/pause, speed and the seek track

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::types::{MAX_YEAR, MIN_YEAR};
use crate::playback::Speed;
use crate::render::colors;
use crate::store::TimelineStore;
use crate::ui::input::track_column;
use crate::ui::state::UiState;

const RESET_LABEL: &str = "[ ⟲ Reset ]";
const PLAY_LABEL: &str = "[ ▶ Play  ]";
const PAUSE_LABEL: &str = "[ ❚❚ Pause ]";
const BUTTON_WIDTH: u16 = 12;
const YEAR_LABEL_WIDTH: u16 = 5;

/// Rows needed by the timeline panel, borders included
pub const TIMELINE_HEIGHT: u16 = 4;

fn button_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(colors::ACCENT.into())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT.into())
    }
}

pub fn draw_timeline(frame: &mut Frame, area: Rect, store: &TimelineStore, ui: &mut UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::OUTLINE.into()))
        .title(" Timeline ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let controls_row = Rect::new(inner.x, inner.y, inner.width, 1);
    let track_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);

    draw_controls(frame, controls_row, store, ui);
    draw_track(frame, track_row, store, ui);
}

fn draw_controls(frame: &mut Frame, row: Rect, store: &TimelineStore, ui: &mut UiState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(row);

    frame.render_widget(
        Paragraph::new(RESET_LABEL).style(button_style(false)),
        cells[0],
    );
    ui.hitboxes.reset = Some(cells[0]);

    let playing = store.is_playing();
    let play_label = if playing { PAUSE_LABEL } else { PLAY_LABEL };
    frame.render_widget(
        Paragraph::new(play_label).style(button_style(playing)),
        cells[2],
    );
    ui.hitboxes.play = Some(cells[2]);

    for (slot, speed) in Speed::ALL.into_iter().enumerate() {
        let cell = cells[4 + slot];
        let label = format!("[{}]", speed.label());
        frame.render_widget(
            Paragraph::new(label).style(button_style(store.speed() == speed)),
            cell,
        );
        ui.hitboxes.speeds[slot] = Some((speed, cell));
    }

    let year = Line::from(vec![
        Span::styled("Year ", Style::default().fg(colors::MUTED.into())),
        Span::styled(
            store.current_year().to_string(),
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(year).alignment(Alignment::Right), cells[8]);
}

fn draw_track(frame: &mut Frame, row: Rect, store: &TimelineStore, ui: &mut UiState) {
    if row.width <= YEAR_LABEL_WIDTH * 2 + 2 {
        return;
    }
    let track = Rect::new(
        row.x + YEAR_LABEL_WIDTH,
        row.y,
        row.width - YEAR_LABEL_WIDTH * 2,
        1,
    );
    ui.hitboxes.seek_track = Some(track);

    let thumb = track_column(track, store.current_year()) - track.x;
    let played: String = "━".repeat(thumb as usize);
    let remaining: String = "─".repeat((track.width - thumb).saturating_sub(1) as usize);

    let muted = Style::default().fg(colors::MUTED.into());
    let line = Line::from(vec![
        Span::styled(format!("{:<5}", MIN_YEAR), muted),
        Span::styled(played, Style::default().fg(colors::ACCENT.into())),
        Span::styled(
            "●",
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(remaining, muted),
        Span::styled(format!("{:>5}", MAX_YEAR), muted),
    ]);
    frame.render_widget(Paragraph::new(line), row);
}
