//! Aggregate stats panel, collapsible

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::render::colors::{self, Color as RegionColor};
use crate::stats::format::{area_millions, dollars_billions, percent};
use crate::stats::{area_shares, AggregateStats};
use crate::store::TimelineStore;
use crate::ui::state::UiState;

const COMPACT_HEIGHT: u16 = 4;
const BAR_WIDTH: usize = 10;

/// Rows the panel wants, borders included
pub fn stats_height(store: &TimelineStore, expanded: bool) -> u16 {
    if !expanded {
        return COMPACT_HEIGHT;
    }
    let shares = store.catalog().active(store.current_year()).count() as u16;
    // Cost line, blank, breakdown heading, one row per active record
    COMPACT_HEIGHT + 3 + shares
}

pub fn draw_stats(frame: &mut Frame, area: Rect, store: &TimelineStore, ui: &mut UiState) {
    let stats = store.stats();
    let marker = if ui.stats_expanded { "▾" } else { "▸" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::OUTLINE.into()))
        .title(format!(" US Stats {} ", marker));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    ui.hitboxes.stats_header = Some(Rect::new(area.x, area.y, area.width, 1));

    if inner.height < 2 {
        return;
    }

    let summary = Line::from(vec![
        Span::styled(
            area_millions(stats.total_area),
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" sq mi  ", Style::default().fg(colors::MUTED.into())),
        Span::styled(
            percent(stats.percent_complete),
            Style::default().fg(colors::ACCENT.into()),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(summary),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(colors::ACCENT.into())
                .bg(colors::OUTLINE.into()),
        )
        .ratio(stats.completion_ratio())
        .label("");
    frame.render_widget(gauge, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    if ui.stats_expanded && inner.height > 2 {
        let rest = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
        frame.render_widget(Paragraph::new(expanded_lines(store, &stats)), rest);
    }
}

fn expanded_lines(store: &TimelineStore, stats: &AggregateStats) -> Vec<Line<'static>> {
    let muted = Style::default().fg(colors::MUTED.into());
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total Cost (2024) ", muted),
            Span::styled(
                dollars_billions(stats.total_adjusted_cost),
                Style::default().fg(colors::MONEY.into()),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Area breakdown", muted)),
    ];

    for share in area_shares(store.catalog(), store.current_year()) {
        let color = RegionColor::from_hex(&share.color).unwrap_or(colors::FALLBACK);
        let filled = ((share.fraction * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH);
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color.into())),
            Span::raw(" ".repeat(BAR_WIDTH - filled + 1)),
            Span::styled(
                format!("{:>6} ", percent(share.fraction * 100.0)),
                Style::default().fg(colors::TEXT.into()),
            ),
            Span::styled(share.name, muted),
        ]));
    }
    lines
}
