//! Detail panel for the selected record

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::catalog::Territory;
use crate::render::colors::{self, Color as RegionColor};
use crate::stats::format::{area_thousands, dollars_billions, dollars_millions};
use crate::ui::state::UiState;

const CLOSE_LABEL: &str = "[x]";

pub fn draw_detail(frame: &mut Frame, area: Rect, territory: &Territory, ui: &mut UiState) {
    if area.width < 8 || area.height < 3 {
        return;
    }
    let tint = RegionColor::from_hex(&territory.color).unwrap_or(colors::FALLBACK);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tint.into()))
        .title(Span::styled(
            format!(" {} ", territory.name),
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let close = Rect::new(area.x + area.width - 5, area.y, CLOSE_LABEL.len() as u16, 1);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(Style::default().fg(colors::TEXT.into())),
        close,
    );
    ui.hitboxes.detail_close = Some(close);

    frame.render_widget(
        Paragraph::new(detail_lines(territory, tint)).wrap(Wrap { trim: true }),
        inner,
    );
}

fn detail_lines(territory: &Territory, tint: RegionColor) -> Vec<Line<'static>> {
    let muted = Style::default().fg(colors::MUTED.into());
    let text = Style::default().fg(colors::TEXT.into());

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", territory.method.label().to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(tint.into())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Acquired ", muted),
            Span::styled(
                territory.year.to_string(),
                text.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(territory.description.clone(), text)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Size  ", muted),
            Span::styled(area_thousands(territory.area_sq_miles), text),
        ]),
        Line::from(Span::styled(
            territory.comparison.clone(),
            Style::default().fg(colors::ACCENT.into()),
        )),
        Line::from(vec![
            Span::styled("From  ", muted),
            Span::styled(territory.from_entity.clone(), text),
        ]),
    ];

    if let Some(cost) = territory.cost {
        let money = Style::default().fg(colors::MONEY.into());
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Cost Analysis", muted)));
        lines.push(Line::from(vec![
            Span::styled(dollars_millions(cost.nominal), money),
            Span::styled(format!(" in {}", territory.year), muted),
        ]));
        lines.push(Line::from(vec![
            Span::styled(dollars_billions(cost.inflation_adjusted), money),
            Span::styled(" 2024 value", muted),
        ]));
    }
    lines
}
