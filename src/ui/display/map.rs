//! Map canvas: ghost outline, active regions, year labels and hover tooltip

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::types::{MAP_HEIGHT, MAP_WIDTH};
use crate::geometry::RegionShape;
use crate::render::{collect_render_regions, colors, MapGeometry, RenderRegion};
use crate::store::TimelineStore;
use crate::ui::state::UiState;

fn draw_edges(ctx: &mut Context, shape: &RegionShape, color: Color) {
    for (a, b) in shape.edges() {
        ctx.draw(&CanvasLine {
            x1: a.x,
            y1: MAP_HEIGHT - a.y,
            x2: b.x,
            y2: MAP_HEIGHT - b.y,
            color,
        });
    }
}

fn draw_region(ctx: &mut Context, shape: &RegionShape, region: &RenderRegion) {
    let coords: Vec<(f64, f64)> = shape
        .fill_points()
        .iter()
        .map(|&(x, y)| (x, MAP_HEIGHT - y))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color: region.color.into(),
    });

    let stroke = if region.selected {
        Color::White
    } else {
        colors::STROKE.into()
    };
    draw_edges(ctx, shape, stroke);
}

pub fn draw_map(
    frame: &mut Frame,
    area: Rect,
    store: &TimelineStore,
    geometry: &MapGeometry,
    ui: &mut UiState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::OUTLINE.into()))
        .title(Span::styled(
            format!(" {} ", store.current_year()),
            Style::default()
                .fg(colors::TEXT.into())
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    ui.hitboxes.map = Some(inner);

    let mut regions = Vec::new();
    collect_render_regions(store, ui.hovered, &mut regions);

    // Canvas units covered by one terminal column, for centring labels
    let units_per_column = if inner.width > 0 {
        MAP_WIDTH / inner.width as f64
    } else {
        0.0
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors::BACKGROUND.into())
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(|ctx| {
            draw_edges(ctx, geometry.outline(), colors::OUTLINE.into());
            ctx.layer();

            for region in &regions {
                if let Some(shape) = geometry.region(region.index) {
                    draw_region(ctx, shape, region);
                }
            }
            ctx.layer();

            for region in &regions {
                let (text, style) = if region.selected {
                    (
                        format!(" {} ", region.year),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (
                        region.year.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                };
                let half_width = text.chars().count() as f64 / 2.0 * units_per_column;
                ctx.print(
                    region.label.x - half_width,
                    MAP_HEIGHT - region.label.y,
                    Span::styled(text, style),
                );
            }
        });
    frame.render_widget(canvas, area);

    draw_tooltip(frame, inner, store, ui);
}

/// Name of the hovered active region, bottom-left of the map
fn draw_tooltip(frame: &mut Frame, inner: Rect, store: &TimelineStore, ui: &UiState) {
    let year = store.current_year();
    let Some(territory) = ui
        .hovered
        .and_then(|idx| store.catalog().at(idx))
        .filter(|t| t.is_active(year))
    else {
        return;
    };
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let text = format!(" {} ", territory.name);
    let width = (text.chars().count() as u16).min(inner.width - 2);
    let tip = Rect::new(inner.x + 1, inner.y + inner.height - 2, width, 1);
    frame.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(colors::TEXT.into())
                .bg(colors::OUTLINE.into())
                .add_modifier(Modifier::BOLD),
        ),
        tip,
    );
}
