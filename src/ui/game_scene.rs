//! Terminal rendering of a `Scene`.

use super::common::{
    create_game_layout, render_info_panel_frame, render_round_over_banner, render_status_bar,
};
use crate::game::types::Phase;
use crate::scene::{ObstacleRect, Scene};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;
const CONTROLS: [(&str, &str); 2] = [("[Click/Space]", "Flap"), ("[Q]", "Quit")];

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Obstacle,
    Bird,
}

/// Half-open pixel span covered by terminal cell `index` out of `cells`.
fn cell_span(index: usize, cells: usize, field: i32) -> (i32, i32) {
    let start = (index as i64 * field as i64 / cells as i64) as i32;
    let end = ((index as i64 + 1) * field as i64 / cells as i64) as i32;
    (start, end.max(start + 1))
}

fn overlaps(a: (i32, i32), b_start: i32, b_len: i32) -> bool {
    a.0 < b_start + b_len && b_start < a.1
}

fn rect_overlaps(rect: &ObstacleRect, xs: (i32, i32), ys: (i32, i32)) -> bool {
    rect.height > 0 && overlaps(xs, rect.left, rect.width) && overlaps(ys, rect.top, rect.height)
}

/// Rasterize the field into a `width` × `height` grid of cells.
///
/// A cell shows the bird or an obstacle if any part of its pixel span
/// overlaps them, so small sprites never vanish between samples.
pub fn rasterize(scene: &Scene, width: usize, height: usize) -> Vec<Vec<Cell>> {
    (0..height)
        .map(|row| {
            let ys = cell_span(row, height, scene.field_height);
            (0..width)
                .map(|col| {
                    let xs = cell_span(col, width, scene.field_width);
                    let bird = &scene.bird;
                    if overlaps(xs, bird.left, bird.size) && overlaps(ys, bird.top, bird.size) {
                        Cell::Bird
                    } else if rect_overlaps(&scene.top_obstacle, xs, ys)
                        || rect_overlaps(&scene.bottom_obstacle, xs, ys)
                    {
                        Cell::Obstacle
                    } else {
                        Cell::Sky
                    }
                })
                .collect()
        })
        .collect()
}

/// Draw the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, scene: &Scene) {
    let layout = create_game_layout(
        frame,
        area,
        " Flapper ",
        Color::Cyan,
        INFO_PANEL_WIDTH,
        (scene.field_width, scene.field_height),
    );

    render_play_area(frame, layout.field, scene);
    render_status(frame, layout.status_bar, scene);
    render_info_panel(frame, layout.info_panel, scene);

    if scene.phase == Phase::AwaitingAck {
        render_round_over_banner(
            frame,
            layout.field,
            "CRASH!",
            &format!("You cleared {} obstacles.", scene.score),
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, scene: &Scene) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let lines: Vec<Line> = rasterize(scene, width, height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Bird => Span::styled(
                        "●",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Obstacle => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Sky => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, scene: &Scene) {
    match scene.phase {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Click or press Space to start!",
            Color::Yellow,
            &CONTROLS,
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", scene.score),
            Color::Green,
            &CONTROLS,
        ),
        Phase::AwaitingAck => render_status_bar(
            frame,
            area,
            &format!("Round over at {} - click to continue", scene.score),
            Color::Red,
            &CONTROLS,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &Scene) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(board) = &scene.leaderboard {
        lines.push(Line::from(Span::styled(
            " Leaderboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        if board.is_empty() {
            lines.push(Line::from(Span::styled(
                " no rounds yet",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let room = (inner.height as usize).saturating_sub(lines.len());
        for entry in board.iter().take(room) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" #{:<3}", entry.rank),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.score.to_string(), Style::default().fg(Color::Yellow)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
