//! Shared layout and chrome: outer frame, status bar, info panel, banners.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u32 = 2;

/// Screen regions for one frame.
pub struct GameLayout {
    /// Play field, fitted to the field's aspect ratio and centered
    pub field: Rect,
    /// Two lines under the field
    pub status_bar: Rect,
    /// Right-hand panel, with its own border
    pub info_panel: Rect,
}

/// Largest rect inside `area` whose shape matches a `field_width` × `field_height`
/// field on screen, centered horizontally and pinned to the top.
pub fn fit_to_aspect(area: Rect, field_width: i32, field_height: i32) -> Rect {
    if area.width == 0 || area.height == 0 || field_width <= 0 || field_height <= 0 {
        return Rect {
            width: 0,
            height: 0,
            ..area
        };
    }
    let (fw, fh) = (field_width as u64, field_height as u64);

    // Width in cells for the full height, and height in cells for the full width
    let width_for_height = u64::from(area.height) * fw * u64::from(CELL_ASPECT) / fh;
    let (width, height) = if width_for_height <= u64::from(area.width) {
        (width_for_height.max(1) as u16, area.height)
    } else {
        let height = u64::from(area.width) * fh / (fw * u64::from(CELL_ASPECT));
        (area.width, height.max(1) as u16)
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

/// Carve the screen into play field, status bar, and info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │      ┌───────────────┐          │             │
/// │      │ [field]       │          │  [info]     │
/// │      └───────────────┘          │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
    field_size: (i32, i32),
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, info_panel] = split_pair(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(info_panel_width),
    );
    let [play, status_bar] = split_pair(
        left,
        Direction::Vertical,
        Constraint::Min(5),
        Constraint::Length(2),
    );

    // Border hugs the fitted field, not the whole play column
    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let outer = fit_to_aspect(field_block.inner(play), field_size.0, field_size.1);
    let bordered = Rect {
        x: outer.x.saturating_sub(1),
        y: play.y,
        width: (outer.width + 2).min(play.width),
        height: (outer.height + 2).min(play.height),
    };
    frame.render_widget(field_block, bordered);

    GameLayout {
        field: outer,
        status_bar,
        info_panel,
    }
}

fn split_pair(
    area: Rect,
    direction: Direction,
    first: Constraint,
    second: Constraint,
) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Status message and key hints as the two status bar lines.
pub fn status_lines<'a>(
    message: &'a str,
    color: Color,
    hints: &[(&'a str, &'a str)],
) -> Vec<Line<'a>> {
    let hint_spans = hints
        .iter()
        .enumerate()
        .flat_map(|(i, &(key, action))| {
            let sep = (i > 0).then(|| Span::raw("  "));
            sep.into_iter().chain([
                Span::styled(key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect::<Vec<_>>();

    vec![
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(hint_spans),
    ]
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let mut lines = status_lines(message, color, hints);
    lines.truncate(area.height as usize);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Info panel border. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Compact banner pinned to the bottom of `area`. The field stays visible above it.
pub fn render_round_over_banner(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        y: area.y + area.height - banner_height,
        height: banner_height,
        ..area
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Click to continue]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
