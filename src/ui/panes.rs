//! Stateless render functions for each visible pane

use crate::playback::autoplay::Speed;
use crate::playback::PlaybackState;
use crate::trace::view::{DisplayState, Emphasis};
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the bar chart may occupy at most; taller inputs are scaled down.
const MAX_BAR_ROWS: u64 = 8;

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(format!(" {} ", title))
}

fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Normal => Style::default().fg(DEFAULT_THEME.fg),
        Emphasis::Active => Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
        Emphasis::Accent => Style::default().fg(DEFAULT_THEME.success),
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Render the data-structure pane: an optional bar chart, the cell row, and
/// a marker row aligned under the cells it points at.
///
/// Alignment happens here, from the stable cell ids the snapshot exposes;
/// the snapshot itself knows nothing about columns.
pub fn render_state_pane<S: DisplayState>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    snapshot: Option<&Snapshot<S>>,
) {
    let block = pane_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        let idle = Paragraph::new("no trace loaded — press l to load the input")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .alignment(Alignment::Center);
        frame.render_widget(idle, inner);
        return;
    };

    let cells = snapshot.state.cells();
    let markers = snapshot.state.markers();
    let bars = snapshot.state.bars();

    if cells.is_empty() {
        let empty = Paragraph::new("(empty)")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // One column per cell, wide enough for the longest label or marker
    let cell_width = cells
        .iter()
        .map(|c| c.label.chars().count())
        .chain(markers.iter().map(|m| m.label.chars().count()))
        .max()
        .unwrap_or(1)
        .max(1)
        + 2;

    let mut lines: Vec<Line> = Vec::new();

    // Bar chart, tallest rows first
    if let Some(bars) = &bars {
        let max = bars.iter().copied().max().unwrap_or(0);
        if max > 0 {
            let rows = max.min(MAX_BAR_ROWS);
            // Scale into 1..=rows, keeping zero at zero
            let scaled: Vec<u64> = bars
                .iter()
                .map(|&b| {
                    if b == 0 {
                        0
                    } else {
                        (b * rows).div_ceil(max).max(1)
                    }
                })
                .collect();
            for row in (1..=rows).rev() {
                let mut spans = Vec::with_capacity(cells.len());
                for (i, cell) in cells.iter().enumerate() {
                    let text = if scaled[i] >= row {
                        center(&"█".repeat(cell_width - 2), cell_width)
                    } else {
                        " ".repeat(cell_width)
                    };
                    spans.push(Span::styled(text, emphasis_style(cell.emphasis)));
                    spans.push(Span::raw(" "));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    // Cell labels
    let mut label_spans = Vec::with_capacity(cells.len());
    for cell in &cells {
        label_spans.push(Span::styled(
            center(&cell.label, cell_width),
            emphasis_style(cell.emphasis).add_modifier(Modifier::REVERSED),
        ));
        label_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(label_spans));

    // Markers, joined when several point at the same cell
    if !markers.is_empty() {
        let mut marker_spans = Vec::with_capacity(cells.len());
        for cell in &cells {
            let labels: Vec<&str> = markers
                .iter()
                .filter(|m| m.cell_id == cell.id)
                .map(|m| m.label.as_str())
                .collect();
            let text = if labels.is_empty() {
                " ".repeat(cell_width)
            } else {
                center(&labels.join(","), cell_width)
            };
            marker_spans.push(Span::styled(
                text,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            marker_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(marker_spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Render the reference listing with the executing line highlighted.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &[&str],
    current_line: Option<usize>,
) {
    let block = pane_block("reference code");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let number = Span::styled(
                format!("{:>3} ", i),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            if current_line == Some(i) {
                Line::from(vec![
                    number,
                    Span::styled(
                        format!("▶ {}", text),
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    number,
                    Span::styled(format!("  {}", text), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the narration pane: running-result summary plus the current
/// snapshot's explanation.
pub fn render_explanation_pane<S: DisplayState>(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot<S>>,
) {
    let block = pane_block("explanation");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = snapshot else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let summary_style = if snapshot.terminal {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };
    let summary_text = if snapshot.terminal {
        format!("{}  (final)", snapshot.state.summary())
    } else {
        snapshot.state.summary()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(summary_text, summary_style)),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(snapshot.explanation.as_str())
            .style(Style::default().fg(DEFAULT_THEME.fg))
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}

/// Render the status bar at the bottom.
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    cursor: isize,
    total: usize,
    state: PlaybackState,
    speed: Speed,
    variant_name: &str,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: step info and status message
    let step_text = if total == 0 {
        " idle ".to_string()
    } else {
        format!(" Step {}/{} ", cursor + 1, total)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} · {} ", variant_name, speed.label()),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds plus a state badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" v ", key_style),
        Span::styled(" variant ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" 1-4 ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_end = total > 0 && cursor + 1 == total as isize;
    if state == PlaybackState::Playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if cursor == 0 {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
