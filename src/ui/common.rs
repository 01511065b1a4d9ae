use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::colors::{ACCENT, SOFT_ACCENT, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};

/// Bordered panel with the title embedded in the top edge; returns the
/// inner drawable area.
pub fn render_panel(f: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    use ratatui::symbols::border;

    let block = if title.is_empty() {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(vec![
                Span::styled("─ ", Style::default().fg(border_color)),
                Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(border_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ─", Style::default().fg(border_color)),
            ]))
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Rect covering percent_x/percent_y of `r`, centered
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fixed-width column centered inside `area`
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Two-line labelled value row shared by the report form and the
/// settings screen: label on top, prompt + value below. The cursor
/// block blinks with the tick while editing.
pub fn input_row<'a>(
    label: &'a str,
    value: &'a str,
    is_active: bool,
    is_editing: bool,
    cursor_pos: usize,
    tick: u64,
) -> Paragraph<'a> {
    let (label_style, content_style) = if is_active && is_editing {
        (
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else if is_active {
        (
            Style::default().fg(SOFT_ACCENT).add_modifier(Modifier::BOLD),
            Style::default().fg(TEXT_PRIMARY),
        )
    } else {
        (
            Style::default().fg(TEXT_DIM),
            Style::default().fg(TEXT_SECONDARY),
        )
    };

    let mut display_value = value.to_string();
    if is_active && is_editing && (tick / 5) % 2 == 0 {
        if cursor_pos >= display_value.chars().count() {
            display_value.push('█');
        } else {
            display_value = display_value
                .chars()
                .enumerate()
                .map(|(i, c)| if i == cursor_pos { '█' } else { c })
                .collect();
        }
    }

    let prompt = if is_active && is_editing {
        ">_ "
    } else if is_active {
        "> "
    } else {
        "  "
    };

    Paragraph::new(vec![
        Line::from(Span::styled(format!("  {}", label), label_style)),
        Line::from(vec![
            Span::styled(format!("  {}", prompt), label_style),
            Span::styled(display_value, content_style),
        ]),
    ])
}

/// Key-hint line for the footer
pub fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default().fg(ACCENT);
    let label_style = Style::default().fg(TEXT_SECONDARY);
    let sep_style = Style::default().fg(TEXT_DIM);

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", action), label_style));
    }
    Line::from(spans)
}
