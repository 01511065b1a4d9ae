use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, FormField};
use crate::ui::colors::{
    ACCENT, HIGHLIGHT_BG, SOFT_ACCENT, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::common::{centered_column, input_row, render_panel};

const FORM_WIDTH: u16 = 52;
const MAX_DROPDOWN_ROWS: u16 = 8;

pub fn render_form(f: &mut Frame, app: &mut App, area: Rect) {
    let column = centered_column(area, FORM_WIDTH);
    app.area_fields.clear();

    let fields = app.visible_fields();
    let mut y = column.y + 1;

    for field in fields {
        if y + 2 > column.y + column.height {
            break;
        }
        let row_area = Rect {
            x: column.x,
            y,
            width: column.width,
            height: 2,
        };

        let is_active = app.focus == field;
        match field {
            FormField::Email => {
                let row = input_row(
                    field.label(),
                    app.input_email.value(),
                    is_active,
                    app.editing_email && is_active,
                    app.input_email.visual_cursor(),
                    app.tick,
                );
                f.render_widget(row, row_area);
            }
            FormField::Submit => {
                render_submit_row(f, app, row_area, is_active);
            }
            _ => {
                render_select_row(f, app, field, row_area, is_active);
            }
        }

        app.area_fields.push((field, row_area));
        y += 3;
    }

    if app.select.open && app.focus.is_select() {
        render_dropdown(f, app, area);
    } else {
        app.area_dropdown = Rect::default();
    }
}

fn render_select_row(f: &mut Frame, app: &App, field: FormField, area: Rect, is_active: bool) {
    let (label_style, value_style, placeholder_style) = if is_active {
        (
            Style::default().fg(SOFT_ACCENT).add_modifier(Modifier::BOLD),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            Style::default().fg(TEXT_SECONDARY),
        )
    } else {
        (
            Style::default().fg(TEXT_DIM),
            Style::default().fg(TEXT_SECONDARY),
            Style::default().fg(TEXT_DIM),
        )
    };

    let prompt = if is_active { "> " } else { "  " };
    let value_span = match app.value_for(field) {
        Some(value) => Span::styled(value, value_style),
        None => Span::styled(format!("choose {} ▾", field.label()), placeholder_style),
    };

    let rows = vec![
        Line::from(Span::styled(format!("  {}", field.label()), label_style)),
        Line::from(vec![
            Span::styled(format!("  {}", prompt), label_style),
            value_span,
        ]),
    ];
    f.render_widget(Paragraph::new(rows), area);
}

fn render_submit_row(f: &mut Frame, app: &App, area: Rect, is_active: bool) {
    let ready = app.draft.is_submit_ready();
    let text = if app.submitting {
        "[ sending... ]"
    } else {
        "[ send report ]"
    };

    let style = if app.submitting {
        Style::default().fg(TEXT_SECONDARY)
    } else if ready && is_active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else if ready {
        Style::default().fg(SOFT_ACCENT)
    } else {
        // Incomplete draft: the affordance is disabled, no message
        Style::default().fg(TEXT_DIM)
    };

    let prompt = if is_active { "> " } else { "  " };
    let rows = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", prompt),
                Style::default().fg(if is_active { SOFT_ACCENT } else { TEXT_DIM }),
            ),
            Span::styled(text, style),
        ]),
    ];
    f.render_widget(Paragraph::new(rows), area);
}

fn render_dropdown(f: &mut Frame, app: &mut App, area: Rect) {
    let options = app.options_for(app.focus);
    let filtered: Vec<String> = app
        .select
        .filtered(&options)
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let anchor = app
        .area_fields
        .iter()
        .find(|(field, _)| *field == app.focus)
        .map(|(_, rect)| *rect)
        .unwrap_or(area);

    let rows = (filtered.len().max(1) as u16).min(MAX_DROPDOWN_ROWS);
    let height = (rows + 3).min(area.height);
    let mut y = anchor.y + anchor.height;
    if y + height > area.y + area.height {
        y = (area.y + area.height).saturating_sub(height);
    }
    let dropdown = Rect {
        x: anchor.x,
        y,
        width: anchor.width,
        height,
    };
    app.area_dropdown = dropdown;

    f.render_widget(Clear, dropdown);
    let inner = render_panel(f, dropdown, app.focus.label(), SOFT_ACCENT);
    if inner.height == 0 {
        return;
    }

    // Filter line
    let mut filter_value = app.select.filter.value().to_string();
    if (app.tick / 5) % 2 == 0 {
        let cursor = app.select.filter.visual_cursor();
        if cursor >= filter_value.chars().count() {
            filter_value.push('█');
        } else {
            filter_value = filter_value
                .chars()
                .enumerate()
                .map(|(i, c)| if i == cursor { '█' } else { c })
                .collect();
        }
    }
    let filter_line = Line::from(vec![
        Span::styled(" / ", Style::default().fg(ACCENT)),
        Span::styled(filter_value, Style::default().fg(TEXT_PRIMARY)),
    ]);
    let filter_area = Rect {
        height: 1,
        ..inner
    };
    f.render_widget(Paragraph::new(filter_line), filter_area);

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };

    if filtered.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  no matches",
            Style::default().fg(TEXT_DIM),
        )));
        f.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|opt| {
            let selected = app.value_for(app.focus).as_deref() == Some(opt.as_str());
            let style = if selected {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            ListItem::new(Line::from(Span::styled(format!(" {}", opt), style)))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▎");
    f.render_stateful_widget(list, list_area, &mut app.select.list_state);
}
