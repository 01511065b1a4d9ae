use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, SettingsField};
use crate::ui::colors::{ACCENT, SOFT_ACCENT, TEXT_DIM, TEXT_SECONDARY, WARN};
use crate::ui::common::{centered_column, input_row};

const SETTINGS_WIDTH: u16 = 64;

pub fn render_settings(f: &mut Frame, app: &mut App, area: Rect) {
    let column = centered_column(area, SETTINGS_WIDTH);
    let mut y = column.y + 1;

    for field in SettingsField::all() {
        if y + 2 > column.y + column.height {
            break;
        }
        let row_area = Rect {
            x: column.x,
            y,
            width: column.width,
            height: 2,
        };
        let is_active = app.settings.field_focus == *field;

        if field.is_input() {
            let editing = app.settings.editing && is_active;
            let (value, cursor) = match field {
                SettingsField::SpreadsheetId => (
                    app.settings.input_spreadsheet_id.value().to_string(),
                    app.settings.input_spreadsheet_id.visual_cursor(),
                ),
                SettingsField::EndpointUrl => (
                    app.settings.input_endpoint_url.value().to_string(),
                    app.settings.input_endpoint_url.visual_cursor(),
                ),
                SettingsField::ApiKey => (
                    // Credentials stay masked on screen
                    app.settings
                        .input_api_key
                        .value()
                        .chars()
                        .map(|_| '*')
                        .collect(),
                    app.settings.input_api_key.visual_cursor(),
                ),
                SettingsField::SheetName => (
                    app.settings.input_sheet_name.value().to_string(),
                    app.settings.input_sheet_name.visual_cursor(),
                ),
                _ => (String::new(), 0),
            };
            let row = input_row(field.label(), &value, is_active, editing, cursor, app.tick);
            f.render_widget(row, row_area);
        } else {
            let label = match field {
                SettingsField::Save => {
                    if app.settings.saved_at.is_some() {
                        "[ saved ✓ ]"
                    } else {
                        "[ save settings ]"
                    }
                }
                SettingsField::TestConnection => {
                    if app.settings.testing {
                        "[ testing... ]"
                    } else {
                        "[ test connection ]"
                    }
                }
                _ => "",
            };
            let style = if is_active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_ACCENT)
            };
            let prompt = if is_active { "> " } else { "  " };
            let rows = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", prompt),
                        Style::default().fg(if is_active { SOFT_ACCENT } else { TEXT_DIM }),
                    ),
                    Span::styled(label, style),
                ]),
            ];
            f.render_widget(Paragraph::new(rows), row_area);
        }
        y += 3;
    }

    if let Some(result) = &app.settings.test_result {
        if y < column.y + column.height {
            let result_area = Rect {
                x: column.x,
                y,
                width: column.width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {}", result),
                    Style::default().fg(WARN),
                )),
                result_area,
            );
            y += 2;
        }
    }

    if y < column.y + column.height {
        let note_area = Rect {
            x: column.x,
            y,
            width: column.width,
            height: 2,
        };
        let note = Paragraph::new(vec![
            Line::from(Span::styled(
                "  the api key is only needed for reading catalogs;",
                Style::default().fg(TEXT_SECONDARY),
            )),
            Line::from(Span::styled(
                "  the endpoint url alone enables submissions",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ]);
        f.render_widget(note, note_area);
    }
}
