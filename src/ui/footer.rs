use ratatui::{layout::Alignment, layout::Rect, widgets::Paragraph, Frame};

use crate::app::{App, CurrentScreen};
use crate::ui::common::hint_line;

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.select.open {
        hint_line(&[
            ("type", "filter"),
            ("↑↓", "move"),
            ("enter", "choose"),
            ("esc", "close"),
        ])
    } else if app.editing_email {
        hint_line(&[("type", "edit"), ("enter", "done"), ("esc", "done")])
    } else {
        match app.current_screen {
            CurrentScreen::Form => hint_line(&[
                ("↑↓", "navigate"),
                ("enter", "open / send"),
                ("g", "settings"),
                ("q", "quit"),
            ]),
            CurrentScreen::Settings => {
                if app.settings.editing {
                    hint_line(&[("type", "edit"), ("enter", "done"), ("esc", "cancel")])
                } else {
                    hint_line(&[
                        ("↑↓", "navigate"),
                        ("enter", "edit / run"),
                        ("esc", "back to form"),
                    ])
                }
            }
        }
    };

    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
