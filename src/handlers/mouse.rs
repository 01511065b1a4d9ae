use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tokio::sync::mpsc;

use crate::app::{App, AsyncAction, CurrentScreen, FormField};

pub fn handle_mouse_event(app: &mut App, event: MouseEvent, tx: &mpsc::Sender<AsyncAction>) {
    let position = Position::new(event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.error_banner.is_some() {
                app.error_banner = None;
                return;
            }
            if app.is_submitted_state() || app.current_screen != CurrentScreen::Form {
                return;
            }
            if app.select.open {
                handle_dropdown_click(app, position);
            } else {
                handle_form_click(app, position, tx);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.select.open {
                let options = app.options_for(app.focus);
                let visible = app.select.filtered(&options).len();
                app.select.highlight_next(visible);
            } else if app.current_screen == CurrentScreen::Form {
                app.focus_next();
            }
        }
        MouseEventKind::ScrollUp => {
            if app.select.open {
                let options = app.options_for(app.focus);
                let visible = app.select.filtered(&options).len();
                app.select.highlight_previous(visible);
            } else if app.current_screen == CurrentScreen::Form {
                app.focus_previous();
            }
        }
        _ => {}
    }
}

fn handle_dropdown_click(app: &mut App, position: Position) {
    if !app.area_dropdown.contains(position) {
        // Clicking away dismisses without changing the value
        app.select.close();
        return;
    }

    // Rows start below the border and the filter line
    let list_top = app.area_dropdown.y + 2;
    if position.y < list_top {
        return;
    }
    let row = app.select.list_state.offset() + (position.y - list_top) as usize;
    let options = app.options_for(app.focus);
    if let Some(value) = app.select.take_selection_at(&options, row) {
        let field = app.focus;
        app.apply_selection(field, value);
    }
}

fn handle_form_click(app: &mut App, position: Position, tx: &mpsc::Sender<AsyncAction>) {
    let hit = app
        .area_fields
        .iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(field, _)| *field);

    let Some(field) = hit else {
        app.editing_email = false;
        return;
    };

    app.focus = field;
    match field {
        FormField::Email => {
            app.editing_email = true;
        }
        FormField::Submit => {
            app.editing_email = false;
            app.begin_submit(tx);
        }
        _ => {
            app.editing_email = false;
            app.select.open();
        }
    }
}
