use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{App, AsyncAction, CurrentScreen, FormField, SettingsField};

#[derive(PartialEq, Debug)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
) -> InputResult {
    // Only process key press events, not release (Windows sends both)
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    // Priority 1: dismissable error banner
    if app.error_banner.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.error_banner = None;
        }
        return InputResult::Continue;
    }

    // Priority 2: submitted confirmation, only the timer dismisses it
    if app.is_submitted_state() {
        if key.code == KeyCode::Char('q') {
            return InputResult::Quit;
        }
        return InputResult::Continue;
    }

    // Priority 3: open dropdown captures all keys
    if app.select.open {
        handle_dropdown_key(app, key);
        return InputResult::Continue;
    }

    // Priority 4: email editing captures all keys
    if app.editing_email {
        handle_email_key(app, key);
        return InputResult::Continue;
    }

    match app.current_screen {
        CurrentScreen::Form => handle_form_key(app, key, tx),
        CurrentScreen::Settings => handle_settings_key(app, key, tx),
    }
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    let options = app.options_for(app.focus);
    match key.code {
        // Closing never changes the value
        KeyCode::Esc => app.select.close(),
        KeyCode::Enter => {
            if let Some(value) = app.select.take_selection(&options) {
                let field = app.focus;
                app.apply_selection(field, value);
            }
        }
        KeyCode::Down => {
            let visible = app.select.filtered(&options).len();
            app.select.highlight_next(visible);
        }
        KeyCode::Up => {
            let visible = app.select.filtered(&options).len();
            app.select.highlight_previous(visible);
        }
        _ => {
            app.select.filter.handle_event(&Event::Key(key));
            let visible = app.select.filtered(&options).len();
            app.select.clamp_highlight(visible);
        }
    }
}

fn handle_email_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.editing_email = false;
        }
        _ => {
            app.input_email.handle_event(&Event::Key(key));
        }
    }
    let email = app.input_email.value().to_string();
    app.draft = std::mem::take(&mut app.draft).with_email(email);
}

fn handle_form_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('g') => {
            app.current_screen = CurrentScreen::Settings;
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),
        KeyCode::Enter => match app.focus {
            FormField::Email => {
                app.editing_email = true;
            }
            FormField::Submit => {
                // Not-ready drafts are silently ignored
                app.begin_submit(tx);
            }
            _ => app.select.open(),
        },
        _ => {}
    }
    InputResult::Continue
}

fn handle_settings_key(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
) -> InputResult {
    if app.settings.editing {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                app.settings.editing = false;
            }
            KeyCode::Tab => {
                app.settings.editing = false;
                settings_focus_next(app);
            }
            _ => {
                let focus = app.settings.field_focus;
                if let Some(input) = app.settings.input_mut(focus) {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Form;
        }
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => settings_focus_previous(app),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => settings_focus_next(app),
        KeyCode::Enter => match app.settings.field_focus {
            SettingsField::Save => app.save_settings(tx),
            SettingsField::TestConnection => app.begin_connection_test(tx),
            _ => {
                app.settings.editing = true;
            }
        },
        _ => {}
    }
    InputResult::Continue
}

fn settings_focus_next(app: &mut App) {
    let fields = SettingsField::all();
    if let Some(pos) = fields.iter().position(|f| *f == app.settings.field_focus) {
        app.settings.field_focus = fields[(pos + 1) % fields.len()];
    }
}

fn settings_focus_previous(app: &mut App) {
    let fields = SettingsField::all();
    if let Some(pos) = fields.iter().position(|f| *f == app.settings.field_focus) {
        app.settings.field_focus = fields[pos.checked_sub(1).unwrap_or(fields.len() - 1)];
    }
}
