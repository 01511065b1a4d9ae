pub mod colors;
pub mod common;
pub mod footer;
pub mod form;
pub mod header;
pub mod popups;
pub mod settings;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, CurrentScreen};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, chunks[0]);
    footer::render_footer(f, app, chunks[2]);

    match app.current_screen {
        CurrentScreen::Form => form::render_form(f, app, chunks[1]),
        CurrentScreen::Settings => settings::render_settings(f, app, chunks[1]),
    }

    // Overlays
    if app.is_submitted_state() {
        popups::render_submitted(f, app, area);
    }
    if let Some(error) = &app.error_banner {
        let error = error.clone();
        popups::render_error_banner(f, area, &error);
    }
}
