use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CatalogSource, CurrentScreen};
use crate::ui::colors::{ACCENT, TEXT_DIM, TEXT_SECONDARY, WARN};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.current_screen {
        CurrentScreen::Form => "issue desk — report a content problem",
        CurrentScreen::Settings => "issue desk — gateway settings",
    };

    let title_line = Line::from(vec![
        Span::styled("  ▲ ", Style::default().fg(ACCENT)),
        Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title_line), area);

    // Persistent, non-blocking status on the right edge
    let status = if app.current_screen == CurrentScreen::Form {
        if app.source == CatalogSource::Remote && !app.config.is_configured() {
            Some((
                "gateway not configured — press g for settings".to_string(),
                WARN,
            ))
        } else if app.catalogs_loading {
            Some(("loading catalogs...".to_string(), TEXT_SECONDARY))
        } else {
            app.catalog_status.clone().map(|s| (s, WARN))
        }
    } else {
        None
    };

    if let Some((text, color)) = status {
        let status_line = Line::from(Span::styled(
            format!("{}  ", text),
            Style::default().fg(color),
        ));
        f.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Right),
            area,
        );
    }

    if area.height > 1 {
        let rule = "─".repeat(area.width as usize);
        let rule_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        f.render_widget(
            Paragraph::new(Span::styled(rule, Style::default().fg(TEXT_DIM))),
            rule_area,
        );
    }
}
