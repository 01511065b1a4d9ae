use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::{App, SUBMITTED_WINDOW};
use crate::ui::colors::{ACCENT, ERROR_RED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::common::{centered_rect, render_panel};

/// Dismissable delivery-failure banner. The draft stays intact behind
/// it so the user can retry.
pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 30, area);
    f.render_widget(Clear, popup);
    let inner = render_panel(f, popup, "delivery failed", ERROR_RED);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "your report was kept — press esc and try again",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}

/// Post-submit confirmation card, shown for a fixed window before the
/// form resets itself.
pub fn render_submitted(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(50, 40, area);
    f.render_widget(Clear, popup);
    let inner = render_panel(f, popup, "", ACCENT);

    let remaining = app
        .submitted_at
        .map(|at| SUBMITTED_WINDOW.saturating_sub(at.elapsed()).as_secs() + 1)
        .unwrap_or(0);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "thank you — your report was received",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "it will be handled soon",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("new report in {}s", remaining),
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
