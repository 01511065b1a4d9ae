use std::time::Instant;

use issue_desk_lib::app::{App, CatalogSource, CurrentScreen, FormField};
use issue_desk_lib::config::GatewayConfig;
use issue_desk_lib::draft::ContentType;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ─── Helpers ───────────────────────────────────────────────────────────────────

fn make_app() -> App {
    let mut app = App::with_config(GatewayConfig::default(), CatalogSource::Builtin);
    app.catalogs = issue_desk_lib::catalog::builtin().clone();
    app
}

/// Render one frame of the UI — panics on crash
fn render_frame(app: &mut App) {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            issue_desk_lib::ui::ui(f, app);
        })
        .unwrap();
}

// ─── Test 1: All Screens Render Without Panic (Empty State) ────────────────────

#[test]
fn test_all_screens_render_empty_state() {
    let screens = vec![CurrentScreen::Form, CurrentScreen::Settings];

    for screen in screens {
        let mut app = App::with_config(GatewayConfig::default(), CatalogSource::Remote);
        app.current_screen = screen;
        render_frame(&mut app);
        // If we get here without panic, the screen rendered OK
    }
}

// ─── Test 2: Form With Every Branch Expanded ───────────────────────────────────

#[test]
fn test_series_branch_fully_expanded() {
    let mut app = make_app();
    app.apply_selection(FormField::ContentType, "Series".to_string());
    app.apply_selection(FormField::Series, "Dark Nebula".to_string());
    app.apply_selection(FormField::Season, "Season 1".to_string());
    app.apply_selection(FormField::Episode, "Episode 2".to_string());
    app.apply_selection(FormField::IssueType, "No audio".to_string());
    render_frame(&mut app);
    assert!(app.draft.is_submit_ready());
}

#[test]
fn test_movie_and_channel_branches_render() {
    let mut app = make_app();
    app.apply_selection(FormField::ContentType, "Movie".to_string());
    app.apply_selection(FormField::MovieCategory, "Drama".to_string());
    render_frame(&mut app);

    app.apply_selection(FormField::ContentType, "Channel".to_string());
    app.apply_selection(FormField::Country, "Germany".to_string());
    render_frame(&mut app);
    assert_eq!(app.draft.content_type, Some(ContentType::Channel));
}

// ─── Test 3: Dropdown Overlay ──────────────────────────────────────────────────

#[test]
fn test_open_dropdown_renders_and_registers_hit_area() {
    let mut app = make_app();
    app.focus = FormField::ContentType;
    app.select.open();
    render_frame(&mut app);
    assert_ne!(app.area_dropdown, ratatui::layout::Rect::default());

    // Closing removes the hit area on the next frame
    app.select.close();
    render_frame(&mut app);
    assert_eq!(app.area_dropdown, ratatui::layout::Rect::default());
}

#[test]
fn test_dropdown_with_no_matches_renders() {
    let mut app = make_app();
    app.focus = FormField::ContentType;
    app.select.open();
    app.select.filter = tui_input::Input::new("zzzzz".to_string());
    app.select.clamp_highlight(0);
    render_frame(&mut app);
}

// ─── Test 4: Overlay States ────────────────────────────────────────────────────

#[test]
fn test_submitted_and_error_overlays_render() {
    let mut app = make_app();
    app.submitted_at = Some(Instant::now());
    render_frame(&mut app);

    let mut app = make_app();
    app.error_banner = Some("delivery failed: connection refused".to_string());
    render_frame(&mut app);
}

#[test]
fn test_submitting_state_renders() {
    let mut app = make_app();
    app.submitting = true;
    app.focus = FormField::Submit;
    render_frame(&mut app);
}

// ─── Test 5: Unconfigured Remote Source ────────────────────────────────────────

#[test]
fn test_unconfigured_app_renders_with_empty_selectors() {
    let mut app = App::with_config(GatewayConfig::default(), CatalogSource::Remote);
    assert!(app.catalogs.is_empty());
    render_frame(&mut app);

    // Opening a catalog-backed selector with no data must not panic
    app.apply_selection(FormField::ContentType, "Series".to_string());
    app.focus = FormField::Series;
    app.select.open();
    app.select.clamp_highlight(0);
    render_frame(&mut app);
    assert!(app.options_for(FormField::Series).is_empty());
}

// ─── Test 6: Settings Screen States ────────────────────────────────────────────

#[test]
fn test_settings_screen_states_render() {
    let mut app = make_app();
    app.current_screen = CurrentScreen::Settings;
    render_frame(&mut app);

    app.settings.editing = true;
    render_frame(&mut app);

    app.settings.editing = false;
    app.settings.saved_at = Some(Instant::now());
    app.settings.test_result = Some("test failed: connection refused".to_string());
    render_frame(&mut app);
}

// ─── Test 7: Tiny Terminal ─────────────────────────────────────────────────────

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = make_app();
    app.apply_selection(FormField::ContentType, "Series".to_string());
    app.select.open();
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            issue_desk_lib::ui::ui(f, &mut app);
        })
        .unwrap();
}
