pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod errors;
pub mod handlers;
pub mod select;
pub mod submit;
pub mod ui;

#[cfg(test)]
mod tests {
    use crate::app::{App, CatalogSource, CurrentScreen, FormField};
    use crate::config::GatewayConfig;

    #[test]
    fn new_app_starts_on_the_form() {
        let app = App::with_config(GatewayConfig::default(), CatalogSource::Remote);
        assert_eq!(app.current_screen, CurrentScreen::Form);
        assert_eq!(app.focus, FormField::ContentType);
        assert!(!app.should_quit);
    }

    #[test]
    fn fresh_app_has_an_empty_draft() {
        let app = App::with_config(GatewayConfig::default(), CatalogSource::Remote);
        assert!(!app.draft.is_submit_ready());
        assert!(app.catalogs.is_empty());
    }
}
