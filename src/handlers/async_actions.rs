use std::time::Instant;

use crate::app::{App, AsyncAction};
use crate::catalog::Catalogs;

/// Apply one message from a background task to the app state. Runs on
/// the UI thread; this is the only place async results mutate state.
pub fn handle_async_action(app: &mut App, action: AsyncAction) {
    match action {
        AsyncAction::CatalogsLoaded(catalogs) => {
            app.catalogs = catalogs;
            app.catalogs_loading = false;
            app.catalog_status = None;
        }
        AsyncAction::CatalogsFailed(e) => {
            // All-or-nothing load: selectors degrade to empty lists
            app.catalogs = Catalogs::default();
            app.catalogs_loading = false;
            app.catalog_status = Some(format!("catalog unavailable: {}", e));
        }
        AsyncAction::SubmitFinished(Ok(())) => {
            app.submitting = false;
            app.submitted_at = Some(Instant::now());
        }
        AsyncAction::SubmitFinished(Err(e)) => {
            // Draft is preserved so the user can retry
            app.submitting = false;
            app.error_banner = Some(e.to_string());
        }
        AsyncAction::ConnectionTested(Ok(())) => {
            app.settings.testing = false;
            app.settings.test_result =
                Some("test payload sent — check the backup sheet".to_string());
        }
        AsyncAction::ConnectionTested(Err(e)) => {
            app.settings.testing = false;
            app.settings.test_result = Some(format!("test failed: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CatalogSource, FormField};
    use crate::config::GatewayConfig;
    use crate::errors::ReportError;

    fn app() -> App {
        App::with_config(GatewayConfig::default(), CatalogSource::Remote)
    }

    #[test]
    fn failed_load_empties_catalogs_and_sets_status() {
        let mut app = app();
        app.catalogs = crate::catalog::builtin().clone();
        app.catalogs_loading = true;

        handle_async_action(&mut app, AsyncAction::CatalogsFailed(ReportError::RemoteRead(500)));
        assert!(app.catalogs.is_empty());
        assert!(!app.catalogs_loading);
        assert!(app.catalog_status.is_some());
        assert!(app.options_for(FormField::Series).is_empty());
    }

    #[test]
    fn successful_submit_enters_submitted_state() {
        let mut app = app();
        app.submitting = true;
        handle_async_action(&mut app, AsyncAction::SubmitFinished(Ok(())));
        assert!(!app.submitting);
        assert!(app.is_submitted_state());
    }

    #[test]
    fn failed_submit_keeps_draft_and_raises_banner() {
        let mut app = app();
        app.draft = std::mem::take(&mut app.draft)
            .with_content_type(crate::draft::ContentType::Movie)
            .with_movie_category("Drama".to_string());
        app.submitting = true;

        handle_async_action(
            &mut app,
            AsyncAction::SubmitFinished(Err(ReportError::ConfigurationMissing)),
        );
        assert!(!app.submitting);
        assert!(!app.is_submitted_state());
        assert!(app.error_banner.is_some());
        assert_eq!(app.draft.movie_category.as_deref(), Some("Drama"));
    }
}
