use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tui_input::Input;

use crate::catalog::{self, Catalogs, ISSUE_TYPES};
use crate::config::GatewayConfig;
use crate::draft::{ContentType, ReportDraft};
use crate::errors::ReportError;
use crate::select::SearchableSelect;
use crate::submit::{SubmissionRecord, SubmitGateway};

/// How long the submitted confirmation stays up before the draft resets
pub const SUBMITTED_WINDOW: Duration = Duration::from_secs(3);
/// Simulated delivery latency in offline demo mode
pub const OFFLINE_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
/// How long the settings "saved" flash stays visible
pub const SAVED_FLASH: Duration = Duration::from_secs(3);

/// Messages sent back from spawned tasks to the UI thread
#[derive(Debug)]
pub enum AsyncAction {
    CatalogsLoaded(Catalogs),
    CatalogsFailed(ReportError),
    SubmitFinished(Result<(), ReportError>),
    ConnectionTested(Result<(), ReportError>),
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CurrentScreen {
    Form,
    Settings,
}

/// Where option data comes from
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CatalogSource {
    /// Remote tabular source, gated on configuration
    Remote,
    /// Bundled static tables, no network (demo mode)
    Builtin,
}

/// Focusable rows on the report form. Which rows are visible depends on
/// the draft: branch fields appear as their parent gets a value.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FormField {
    ContentType,
    Series,
    Season,
    Episode,
    MovieCategory,
    Movie,
    Country,
    Channel,
    IssueType,
    Email,
    Submit,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::ContentType => "content type",
            FormField::Series => "series",
            FormField::Season => "season",
            FormField::Episode => "episode",
            FormField::MovieCategory => "movie category",
            FormField::Movie => "movie",
            FormField::Country => "country",
            FormField::Channel => "channel",
            FormField::IssueType => "issue type",
            FormField::Email => "contact email (optional)",
            FormField::Submit => "send report",
        }
    }

    /// True for rows backed by the searchable dropdown
    pub fn is_select(&self) -> bool {
        !matches!(self, FormField::Email | FormField::Submit)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SettingsField {
    SpreadsheetId,
    EndpointUrl,
    ApiKey,
    SheetName,
    Save,
    TestConnection,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::SpreadsheetId,
            SettingsField::EndpointUrl,
            SettingsField::ApiKey,
            SettingsField::SheetName,
            SettingsField::Save,
            SettingsField::TestConnection,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::SpreadsheetId => "spreadsheet id",
            SettingsField::EndpointUrl => "endpoint url",
            SettingsField::ApiKey => "api key",
            SettingsField::SheetName => "sheet name",
            SettingsField::Save => "save settings",
            SettingsField::TestConnection => "test connection",
        }
    }

    pub fn is_input(&self) -> bool {
        !matches!(self, SettingsField::Save | SettingsField::TestConnection)
    }
}

/// Settings screen state: staged edits plus save/test feedback
pub struct SettingsForm {
    pub field_focus: SettingsField,
    pub editing: bool,
    pub input_spreadsheet_id: Input,
    pub input_endpoint_url: Input,
    pub input_api_key: Input,
    pub input_sheet_name: Input,
    pub saved_at: Option<Instant>,
    pub test_result: Option<String>,
    pub testing: bool,
}

impl SettingsForm {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            field_focus: SettingsField::SpreadsheetId,
            editing: false,
            input_spreadsheet_id: Input::new(config.spreadsheet_id.clone()),
            input_endpoint_url: Input::new(config.endpoint_url.clone()),
            input_api_key: Input::new(config.api_key.clone()),
            input_sheet_name: Input::new(config.sheet_name.clone()),
            saved_at: None,
            test_result: None,
            testing: false,
        }
    }

    pub fn input_mut(&mut self, field: SettingsField) -> Option<&mut Input> {
        match field {
            SettingsField::SpreadsheetId => Some(&mut self.input_spreadsheet_id),
            SettingsField::EndpointUrl => Some(&mut self.input_endpoint_url),
            SettingsField::ApiKey => Some(&mut self.input_api_key),
            SettingsField::SheetName => Some(&mut self.input_sheet_name),
            _ => None,
        }
    }

    /// Config value as currently staged on the screen
    pub fn staged_config(&self) -> GatewayConfig {
        GatewayConfig {
            spreadsheet_id: self.input_spreadsheet_id.value().trim().to_string(),
            endpoint_url: self.input_endpoint_url.value().trim().to_string(),
            api_key: self.input_api_key.value().trim().to_string(),
            sheet_name: self.input_sheet_name.value().trim().to_string(),
        }
    }
}

pub struct App {
    pub config: GatewayConfig,
    pub source: CatalogSource,
    pub catalogs: Catalogs,
    pub catalogs_loading: bool,
    /// Non-blocking "catalog unavailable" notice
    pub catalog_status: Option<String>,

    pub current_screen: CurrentScreen,
    pub should_quit: bool,
    pub tick: u64,

    // Report form
    pub draft: ReportDraft,
    pub focus: FormField,
    pub select: SearchableSelect,
    pub editing_email: bool,
    pub input_email: Input,
    pub submitting: bool,
    pub submitted_at: Option<Instant>,
    /// Dismissable delivery-failure banner
    pub error_banner: Option<String>,

    pub settings: SettingsForm,

    // Widget bounds captured at render time for mouse hit-testing
    pub area_fields: Vec<(FormField, Rect)>,
    pub area_dropdown: Rect,
}

impl App {
    pub fn new(source: CatalogSource) -> Self {
        let config = GatewayConfig::load().unwrap_or_default();
        Self::with_config(config, source)
    }

    pub fn with_config(config: GatewayConfig, source: CatalogSource) -> Self {
        let settings = SettingsForm::from_config(&config);
        Self {
            config,
            source,
            catalogs: Catalogs::default(),
            catalogs_loading: false,
            catalog_status: None,
            current_screen: CurrentScreen::Form,
            should_quit: false,
            tick: 0,
            draft: ReportDraft::default(),
            focus: FormField::ContentType,
            select: SearchableSelect::default(),
            editing_email: false,
            input_email: Input::default(),
            submitting: false,
            submitted_at: None,
            error_banner: None,
            settings,
            area_fields: Vec::new(),
            area_dropdown: Rect::default(),
        }
    }

    /// Kick off the initial option-catalog load. All three catalogs are
    /// fetched together; the form never sees a partial set.
    pub fn start_catalog_load(&mut self, tx: &mpsc::Sender<AsyncAction>) {
        match self.source {
            CatalogSource::Builtin => {
                self.catalogs = catalog::builtin().clone();
                self.catalog_status = None;
            }
            CatalogSource::Remote => {
                if !self.config.can_read() {
                    // Unconfigured: selectors degrade to empty lists
                    self.catalogs = Catalogs::default();
                    return;
                }
                self.catalogs_loading = true;
                let client = crate::api::SheetsClient::new(self.config.clone());
                let tx = tx.clone();
                tokio::spawn(async move {
                    match catalog::load_remote(&client).await {
                        Ok(catalogs) => {
                            let _ = tx.send(AsyncAction::CatalogsLoaded(catalogs)).await;
                        }
                        Err(e) => {
                            let _ = tx.send(AsyncAction::CatalogsFailed(e)).await;
                        }
                    }
                });
            }
        }
    }

    /// The form rows visible for the current draft, in display order
    pub fn visible_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::ContentType];
        match self.draft.content_type {
            Some(ContentType::Series) => {
                fields.push(FormField::Series);
                if self.draft.series.is_some() {
                    fields.push(FormField::Season);
                }
                if self.draft.season.is_some() {
                    fields.push(FormField::Episode);
                }
            }
            Some(ContentType::Movie) => {
                fields.push(FormField::MovieCategory);
                if self.draft.movie_category.is_some() {
                    fields.push(FormField::Movie);
                }
            }
            Some(ContentType::Channel) => {
                fields.push(FormField::Country);
                if self.draft.country.is_some() {
                    fields.push(FormField::Channel);
                }
            }
            None => {}
        }
        fields.push(FormField::IssueType);
        fields.push(FormField::Email);
        fields.push(FormField::Submit);
        fields
    }

    /// Option list for a dropdown-backed field. Derived from the
    /// catalogs on every call, never stored; unknown upstream keys
    /// yield an empty list.
    pub fn options_for(&self, field: FormField) -> Vec<String> {
        match field {
            FormField::ContentType => ContentType::all()
                .iter()
                .map(|ct| ct.label().to_string())
                .collect(),
            FormField::Series => self.catalogs.series.series.clone(),
            FormField::Season => match &self.draft.series {
                Some(series) => self.catalogs.series.seasons(series).to_vec(),
                None => Vec::new(),
            },
            FormField::Episode => match (&self.draft.series, &self.draft.season) {
                (Some(series), Some(season)) => {
                    self.catalogs.series.episodes(series, season).to_vec()
                }
                _ => Vec::new(),
            },
            FormField::MovieCategory => self.catalogs.movies.categories.clone(),
            FormField::Movie => match &self.draft.movie_category {
                Some(category) => self.catalogs.movies.leaves(category).to_vec(),
                None => Vec::new(),
            },
            FormField::Country => self.catalogs.channels.categories.clone(),
            FormField::Channel => match &self.draft.country {
                Some(country) => self.catalogs.channels.leaves(country).to_vec(),
                None => Vec::new(),
            },
            FormField::IssueType => ISSUE_TYPES.iter().map(|s| s.to_string()).collect(),
            FormField::Email | FormField::Submit => Vec::new(),
        }
    }

    /// Current display value for a form row
    pub fn value_for(&self, field: FormField) -> Option<String> {
        match field {
            FormField::ContentType => self.draft.content_type.map(|ct| ct.label().to_string()),
            FormField::Series => self.draft.series.clone(),
            FormField::Season => self.draft.season.clone(),
            FormField::Episode => self.draft.episode.clone(),
            FormField::MovieCategory => self.draft.movie_category.clone(),
            FormField::Movie => self.draft.movie.clone(),
            FormField::Country => self.draft.country.clone(),
            FormField::Channel => self.draft.channel.clone(),
            FormField::IssueType => self.draft.issue_type.clone(),
            FormField::Email => {
                if self.draft.email.is_empty() {
                    None
                } else {
                    Some(self.draft.email.clone())
                }
            }
            FormField::Submit => None,
        }
    }

    /// Apply a dropdown selection to the draft, cascading resets
    pub fn apply_selection(&mut self, field: FormField, value: String) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = match field {
            FormField::ContentType => match ContentType::from_label(&value) {
                Some(ct) => draft.with_content_type(ct),
                None => draft,
            },
            FormField::Series => draft.with_series(value),
            FormField::Season => draft.with_season(value),
            FormField::Episode => draft.with_episode(value),
            FormField::MovieCategory => draft.with_movie_category(value),
            FormField::Movie => draft.with_movie(value),
            FormField::Country => draft.with_country(value),
            FormField::Channel => draft.with_channel(value),
            FormField::IssueType => draft.with_issue_type(value),
            FormField::Email | FormField::Submit => draft,
        };
        // The focused row may have disappeared in the cascade
        self.clamp_focus();
    }

    fn clamp_focus(&mut self) {
        let fields = self.visible_fields();
        if !fields.contains(&self.focus) {
            self.focus = FormField::ContentType;
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        if let Some(pos) = fields.iter().position(|f| *f == self.focus) {
            self.focus = fields[(pos + 1) % fields.len()];
        } else {
            self.focus = FormField::ContentType;
        }
    }

    pub fn focus_previous(&mut self) {
        let fields = self.visible_fields();
        if let Some(pos) = fields.iter().position(|f| *f == self.focus) {
            self.focus = fields[pos.checked_sub(1).unwrap_or(fields.len() - 1)];
        } else {
            self.focus = FormField::ContentType;
        }
    }

    /// Submit the draft. Not-ready drafts are silently ignored: the
    /// submit row is rendered disabled, no validation message appears.
    pub fn begin_submit(&mut self, tx: &mpsc::Sender<AsyncAction>) {
        if self.submitting || !self.draft.is_submit_ready() {
            return;
        }
        let Some(record) = SubmissionRecord::from_draft(&self.draft) else {
            return;
        };

        self.submitting = true;
        self.error_banner = None;
        let tx = tx.clone();

        match self.source {
            CatalogSource::Builtin => {
                // Demo mode: no sink, simulate delivery latency
                tokio::spawn(async move {
                    tokio::time::sleep(OFFLINE_SUBMIT_LATENCY).await;
                    let _ = tx.send(AsyncAction::SubmitFinished(Ok(()))).await;
                });
            }
            CatalogSource::Remote => {
                let gateway = SubmitGateway::new(self.config.clone());
                tokio::spawn(async move {
                    let result = gateway.submit(&record).await;
                    let _ = tx.send(AsyncAction::SubmitFinished(result)).await;
                });
            }
        }
    }

    /// Fire the settings-screen marker POST
    pub fn begin_connection_test(&mut self, tx: &mpsc::Sender<AsyncAction>) {
        if self.settings.testing {
            return;
        }
        self.settings.testing = true;
        self.settings.test_result = None;
        let gateway = SubmitGateway::new(self.settings.staged_config());
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = gateway.test_connection().await;
            let _ = tx.send(AsyncAction::ConnectionTested(result)).await;
        });
    }

    /// Persist the staged settings and rebuild everything derived from
    /// the configuration.
    pub fn save_settings(&mut self, tx: &mpsc::Sender<AsyncAction>) {
        let staged = self.settings.staged_config();
        if let Err(e) = staged.save() {
            self.settings.test_result = Some(format!("save failed: {}", e));
            return;
        }
        self.config = staged;
        self.settings.saved_at = Some(Instant::now());
        self.start_catalog_load(tx);
    }

    /// Re-read the persisted configuration, discarding staged edits
    pub fn reload_config(&mut self) {
        if self.config.reload().is_ok() {
            self.settings = SettingsForm::from_config(&self.config);
        }
    }

    pub fn reset_draft(&mut self) {
        self.draft = ReportDraft::default();
        self.input_email.reset();
        self.editing_email = false;
        self.focus = FormField::ContentType;
        self.select.close();
        self.submitted_at = None;
    }

    /// Per-frame housekeeping: advance the tick and expire timed
    /// display states. Timers are instants checked here rather than
    /// spawned sleeps, so teardown cannot race a state mutation.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if let Some(at) = self.submitted_at {
            if at.elapsed() >= SUBMITTED_WINDOW {
                self.reset_draft();
            }
        }
        if let Some(at) = self.settings.saved_at {
            if at.elapsed() >= SAVED_FLASH {
                self.settings.saved_at = None;
            }
        }
    }

    /// True while the post-submit confirmation is on screen
    pub fn is_submitted_state(&self) -> bool {
        self.submitted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::with_config(GatewayConfig::default(), CatalogSource::Builtin);
        app.catalogs = catalog::builtin().clone();
        app
    }

    #[test]
    fn visible_fields_follow_the_cascade() {
        let mut app = app();
        assert_eq!(
            app.visible_fields(),
            vec![
                FormField::ContentType,
                FormField::IssueType,
                FormField::Email,
                FormField::Submit
            ]
        );

        app.apply_selection(FormField::ContentType, "Series".into());
        assert!(app.visible_fields().contains(&FormField::Series));
        assert!(!app.visible_fields().contains(&FormField::Season));

        app.apply_selection(FormField::Series, "Dark Nebula".into());
        assert!(app.visible_fields().contains(&FormField::Season));
    }

    #[test]
    fn season_options_derive_from_selected_series() {
        let mut app = app();
        app.apply_selection(FormField::ContentType, "Series".into());
        assert!(app.options_for(FormField::Season).is_empty());

        app.apply_selection(FormField::Series, "Dark Nebula".into());
        let seasons = app.options_for(FormField::Season);
        assert_eq!(seasons, vec!["Season 1", "Season 2"]);
    }

    #[test]
    fn focus_falls_back_when_its_row_disappears() {
        let mut app = app();
        app.apply_selection(FormField::ContentType, "Series".into());
        app.apply_selection(FormField::Series, "Dark Nebula".into());
        app.apply_selection(FormField::Season, "Season 1".into());
        app.focus = FormField::Episode;

        // Switching branches removes the episode row
        app.apply_selection(FormField::ContentType, "Movie".into());
        assert_eq!(app.focus, FormField::ContentType);
    }

    #[test]
    fn focus_cycles_through_visible_fields() {
        let mut app = app();
        app.focus = FormField::ContentType;
        app.focus_next();
        assert_eq!(app.focus, FormField::IssueType);
        app.focus_previous();
        assert_eq!(app.focus, FormField::ContentType);
        app.focus_previous();
        assert_eq!(app.focus, FormField::Submit);
    }

    #[test]
    fn unconfigured_remote_source_leaves_catalogs_empty() {
        let mut app = App::with_config(GatewayConfig::default(), CatalogSource::Remote);
        let (tx, _rx) = mpsc::channel(4);
        app.start_catalog_load(&tx);
        assert!(app.catalogs.is_empty());
        assert!(!app.catalogs_loading);
        assert!(app.options_for(FormField::Series).is_empty());
        assert!(app.options_for(FormField::MovieCategory).is_empty());
        assert!(app.options_for(FormField::Country).is_empty());
    }

    #[test]
    fn reset_clears_issue_type_and_email() {
        let mut app = app();
        app.apply_selection(FormField::ContentType, "Channel".into());
        app.apply_selection(FormField::Country, "Germany".into());
        app.apply_selection(FormField::Channel, "Nordlicht TV".into());
        app.apply_selection(FormField::IssueType, "Other".into());
        app.draft = std::mem::take(&mut app.draft).with_email("a@b.example");
        app.submitted_at = Some(Instant::now());

        app.reset_draft();
        assert_eq!(app.draft, ReportDraft::default());
        assert!(!app.is_submitted_state());
    }
}
