use serde::Serialize;

/// Top-level content branch. Exactly one is active at a time; switching
/// clears every branch-specific field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Series,
    Movie,
    Channel,
}

impl ContentType {
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Series => "Series",
            ContentType::Movie => "Movie",
            ContentType::Channel => "Channel",
        }
    }

    pub fn all() -> &'static [ContentType] {
        &[ContentType::Series, ContentType::Movie, ContentType::Channel]
    }

    pub fn from_label(label: &str) -> Option<ContentType> {
        Self::all().iter().copied().find(|ct| ct.label() == label)
    }
}

/// The in-progress issue report.
///
/// Modeled as an immutable value: every setter consumes the draft and
/// returns a new one with the dependency-respecting fields cleared, so
/// the cascade rules are pure functions and independently testable.
/// `issue_type` and `email` deliberately survive a content-type switch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub content_type: Option<ContentType>,
    pub series: Option<String>,
    pub season: Option<String>,
    pub episode: Option<String>,
    pub movie_category: Option<String>,
    pub movie: Option<String>,
    pub country: Option<String>,
    pub channel: Option<String>,
    pub issue_type: Option<String>,
    pub email: String,
}

impl ReportDraft {
    /// Switch content branch, clearing every branch-specific field
    pub fn with_content_type(self, content_type: ContentType) -> Self {
        Self {
            content_type: Some(content_type),
            issue_type: self.issue_type,
            email: self.email,
            ..Self::default()
        }
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self.season = None;
        self.episode = None;
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self.episode = None;
        self
    }

    pub fn with_episode(mut self, episode: impl Into<String>) -> Self {
        self.episode = Some(episode.into());
        self
    }

    pub fn with_movie_category(mut self, category: impl Into<String>) -> Self {
        self.movie_category = Some(category.into());
        self.movie = None;
        self
    }

    pub fn with_movie(mut self, movie: impl Into<String>) -> Self {
        self.movie = Some(movie.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.channel = None;
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = Some(issue_type.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// A draft is ready when the content branch, the issue type, and
    /// every field of the active branch are set. Contact email is
    /// optional metadata and never gates submission.
    pub fn is_submit_ready(&self) -> bool {
        if self.issue_type.is_none() {
            return false;
        }
        match self.content_type {
            Some(ContentType::Series) => {
                self.series.is_some() && self.season.is_some() && self.episode.is_some()
            }
            Some(ContentType::Movie) => self.movie_category.is_some() && self.movie.is_some(),
            Some(ContentType::Channel) => self.country.is_some() && self.channel.is_some(),
            None => false,
        }
    }
}
