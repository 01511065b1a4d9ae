use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::api::SheetsClient;
use crate::errors::ReportError;

/// Issue types offered by the form. Fixed list, not catalog-driven.
pub const ISSUE_TYPES: &[&str] = &[
    "No audio",
    "No video",
    "Audio out of sync",
    "Wrong or missing subtitles",
    "Constant buffering",
    "Missing episode",
    "Playback error",
    "Other",
];

/// Which option tree a tabular read feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Movies,
    Series,
    Channels,
}

impl CatalogKind {
    pub fn sheet_name(&self) -> &'static str {
        match self {
            CatalogKind::Movies => "Movies",
            CatalogKind::Series => "Series",
            CatalogKind::Channels => "Channels",
        }
    }

    pub fn range(&self) -> String {
        format!("{}!A:Z", self.sheet_name())
    }
}

/// First row of a catalog sheet, used to resolve columns by name.
///
/// Column positions drifted between sheet revisions, so positional
/// indexing is off the table: every sheet must declare a header row and
/// fields are looked up by (case-insensitive) name.
pub struct HeaderRow {
    names: Vec<String>,
}

impl HeaderRow {
    pub fn parse(row: &[String]) -> Self {
        Self {
            names: row.iter().map(|c| c.trim().to_lowercase()).collect(),
        }
    }

    pub fn column(&self, name: &'static str) -> Result<usize, ReportError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or(ReportError::MissingColumn(name))
    }
}

/// Two-level option tree: ordered categories, each with an ordered
/// list of unique leaf names. Used for movies (category -> movie) and
/// channels (country -> channel).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub categories: Vec<String>,
    by_category: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn insert(&mut self, category: &str, leaf: &str) {
        if !self.by_category.contains_key(category) {
            self.categories.push(category.to_string());
        }
        let leaves = self.by_category.entry(category.to_string()).or_default();
        if !leaves.iter().any(|l| l == leaf) {
            leaves.push(leaf.to_string());
        }
    }

    /// Leaves under a category; an unknown key yields an empty list
    pub fn leaves(&self, category: &str) -> &[String] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Three-level option tree for series -> season -> episode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesCatalog {
    pub series: Vec<String>,
    seasons: HashMap<String, Vec<String>>,
    episodes: HashMap<(String, String), Vec<String>>,
}

impl SeriesCatalog {
    pub fn insert(&mut self, series: &str, season: &str, episode: &str) {
        if !self.seasons.contains_key(series) {
            self.series.push(series.to_string());
        }
        let seasons = self.seasons.entry(series.to_string()).or_default();
        if !seasons.iter().any(|s| s == season) {
            seasons.push(season.to_string());
        }
        let episodes = self
            .episodes
            .entry((series.to_string(), season.to_string()))
            .or_default();
        if !episodes.iter().any(|e| e == episode) {
            episodes.push(episode.to_string());
        }
    }

    pub fn seasons(&self, series: &str) -> &[String] {
        self.seasons.get(series).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn episodes(&self, series: &str, season: &str) -> &[String] {
        self.episodes
            .get(&(series.to_string(), season.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// The full option trees for all three content branches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub series: SeriesCatalog,
    pub movies: Catalog,
    pub channels: Catalog,
}

impl Catalogs {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.movies.is_empty() && self.channels.is_empty()
    }
}

/// Decode a (parent, leaf) sheet into a two-level catalog.
///
/// The first row must be a header naming both columns. Rows with an
/// empty parent or leaf cell are skipped. Fewer than two rows means
/// no data, reported as `None`.
pub fn decode_paired(
    rows: &[Vec<String>],
    parent_col: &'static str,
    leaf_col: &'static str,
) -> Result<Option<Catalog>, ReportError> {
    if rows.len() < 2 {
        return Ok(None);
    }

    let header = HeaderRow::parse(&rows[0]);
    let parent_idx = header.column(parent_col)?;
    let leaf_idx = header.column(leaf_col)?;

    let mut catalog = Catalog::default();
    for row in &rows[1..] {
        let parent = row.get(parent_idx).map(|c| c.trim()).unwrap_or("");
        let leaf = row.get(leaf_idx).map(|c| c.trim()).unwrap_or("");
        if parent.is_empty() || leaf.is_empty() {
            continue;
        }
        catalog.insert(parent, leaf);
    }

    if catalog.is_empty() {
        Ok(None)
    } else {
        Ok(Some(catalog))
    }
}

/// Decode a (series, season, episode) sheet into the nested catalog.
/// A row only contributes when all three cells are non-empty.
pub fn decode_series(rows: &[Vec<String>]) -> Result<Option<SeriesCatalog>, ReportError> {
    if rows.len() < 2 {
        return Ok(None);
    }

    let header = HeaderRow::parse(&rows[0]);
    let series_idx = header.column("series")?;
    let season_idx = header.column("season")?;
    let episode_idx = header.column("episode")?;

    let mut catalog = SeriesCatalog::default();
    for row in &rows[1..] {
        let series = row.get(series_idx).map(|c| c.trim()).unwrap_or("");
        let season = row.get(season_idx).map(|c| c.trim()).unwrap_or("");
        let episode = row.get(episode_idx).map(|c| c.trim()).unwrap_or("");
        if series.is_empty() || season.is_empty() || episode.is_empty() {
            continue;
        }
        catalog.insert(series, season, episode);
    }

    if catalog.is_empty() {
        Ok(None)
    } else {
        Ok(Some(catalog))
    }
}

/// Load all three catalogs from the remote source.
///
/// The three reads run in parallel and the result is all-or-nothing:
/// a failure in any read fails the load, so the form never shows a
/// partial catalog.
pub async fn load_remote(client: &SheetsClient) -> Result<Catalogs, ReportError> {
    let movies_range = CatalogKind::Movies.range();
    let series_range = CatalogKind::Series.range();
    let channels_range = CatalogKind::Channels.range();
    let (movie_rows, series_rows, channel_rows) = tokio::try_join!(
        client.read_values(&movies_range),
        client.read_values(&series_range),
        client.read_values(&channels_range),
    )?;

    Ok(Catalogs {
        movies: decode_paired(&movie_rows, "category", "movie")?.unwrap_or_default(),
        series: decode_series(&series_rows)?.unwrap_or_default(),
        channels: decode_paired(&channel_rows, "country", "channel")?.unwrap_or_default(),
    })
}

static BUILTIN: Lazy<Catalogs> = Lazy::new(|| {
    let mut series = SeriesCatalog::default();
    let series_rows: &[(&str, &str, &str)] = &[
        ("Dark Nebula", "Season 1", "Episode 1"),
        ("Dark Nebula", "Season 1", "Episode 2"),
        ("Dark Nebula", "Season 1", "Episode 3"),
        ("Dark Nebula", "Season 2", "Episode 1"),
        ("Dark Nebula", "Season 2", "Episode 2"),
        ("Harbor Lights", "Season 1", "Episode 1"),
        ("Harbor Lights", "Season 1", "Episode 2"),
        ("Harbor Lights", "Season 2", "Episode 1"),
        ("Harbor Lights", "Season 2", "Episode 2"),
        ("Harbor Lights", "Season 2", "Episode 3"),
        ("The Long Meridian", "Season 1", "Episode 1"),
        ("The Long Meridian", "Season 1", "Episode 2"),
    ];
    for (sr, se, ep) in series_rows {
        series.insert(sr, se, ep);
    }

    let mut movies = Catalog::default();
    let movie_rows: &[(&str, &str)] = &[
        ("Action", "Midnight Pursuit"),
        ("Action", "Iron Vector"),
        ("Action", "Falling Skyline"),
        ("Drama", "The Quiet Shore"),
        ("Drama", "Paper Houses"),
        ("Comedy", "Borrowed Tuxedo"),
        ("Comedy", "Second Breakfast"),
        ("Documentary", "Under the Ice Shelf"),
    ];
    for (cat, movie) in movie_rows {
        movies.insert(cat, movie);
    }

    let mut channels = Catalog::default();
    let channel_rows: &[(&str, &str)] = &[
        ("United States", "Summit News"),
        ("United States", "Coast Sports"),
        ("United States", "Night Owl Movies"),
        ("United Kingdom", "Thames One"),
        ("United Kingdom", "Albion Sports"),
        ("Germany", "Nordlicht TV"),
        ("France", "Canal Lumiere"),
    ];
    for (country, channel) in channel_rows {
        channels.insert(country, channel);
    }

    Catalogs {
        series,
        movies,
        channels,
    }
});

/// Static bundled option data, used by the offline demo mode
pub fn builtin() -> &'static Catalogs {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn movie_shaped_rows_round_trip() {
        let rows = rows(&[
            &["Category", "Movie"],
            &["Drama", "ShowA"],
            &["Drama", "ShowB"],
        ]);
        let catalog = decode_paired(&rows, "category", "movie").unwrap().unwrap();
        assert_eq!(catalog.categories, vec!["Drama"]);
        assert_eq!(catalog.leaves("Drama"), ["ShowA", "ShowB"]);
    }

    #[test]
    fn header_only_sheet_is_no_data() {
        let rows = rows(&[&["Category", "Movie"]]);
        assert_eq!(decode_paired(&rows, "category", "movie").unwrap(), None);
    }

    #[test]
    fn columns_resolve_by_name_not_position() {
        // Leaf column first: positional indexing would swap the fields
        let rows = rows(&[
            &["Movie", "Category"],
            &["ShowA", "Drama"],
        ]);
        let catalog = decode_paired(&rows, "category", "movie").unwrap().unwrap();
        assert_eq!(catalog.categories, vec!["Drama"]);
        assert_eq!(catalog.leaves("Drama"), ["ShowA"]);
    }

    #[test]
    fn missing_header_column_is_an_error() {
        let rows = rows(&[&["Category"], &["Drama"]]);
        let err = decode_paired(&rows, "category", "movie").unwrap_err();
        assert_eq!(err, ReportError::MissingColumn("movie"));
    }

    #[test]
    fn rows_with_empty_cells_are_skipped() {
        let rows = rows(&[
            &["Country", "Channel"],
            &["United States", "Summit News"],
            &["", "Orphan Channel"],
            &["Ghostland", ""],
            &["United States", "Summit News"],
        ]);
        let catalog = decode_paired(&rows, "country", "channel").unwrap().unwrap();
        assert_eq!(catalog.categories, vec!["United States"]);
        // duplicate leaf collapsed
        assert_eq!(catalog.leaves("United States"), ["Summit News"]);
    }

    #[test]
    fn series_rows_build_nested_tree() {
        let rows = rows(&[
            &["Series", "Season", "Episode"],
            &["ShowA", "S1", "E1"],
            &["ShowA", "S1", "E2"],
            &["ShowA", "S2", "E1"],
            &["ShowB", "S1", "E1"],
            &["ShowB", "S1", ""],
        ]);
        let catalog = decode_series(&rows).unwrap().unwrap();
        assert_eq!(catalog.series, vec!["ShowA", "ShowB"]);
        assert_eq!(catalog.seasons("ShowA"), ["S1", "S2"]);
        assert_eq!(catalog.episodes("ShowA", "S1"), ["E1", "E2"]);
        assert_eq!(catalog.episodes("ShowB", "S1"), ["E1"]);
    }

    #[test]
    fn unknown_keys_yield_empty_lists() {
        let catalog = builtin();
        assert!(catalog.series.seasons("No Such Show").is_empty());
        assert!(catalog.series.episodes("Dark Nebula", "Season 9").is_empty());
        assert!(catalog.movies.leaves("No Such Category").is_empty());
        assert!(catalog.channels.leaves("Atlantis").is_empty());
    }

    #[test]
    fn builtin_catalogs_are_populated() {
        let catalog = builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.series.series.contains(&"Dark Nebula".to_string()));
        assert!(!catalog.movies.leaves("Action").is_empty());
    }
}
