use serde::Serialize;

use crate::api::SheetsClient;
use crate::config::GatewayConfig;
use crate::draft::{ContentType, ReportDraft};
use crate::errors::ReportError;

/// Every submission is also mirrored to this sheet as a redundancy
/// measure, in addition to its content-specific target sheet.
pub const BACKUP_SHEET: &str = "All Reports";

/// Which downstream sheet a submission belongs to. Total over the
/// closed `ContentType` enum, so no default bucket exists.
pub fn target_sheet(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Series => "Series",
        ContentType::Movie => "Movies",
        ContentType::Channel => "Channels",
    }
}

/// Wire payload for one report. Immutable once built; field names
/// follow the sink's expected JSON shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubmissionRecord {
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
    #[serde(rename = "issueType")]
    pub issue_type: String,
    pub timestamp: String,
    #[serde(rename = "targetSheet")]
    pub target_sheet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub movie_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SubmissionRecord {
    /// Build the payload from a complete draft. Returns `None` for
    /// drafts that are not submit-ready.
    pub fn from_draft(draft: &ReportDraft) -> Option<Self> {
        Self::from_draft_at(draft, chrono::Utc::now().to_rfc3339())
    }

    /// Same as `from_draft` with an explicit timestamp
    pub fn from_draft_at(draft: &ReportDraft, timestamp: String) -> Option<Self> {
        if !draft.is_submit_ready() {
            return None;
        }
        let content_type = draft.content_type?;
        let email = if draft.email.trim().is_empty() {
            None
        } else {
            Some(draft.email.trim().to_string())
        };

        Some(Self {
            content_type,
            issue_type: draft.issue_type.clone()?,
            timestamp,
            target_sheet: target_sheet(content_type).to_string(),
            series: draft.series.clone(),
            season: draft.season.clone(),
            episode: draft.episode.clone(),
            movie_category: draft.movie_category.clone(),
            movie: draft.movie.clone(),
            country: draft.country.clone(),
            channel: draft.channel.clone(),
            email,
        })
    }

    /// Copy of this record addressed at a different sheet
    pub fn for_sheet(&self, sheet: &str) -> Self {
        Self {
            target_sheet: sheet.to_string(),
            ..self.clone()
        }
    }
}

/// Delivers completed reports to the configured endpoint.
///
/// The sink is fire-and-forget: responses are never parsed, so success
/// means only that both deliveries completed without a transport error.
#[derive(Debug, Clone)]
pub struct SubmitGateway {
    client: SheetsClient,
}

impl SubmitGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: SheetsClient::new(config),
        }
    }

    /// Deliver the record to its target sheet, then to the backup
    /// sheet. Sequential; both must succeed.
    pub async fn submit(&self, record: &SubmissionRecord) -> Result<(), ReportError> {
        if !self.client.config().is_configured() {
            return Err(ReportError::ConfigurationMissing);
        }

        self.client.append(record).await?;
        let backup = record.for_sheet(BACKUP_SHEET);
        self.client.append(&backup).await?;
        Ok(())
    }

    /// Settings-screen connectivity check: fires one marker payload at
    /// the endpoint. Subject to the same unreadable-response contract.
    pub async fn test_connection(&self) -> Result<(), ReportError> {
        let marker = serde_json::json!({
            "contentType": "test",
            "issueType": "connection test",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "targetSheet": BACKUP_SHEET,
        });
        self.client.append(&marker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ReportDraft;

    fn series_draft() -> ReportDraft {
        ReportDraft::default()
            .with_content_type(ContentType::Series)
            .with_series("ShowA")
            .with_season("S1")
            .with_episode("E1")
            .with_issue_type("Audio")
    }

    #[test]
    fn record_carries_branch_fields_and_discriminator() {
        let record =
            SubmissionRecord::from_draft_at(&series_draft(), "2026-01-01T00:00:00Z".into())
                .unwrap();
        assert_eq!(record.target_sheet, "Series");
        assert_eq!(record.series.as_deref(), Some("ShowA"));
        assert_eq!(record.season.as_deref(), Some("S1"));
        assert_eq!(record.episode.as_deref(), Some("E1"));
        assert_eq!(record.movie, None);
        assert_eq!(record.country, None);
    }

    #[test]
    fn incomplete_draft_builds_no_record() {
        let draft = ReportDraft::default().with_content_type(ContentType::Movie);
        assert_eq!(SubmissionRecord::from_draft(&draft), None);
    }

    #[test]
    fn serialized_payload_uses_wire_field_names() {
        let record =
            SubmissionRecord::from_draft_at(&series_draft(), "2026-01-01T00:00:00Z".into())
                .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["contentType"], "series");
        assert_eq!(json["issueType"], "Audio");
        assert_eq!(json["targetSheet"], "Series");
        assert_eq!(json["series"], "ShowA");
        // absent branch fields are omitted, not null
        assert!(json.get("movie").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn movie_branch_maps_category_field() {
        let draft = ReportDraft::default()
            .with_content_type(ContentType::Movie)
            .with_movie_category("Drama")
            .with_movie("Paper Houses")
            .with_issue_type("No video")
            .with_email(" viewer@example.com ");
        let record = SubmissionRecord::from_draft(&draft).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["targetSheet"], "Movies");
        assert_eq!(json["category"], "Drama");
        assert_eq!(json["movie"], "Paper Houses");
        assert_eq!(json["email"], "viewer@example.com");
    }

    #[test]
    fn for_sheet_changes_only_the_discriminator() {
        let record =
            SubmissionRecord::from_draft_at(&series_draft(), "2026-01-01T00:00:00Z".into())
                .unwrap();
        let backup = record.for_sheet(BACKUP_SHEET);
        assert_eq!(backup.target_sheet, BACKUP_SHEET);
        assert_eq!(backup.series, record.series);
        assert_eq!(backup.timestamp, record.timestamp);
    }

    #[tokio::test]
    async fn unconfigured_gateway_fails_without_network() {
        let gateway = SubmitGateway::new(GatewayConfig::default());
        let record =
            SubmissionRecord::from_draft_at(&series_draft(), "2026-01-01T00:00:00Z".into())
                .unwrap();
        let err = gateway.submit(&record).await.unwrap_err();
        assert_eq!(err, ReportError::ConfigurationMissing);
    }
}
