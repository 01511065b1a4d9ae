use serde::Deserialize;

use crate::config::GatewayConfig;
use crate::errors::ReportError;

/// Shape of a spreadsheet-values read response
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// HTTP client for the spreadsheet backend.
///
/// Reads go against the values endpoint and expect JSON. Writes are
/// fire-and-forget POSTs against the configured endpoint URL: the sink
/// contract forbids reading status or body, so the response is dropped
/// unread and success means only "no transport-level error".
#[derive(Debug, Clone)]
pub struct SheetsClient {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl SheetsClient {
    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("issue-desk")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Read raw tabular rows for a `Sheet!A:Z` style range.
    /// Non-2xx status is a hard failure.
    pub async fn read_values(&self, range: &str) -> Result<Vec<Vec<String>>, ReportError> {
        if !self.config.can_read() {
            return Err(ReportError::ConfigurationMissing);
        }

        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}?key={}",
            self.config.spreadsheet_id, range, self.config.api_key
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ReportError::RemoteRead(resp.status().as_u16()));
        }

        let body: ValueRange = resp
            .json()
            .await
            .map_err(|e| ReportError::Parse(e.to_string()))?;
        Ok(body.values)
    }

    /// Deliver one JSON payload to the configured endpoint.
    /// The response is intentionally not inspected.
    pub async fn append<T: serde::Serialize>(&self, payload: &T) -> Result<(), ReportError> {
        if !self.config.is_configured() {
            return Err(ReportError::ConfigurationMissing);
        }

        self.client
            .post(&self.config.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        Ok(())
    }
}
