use thiserror::Error;

/// Error type for the report form subsystem.
///
/// Every variant carries a user-facing message; failures are surfaced as
/// banners at the component boundary and never propagate to a global
/// handler. Incomplete drafts are not an error at all: they merely
/// disable the submit action.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReportError {
    /// No gateway endpoint configured
    #[error("Gateway not configured. Open settings and set the endpoint URL.")]
    ConfigurationMissing,

    /// Catalog read returned a non-2xx status
    #[error("Catalog read failed with status {0}")]
    RemoteRead(u16),

    /// Catalog response could not be decoded
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    /// Network-level delivery failure
    #[error("Delivery failed: {0}")]
    Transport(String),

    /// Header row lacks a required named column
    #[error("Catalog header row is missing column '{0}'")]
    MissingColumn(&'static str),
}

impl ReportError {
    /// True for failures the user can fix from the settings screen
    pub fn is_configuration(&self) -> bool {
        matches!(self, ReportError::ConfigurationMissing)
    }
}
