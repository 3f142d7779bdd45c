//! Document version data models

use aws_sdk_ssm::types::DocumentVersionInfo;
use chrono::{DateTime, Utc};

use crate::error::{CleanerError, Result};

/// One entry of a ListDocumentVersions response
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentVersion {
    pub name: String,
    /// Version identifier as returned by the service (e.g., "3")
    pub version: String,
    /// Optional user-assigned version label
    pub version_name: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub is_default: bool,
    /// Creating, Active, Updating, Deleting, Failed
    pub status: Option<String>,
}

impl DocumentVersion {
    /// Build a version entry with only the identifying fields set
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            version_name: None,
            created_date: None,
            is_default: false,
            status: None,
        }
    }

    /// Created date formatted for display, or "-" when unknown
    pub fn created_display(&self) -> String {
        self.created_date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl From<DocumentVersionInfo> for DocumentVersion {
    fn from(info: DocumentVersionInfo) -> Self {
        let created_date = info
            .created_date
            .and_then(|d| DateTime::from_timestamp(d.secs(), d.subsec_nanos()));

        Self {
            name: info.name.unwrap_or_default(),
            version: info.document_version.unwrap_or_default(),
            version_name: info.version_name,
            created_date,
            is_default: info.is_default_version,
            status: info.status.map(|s| s.as_str().to_string()),
        }
    }
}

/// A version identifier paired with its parsed ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    pub ordinal: u64,
}

impl VersionRecord {
    /// Parse a version identifier as a base-10 integer
    pub fn parse(version: &str) -> Result<Self> {
        let ordinal = version.parse::<u64>().map_err(|e| CleanerError::Parse {
            version: version.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            version: version.to_string(),
            ordinal,
        })
    }
}

/// Parse every version, failing on the first identifier that is not an integer
pub fn parse_versions(versions: &[DocumentVersion]) -> Result<Vec<VersionRecord>> {
    versions
        .iter()
        .map(|v| VersionRecord::parse(&v.version))
        .collect()
}

/// Pick the record with the strictly greatest ordinal
///
/// On equal ordinals the first one seen is kept.
pub fn select_latest(records: &[VersionRecord]) -> Option<&VersionRecord> {
    let mut latest: Option<&VersionRecord> = None;
    for record in records {
        if latest.map_or(true, |l| record.ordinal > l.ordinal) {
            latest = Some(record);
        }
    }
    latest
}
