use serde::{Deserialize, Serialize};

/// Read-only snapshot of one database instance's configuration.
///
/// Fetched fresh on every remediation run, never cached. Field names follow
/// the service's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbInstanceDescriptor {
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    pub engine: String,
    #[serde(rename = "DBInstanceStatus")]
    pub db_instance_status: String,
    pub auto_minor_version_upgrade: bool,
}

impl DbInstanceDescriptor {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            db_instance_identifier: identifier.into(),
            engine: "neptune".to_string(),
            db_instance_status: "available".to_string(),
            auto_minor_version_upgrade: false,
        }
    }

    pub fn auto_minor_version_upgrade(mut self, enabled: bool) -> Self {
        self.auto_minor_version_upgrade = enabled;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.db_instance_status = status.to_string();
        self
    }
}

/// Transport envelope returned with every mutation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
    pub request_id: String,
}

/// Response to a `modify_db_instance` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDbInstanceResponse {
    #[serde(rename = "DBInstance")]
    pub db_instance: Option<DbInstanceDescriptor>,
    pub response_metadata: ResponseMetadata,
}

impl ModifyDbInstanceResponse {
    pub fn status_code(&self) -> u16 {
        self.response_metadata.http_status_code
    }
}
