use super::FieldStatus;
use serde::{Deserialize, Serialize};

/// Placeholder for a field whose source publishes no update time.
pub const MISSING_UPDATE_TIME: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub status: FieldStatus,
    pub update_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, status: FieldStatus, update_time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            update_time: update_time.into(),
            message: None,
        }
    }

    /// Attaches a message unless it is blank.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.message = Some(message);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    pub name: String,
    pub address: String,
    pub source: String,
    pub overall_status: FieldStatus,
    pub fields: Vec<Field>,
}

impl Park {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        source: impl Into<String>,
        overall_status: FieldStatus,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            source: source.into(),
            overall_status,
            fields: Vec::new(),
        }
    }

    /// Builds a park whose overall status is derived from its fields.
    pub fn from_fields(
        name: impl Into<String>,
        address: impl Into<String>,
        source: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        let overall_status = derive_overall_status(&fields);
        Self {
            name: name.into(),
            address: address.into(),
            source: source.into(),
            overall_status,
            fields,
        }
    }
}

/// `Open` only when there is at least one field and every field is open.
pub fn derive_overall_status(fields: &[Field]) -> FieldStatus {
    if !fields.is_empty() && fields.iter().all(|f| f.status == FieldStatus::Open) {
        FieldStatus::Open
    } else {
        FieldStatus::Closed
    }
}
