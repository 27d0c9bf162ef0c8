use super::Park;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// Persists the aggregate, replacing any previous output, and returns
    /// where it was written.
    fn save_parks(&self, parks: &[Park]) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const FIELD_STATUSES: &'static str = "field_statuses.json";
}
