use crate::domain::storage::Storage;
use crate::domain::Park;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Writes the aggregate as pretty-printed JSON to a single file.
#[derive(Clone)]
pub struct FileSystemStore {
    output_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.output_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn save_parks(&self, parks: &[Park]) -> Result<PathBuf> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(parks)?;
        fs::write(&self.output_path, content)?;
        Ok(self.output_path.clone())
    }
}
