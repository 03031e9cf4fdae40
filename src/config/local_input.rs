use crate::domain::model::Day;
use crate::domain::ports::InputSource;
use crate::utils::error::{AocError, Result};
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATTERN: &str = "day{day}";
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 4 * 1024 * 1024;

/// Reads puzzle inputs from files in a local directory.
#[derive(Debug, Clone)]
pub struct LocalInput {
    base_path: PathBuf,
    pattern: String,
    max_bytes: u64,
}

impl LocalInput {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            pattern: DEFAULT_INPUT_PATTERN.to_string(),
            max_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn path_for(&self, day: Day) -> PathBuf {
        let file_name = self.pattern.replace("{day}", &day.to_string());
        self.base_path.join(file_name)
    }
}

impl InputSource for LocalInput {
    async fn read_input(&self, day: Day) -> Result<String> {
        let path = self.path_for(day);

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AocError::InputNotFound {
                    day: day.number(),
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if metadata.len() > self.max_bytes {
            return Err(AocError::InputTooLarge {
                day: day.number(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        tracing::debug!("Reading {} bytes from {}", metadata.len(), path.display());
        let input = tokio::fs::read_to_string(&path).await?;
        Ok(input)
    }
}
