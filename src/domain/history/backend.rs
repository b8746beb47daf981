use std::sync::Mutex;

use super::HistoryEntry;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("history record could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence boundary for the history record.
///
/// Implementations store the whole ordered sequence under one named record;
/// the store decides ordering and capacity.
pub trait HistoryBackend: Send + Sync {
    /// Raw JSON of the record, `None` when nothing was saved yet
    fn load(&self) -> Result<Option<String>, HistoryError>;

    fn save(&self, record: &str) -> Result<(), HistoryError>;

    /// Remove the record entirely
    fn clear(&self) -> Result<(), HistoryError>;
}

/// Serialize entries into the record format
pub fn encode(entries: &[HistoryEntry]) -> Result<String, HistoryError> {
    Ok(serde_json::to_string(entries)?)
}

/// Backend holding the record in memory, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryHistoryBackend {
    record: Mutex<Option<String>>,
}

impl MemoryHistoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw record
    pub fn with_record(record: &str) -> Self {
        Self {
            record: Mutex::new(Some(record.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, value: Option<String>) {
        *self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }
}

impl HistoryBackend for MemoryHistoryBackend {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.raw())
    }

    fn save(&self, record: &str) -> Result<(), HistoryError> {
        self.set(Some(record.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.set(None);
        Ok(())
    }
}
