pub mod backend;
pub mod store;

use crate::domain::shared::language_name;
use serde::{Deserialize, Serialize};

pub use backend::{HistoryBackend, HistoryError, MemoryHistoryBackend};
pub use store::HistoryStore;

/// Name of the persisted history record
pub const HISTORY_RECORD_KEY: &str = "lingualearn-history";

/// Entries kept; older ones are dropped on append
pub const MAX_HISTORY_ENTRIES: usize = 50;

const ORIGINAL_PREVIEW_CHARS: usize = 100;
const TRANSLATED_PREVIEW_CHARS: usize = 80;

/// One completed translation session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub original_content: String,
    pub translated_content: String,
    #[serde(rename = "targetLanguage")]
    pub target_language_code: String,
    #[serde(rename = "timestamp")]
    pub created_at_epoch_millis: i64,
}

/// Display preview of a history entry
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub language: String,
    pub original_preview: String,
    pub translated_preview: String,
}

impl HistoryEntry {
    pub fn new(
        id: String,
        original_content: String,
        translated_content: String,
        target_language_code: String,
        created_at_epoch_millis: i64,
    ) -> Self {
        Self {
            id,
            original_content,
            translated_content,
            target_language_code,
            created_at_epoch_millis,
        }
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            language: language_name(&self.target_language_code),
            original_preview: preview(&self.original_content, ORIGINAL_PREVIEW_CHARS),
            translated_preview: preview(&self.translated_content, TRANSLATED_PREVIEW_CHARS),
        }
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
