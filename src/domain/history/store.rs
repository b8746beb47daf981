use super::backend::{encode, HistoryBackend, HistoryError};
use super::{HistoryEntry, MAX_HISTORY_ENTRIES};
use chrono::Utc;

/// Ordered, capped history of translation sessions, most recent first.
///
/// Every mutation is written through to the backend before returning.
pub struct HistoryStore<B: HistoryBackend> {
    backend: B,
    entries: Vec<HistoryEntry>,
}

impl<B: HistoryBackend> HistoryStore<B> {
    /// Load the persisted record. A corrupt record is logged and replaced by an empty history.
    pub fn open(backend: B) -> Result<Self, HistoryError> {
        let mut entries = match backend.load()? {
            Some(raw) => serde_json::from_str::<Vec<HistoryEntry>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "History record is corrupt, starting with empty history");
                Vec::new()
            }),
            None => Vec::new(),
        };
        entries.truncate(MAX_HISTORY_ENTRIES);

        Ok(Self { backend, entries })
    }

    /// Prepend an entry, dropping the oldest beyond capacity.
    /// An entry with the same id is replaced.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries: Vec<HistoryEntry> = self
            .entries
            .iter()
            .filter(|existing| existing.id != entry.id)
            .cloned()
            .collect();
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);
        self.commit(entries)
    }

    /// Create and append an entry stamped with the current time
    pub fn record(
        &mut self,
        original_content: &str,
        translated_content: &str,
        target_language_code: &str,
    ) -> Result<HistoryEntry, HistoryError> {
        let now = Utc::now().timestamp_millis();
        let entry = HistoryEntry::new(
            self.next_id(now),
            original_content.to_string(),
            translated_content.to_string(),
            target_language_code.to_string(),
            now,
        );
        self.append(entry.clone())?;
        Ok(entry)
    }

    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Delete one entry. Unknown ids are a no-op; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool, HistoryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.commit(entries)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.backend.clear()?;
        self.entries.clear();
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Time-derived id, suffixed when several entries land in the same millisecond
    fn next_id(&self, now_millis: i64) -> String {
        let base = now_millis.to_string();
        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.get(&candidate).is_some() {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        candidate
    }

    /// Save `entries`, adopting them only once the backend accepted them
    fn commit(&mut self, entries: Vec<HistoryEntry>) -> Result<(), HistoryError> {
        self.backend.save(&encode(&entries)?)?;
        self.entries = entries;
        Ok(())
    }
}
