//! Append-only list of past scores.

use crate::models::ScoreEntry;

use super::Storage;

/// Storage key holding the JSON array of score entries.
pub const SCORES_KEY: &str = "scores";

pub struct ScoreLedger<S> {
    storage: S,
}

impl<S: Storage> ScoreLedger<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All entries in insertion order. Missing or malformed data reads as
    /// an empty ledger.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        let Some(raw) = self.storage.get(SCORES_KEY) else {
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::debug!("Treating malformed score list as empty: {}", err);
            Vec::new()
        })
    }

    /// Read the list, push one entry, write the whole list back.
    pub fn append(&mut self, username: &str, score: u32) {
        let mut entries = self.entries();
        entries.push(ScoreEntry::new(username, score));

        let result = serde_json::to_string(&entries)
            .map_err(Into::into)
            .and_then(|json| self.storage.set(SCORES_KEY, json));

        match result {
            Ok(()) => tracing::info!("Recorded score {} for {}", score, username),
            Err(err) => tracing::warn!("Failed to save score for {}: {}", username, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_append_is_monotonic() {
        let mut ledger = ScoreLedger::new(MemoryStorage::new());
        ledger.append("alice", 3);
        let before = ledger.entries().len();

        ledger.append("bob", 7);
        ledger.append("alice", 10);

        let entries = ledger.entries();
        assert_eq!(entries.len(), before + 2);
        assert_eq!(entries[0], ScoreEntry::new("alice", 3));
        assert_eq!(entries[1], ScoreEntry::new("bob", 7));
        assert_eq!(entries[2], ScoreEntry::new("alice", 10));
    }

    #[test]
    fn test_keeps_duplicates() {
        let mut ledger = ScoreLedger::new(MemoryStorage::new());
        ledger.append("bob", 5);
        ledger.append("bob", 5);
        assert_eq!(ledger.entries().len(), 2);
    }

    #[test]
    fn test_malformed_data_reads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(SCORES_KEY, "{oops".to_string()).unwrap();

        let mut ledger = ScoreLedger::new(storage.clone());
        assert!(ledger.entries().is_empty());

        ledger.append("carol", 4);
        assert_eq!(ledger.entries(), vec![ScoreEntry::new("carol", 4)]);
    }

    #[test]
    fn test_persisted_format() {
        let storage = MemoryStorage::new();
        let mut ledger = ScoreLedger::new(storage.clone());
        ledger.append("bob", 7);

        assert_eq!(
            storage.get(SCORES_KEY).as_deref(),
            Some(r#"[{"username":"bob","score":7}]"#)
        );
    }
}
