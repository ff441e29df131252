use anyhow::{Context, Result};
use tracing::warn;

use crate::model::HistoryEntry;
use crate::storage::StorageBackend;

/// Storage key the serialized history list lives under.
pub const HISTORY_KEY: &str = "weatherHistory";

/// Maximum number of remembered lookups.
pub const HISTORY_LIMIT: usize = 10;

/// Bounded recent-search list persisted through a [`StorageBackend`].
///
/// The list is most-recent-first, unique by city (exact string match), and
/// never longer than [`HISTORY_LIMIT`]. Every mutation rewrites the complete
/// serialized list; there is no incremental update path.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: StorageBackend> HistoryStore<S> {
    /// Loads the persisted history from `storage`.
    ///
    /// Absent, unreadable, or malformed data all yield an empty list. A bad
    /// stored value is worth a warning, never a startup failure.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding malformed search history: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read search history, starting empty: {e}");
                Vec::new()
            }
        };

        Self { storage, entries }
    }

    /// Current entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Inserts or refreshes the entry for `city`.
    ///
    /// Any previous entry with the same city is removed first, the new entry
    /// goes to the front, and the list is truncated to [`HISTORY_LIMIT`]
    /// before the whole list is persisted.
    pub fn upsert(
        &mut self,
        city: &str,
        icon: Option<String>,
        temperature: i32,
    ) -> Result<&[HistoryEntry]> {
        self.entries.retain(|e| e.city != city);
        self.entries.insert(
            0,
            HistoryEntry { city: city.to_string(), icon, temperature },
        );
        self.entries.truncate(HISTORY_LIMIT);

        self.persist()?;
        Ok(&self.entries)
    }

    /// Removes the entry for `city` and persists the result.
    ///
    /// A city that is not in the list leaves the entries as they were; the
    /// relative order of the remaining entries never changes.
    pub fn delete(&mut self, city: &str) -> Result<&[HistoryEntry]> {
        self.entries.retain(|e| e.city != city);

        self.persist()?;
        Ok(&self.entries)
    }

    fn persist(&mut self) -> Result<()> {
        let json =
            serde_json::to_string(&self.entries).context("Failed to serialize search history")?;

        self.storage.set(HISTORY_KEY, &json)
    }
}
