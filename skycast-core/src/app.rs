use anyhow::Result;
use tracing::warn;

use crate::error::LookupError;
use crate::history::HistoryStore;
use crate::model::{HistoryEntry, WeatherReading};
use crate::provider::WeatherProvider;
use crate::storage::StorageBackend;

/// Weather lookups plus the recent-search state they feed.
///
/// One instance is a single writer context: `lookup` takes `&mut self`,
/// so lookups through it run strictly one at a time. Racing requires
/// separate instances; over a shared backing store the last lookup to
/// finish owns the persisted front of the history.
#[derive(Debug)]
pub struct WeatherApp<S> {
    provider: Box<dyn WeatherProvider>,
    history: HistoryStore<S>,
}

impl<S: StorageBackend> WeatherApp<S> {
    /// Builds the app and loads the persisted history from `storage`.
    pub fn new(provider: Box<dyn WeatherProvider>, storage: S) -> Self {
        Self {
            provider,
            history: HistoryStore::load(storage),
        }
    }

    /// Looks up current weather for `city` and, on success, records it in
    /// the search history before returning.
    ///
    /// An empty or whitespace-only city is rejected up front: no request
    /// goes out and the history is left alone. The history is keyed on the
    /// provider's canonical location name, not on the raw input.
    pub async fn lookup(&mut self, city: &str) -> Result<WeatherReading, LookupError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let reading = self.provider.current_weather(city).await?;

        // A reading we could not persist is still a reading; the in-memory
        // list carries it for the rest of this run.
        if let Err(e) = self.history.upsert(
            &reading.location,
            reading.icon_url.clone(),
            reading.temperature_c,
        ) {
            warn!("Weather shown but history not persisted: {e:#}");
        }

        Ok(reading)
    }

    /// Recent lookups, most recent first.
    pub fn recent(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Drops `city` from the recent lookups; no-op if absent.
    pub fn forget(&mut self, city: &str) -> Result<&[HistoryEntry]> {
        self.history.delete(city)
    }
}
