//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider and local key-value storage
//! - The bounded, recency-ordered search history
//! - Shared domain models (readings, history entries)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod icons;
pub mod model;
pub mod provider;
pub mod storage;

pub use app::WeatherApp;
pub use config::Config;
pub use error::{LookupError, TransportError};
pub use history::{HISTORY_KEY, HISTORY_LIMIT, HistoryStore};
pub use model::{HistoryEntry, WeatherReading};
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_config};
pub use storage::{FileStore, MemoryStore, StorageBackend};
