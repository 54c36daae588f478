//! # Briefgen Storage
//!
//! Persistence for briefings behind the [`BriefingStore`] trait: create a
//! briefing, fetch it by id, replace its data payload. The Redis backend is
//! the production store; the in-memory backend serves tests and local
//! development. The [`AutoSaver`] serialises and coalesces the editor's
//! fire-and-forget saves.
//!
//! Deletion is intentionally absent: briefing lifecycle beyond
//! create/read/update belongs to the hosting store's own retention rules.

mod autosave;
mod memory;
mod redis_store;

pub use autosave::AutoSaver;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;
use briefgen_types::{Briefing, BriefingData};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to connect to redis: {0}")]
    Connection(redis::RedisError),
    #[error("redis command failed: {0}")]
    Command(redis::RedisError),
    #[error("stored briefing {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// The storage interface briefings live behind.
///
/// Lookups for unknown ids are `Ok(None)`, not errors; errors are reserved
/// for backend failures. Updates replace the whole data payload and
/// refresh `updated_at`.
#[async_trait]
pub trait BriefingStore: Send + Sync {
    /// Creates a briefing with a fresh id and returns it.
    async fn create(&self, category: &str, data: BriefingData) -> StorageResult<Briefing>;

    /// Fetches a briefing by id.
    async fn get(&self, id: &str) -> StorageResult<Option<Briefing>>;

    /// Replaces a briefing's data payload. Returns the updated briefing,
    /// or `None` when the id is unknown.
    async fn update(&self, id: &str, data: BriefingData) -> StorageResult<Option<Briefing>>;
}
