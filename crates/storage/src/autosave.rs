//! Coalescing auto-save.
//!
//! The editor fires a save on every markdown change. Saves for one briefing
//! must not interleave, and an edit arriving while a save is in flight must
//! not be dropped: it becomes the pending payload and is saved as soon as
//! the current save completes. Rapid edits coalesce: only the latest
//! pending payload is written, intermediate states are skipped.

use crate::{BriefingStore, StorageResult};
use briefgen_types::BriefingData;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Serialised, coalescing saver for a single briefing.
pub struct AutoSaver {
    store: Arc<dyn BriefingStore>,
    briefing_id: String,
    /// Latest payload awaiting a save. Overwritten by newer edits.
    pending: Mutex<Option<BriefingData>>,
    /// Held while a drain loop is saving; serialises writers.
    saving: Mutex<()>,
}

impl AutoSaver {
    pub fn new(store: Arc<dyn BriefingStore>, briefing_id: impl Into<String>) -> Self {
        Self {
            store,
            briefing_id: briefing_id.into(),
            pending: Mutex::new(None),
            saving: Mutex::new(()),
        }
    }

    /// Submits the latest editor state. Overwrites any not-yet-saved
    /// payload, then drains once the current save (if any) completes.
    pub async fn submit(&self, data: BriefingData) -> StorageResult<()> {
        *self.pending.lock().await = Some(data);
        let _guard = self.saving.lock().await;
        self.drain_locked().await
    }

    /// Waits for in-flight work and saves any remaining pending payload.
    pub async fn flush(&self) -> StorageResult<()> {
        let _guard = self.saving.lock().await;
        self.drain_locked().await
    }

    /// Saves pending payloads until none remain. Caller holds `saving`.
    async fn drain_locked(&self) -> StorageResult<()> {
        loop {
            let next = self.pending.lock().await.take();
            let Some(data) = next else {
                return Ok(());
            };

            match self.store.update(&self.briefing_id, data).await? {
                Some(_) => {}
                None => {
                    // The briefing disappeared server-side; there is nothing
                    // to retry against, so drop the payload and report it.
                    tracing::warn!(
                        briefing_id = %self.briefing_id,
                        "auto-save target no longer exists"
                    );
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StorageResult};
    use async_trait::async_trait;
    use briefgen_types::{AnswerSet, Briefing};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Semaphore;

    fn data(markdown: &str) -> BriefingData {
        BriefingData {
            answers: AnswerSet::new(),
            markdown: markdown.to_owned(),
        }
    }

    /// Store whose updates block until a permit is released, with a count
    /// of completed updates. Lets tests hold a save "in flight".
    struct GatedStore {
        inner: MemoryStore,
        gate: Semaphore,
        updates: AtomicUsize,
    }

    impl GatedStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                gate: Semaphore::new(0),
                updates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BriefingStore for GatedStore {
        async fn create(&self, category: &str, data: BriefingData) -> StorageResult<Briefing> {
            self.inner.create(category, data).await
        }

        async fn get(&self, id: &str) -> StorageResult<Option<Briefing>> {
            self.inner.get(id).await
        }

        async fn update(&self, id: &str, data: BriefingData) -> StorageResult<Option<Briefing>> {
            let permit = self.gate.acquire().await.expect("gate closed");
            permit.forget();
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.update(id, data).await
        }
    }

    #[tokio::test]
    async fn sequential_submits_all_persist() {
        let store = Arc::new(MemoryStore::new());
        let briefing = store.create("web-development", data("v0")).await.unwrap();
        let saver = AutoSaver::new(store.clone(), briefing.id.clone());

        saver.submit(data("v1")).await.unwrap();
        saver.submit(data("v2")).await.unwrap();

        let stored = store.get(&briefing.id).await.unwrap().unwrap();
        assert_eq!(stored.data.markdown, "v2");
    }

    #[tokio::test]
    async fn edit_during_inflight_save_is_not_dropped() {
        let store = Arc::new(GatedStore::new());
        let briefing = store
            .inner
            .create("web-development", data("v0"))
            .await
            .unwrap();
        let saver = Arc::new(AutoSaver::new(
            store.clone() as Arc<dyn BriefingStore>,
            briefing.id.clone(),
        ));

        // First save blocks inside the store until a permit arrives.
        let first = tokio::spawn({
            let saver = saver.clone();
            async move { saver.submit(data("v1")).await }
        });
        tokio::task::yield_now().await;

        // Second edit lands while the first save is in flight.
        let second = tokio::spawn({
            let saver = saver.clone();
            async move { saver.submit(data("v2")).await }
        });
        tokio::task::yield_now().await;

        store.gate.add_permits(2);
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        saver.flush().await.unwrap();

        let stored = store.inner.get(&briefing.id).await.unwrap().unwrap();
        assert_eq!(stored.data.markdown, "v2");
    }

    #[tokio::test]
    async fn rapid_edits_coalesce_to_latest() {
        let store = Arc::new(GatedStore::new());
        let briefing = store
            .inner
            .create("web-development", data("v0"))
            .await
            .unwrap();
        let saver = Arc::new(AutoSaver::new(
            store.clone() as Arc<dyn BriefingStore>,
            briefing.id.clone(),
        ));

        // Five edits queue behind a blocked first save.
        let mut handles = Vec::new();
        for i in 1..=5 {
            let saver = saver.clone();
            handles.push(tokio::spawn(async move {
                saver.submit(data(&format!("v{i}"))).await
            }));
            tokio::task::yield_now().await;
        }

        store.gate.add_permits(16);
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        saver.flush().await.unwrap();

        let stored = store.inner.get(&briefing.id).await.unwrap().unwrap();
        assert_eq!(stored.data.markdown, "v5");
        // Intermediate states were coalesced: fewer saves than edits.
        assert!(store.updates.load(Ordering::SeqCst) <= 5);
    }

    #[tokio::test]
    async fn missing_briefing_does_not_error_the_editor() {
        let store = Arc::new(MemoryStore::new());
        let saver = AutoSaver::new(store, "gone");
        assert!(saver.submit(data("v1")).await.is_ok());
    }
}
