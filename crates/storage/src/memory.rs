//! In-memory briefing store for tests and local development.

use crate::{BriefingStore, StorageResult};
use async_trait::async_trait;
use briefgen_types::{Briefing, BriefingData};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A `HashMap`-backed store with the same semantics as the Redis backend.
#[derive(Default)]
pub struct MemoryStore {
    briefings: RwLock<HashMap<String, Briefing>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BriefingStore for MemoryStore {
    async fn create(&self, category: &str, data: BriefingData) -> StorageResult<Briefing> {
        let now = Utc::now();
        let briefing = Briefing {
            id: Uuid::new_v4().to_string(),
            category: category.to_owned(),
            data,
            created_at: now,
            updated_at: now,
        };

        self.briefings
            .write()
            .await
            .insert(briefing.id.clone(), briefing.clone());
        Ok(briefing)
    }

    async fn get(&self, id: &str) -> StorageResult<Option<Briefing>> {
        Ok(self.briefings.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, data: BriefingData) -> StorageResult<Option<Briefing>> {
        let mut briefings = self.briefings.write().await;
        match briefings.get_mut(id) {
            Some(briefing) => {
                briefing.data = data;
                briefing.updated_at = Utc::now();
                Ok(Some(briefing.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefgen_types::AnswerSet;

    fn data(markdown: &str) -> BriefingData {
        BriefingData {
            answers: AnswerSet::new(),
            markdown: markdown.to_owned(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryStore::new();
        let created = store
            .create("web-development", data("# Test"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.category, "web-development");
        assert_eq!(fetched.data.markdown, "# Test");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn update_replaces_data_and_bumps_updated_at() {
        let store = MemoryStore::new();
        let created = store
            .create("web-development", data("# Test"))
            .await
            .unwrap();

        let updated = store
            .update(&created.id, data("# Updated"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.data.markdown, "# Updated");
        assert!(updated.updated_at > created.created_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn unknown_ids_are_none_not_errors() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
        assert!(store
            .update("missing", data("# Nope"))
            .await
            .unwrap()
            .is_none());
    }
}
