//! Redis-backed briefing store.
//!
//! Data model:
//! - `brief:{id}`: hash holding `id`, `category`, `data` (JSON),
//!   `createdAt`, `updatedAt` (RFC 3339)
//! - `category:{category}`: set of briefing keys per template category
//! - `briefs:by_time`: zset of briefing keys scored by creation time
//!
//! Updates replace only the `data` and `updatedAt` fields of the hash.

use crate::{BriefingStore, StorageError, StorageResult};
use async_trait::async_trait;
use briefgen_types::{Briefing, BriefingData};
use chrono::{DateTime, Utc};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::collections::HashMap;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Briefing store on a Redis (or compatible) server.
pub struct RedisStore {
    client: redis::Client,
    connection: OnceCell<MultiplexedConnection>,
}

impl RedisStore {
    /// Creates a store for the given connection URL. The connection itself
    /// is established lazily on first use.
    pub fn new(url: &str) -> StorageResult<Self> {
        let client = redis::Client::open(url).map_err(StorageError::Connection)?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> StorageResult<MultiplexedConnection> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                self.client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(StorageError::Connection)
            })
            .await?;
        Ok(connection.clone())
    }

    fn briefing_key(id: &str) -> String {
        format!("brief:{id}")
    }

    fn parse_briefing(id: &str, fields: HashMap<String, String>) -> StorageResult<Briefing> {
        let data_json = fields.get("data").map(String::as_str).unwrap_or("{}");
        let data: BriefingData =
            serde_json::from_str(data_json).map_err(|e| StorageError::Corrupt {
                id: id.to_owned(),
                reason: format!("data payload is not valid JSON: {e}"),
            })?;

        let parse_timestamp = |field: &str| -> StorageResult<DateTime<Utc>> {
            let raw = fields.get(field).ok_or_else(|| StorageError::Corrupt {
                id: id.to_owned(),
                reason: format!("missing {field}"),
            })?;
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| StorageError::Corrupt {
                    id: id.to_owned(),
                    reason: format!("invalid {field}: {e}"),
                })
        };

        Ok(Briefing {
            id: fields.get("id").cloned().unwrap_or_else(|| id.to_owned()),
            category: fields.get("category").cloned().unwrap_or_default(),
            data,
            created_at: parse_timestamp("createdAt")?,
            updated_at: parse_timestamp("updatedAt")?,
        })
    }
}

#[async_trait]
impl BriefingStore for RedisStore {
    async fn create(&self, category: &str, data: BriefingData) -> StorageResult<Briefing> {
        let mut con = self.connection().await?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let key = Self::briefing_key(&id);

        let data_json = serde_json::to_string(&data).map_err(|e| StorageError::Corrupt {
            id: id.clone(),
            reason: format!("data payload failed to serialise: {e}"),
        })?;

        let fields = [
            ("id", id.clone()),
            ("category", category.to_owned()),
            ("data", data_json),
            ("createdAt", now.to_rfc3339()),
            ("updatedAt", now.to_rfc3339()),
        ];
        con.hset_multiple::<_, _, _, ()>(&key, &fields)
            .await
            .map_err(StorageError::Command)?;

        con.sadd::<_, _, ()>(format!("category:{category}"), &key)
            .await
            .map_err(StorageError::Command)?;

        con.zadd::<_, _, _, ()>("briefs:by_time", &key, now.timestamp_millis())
            .await
            .map_err(StorageError::Command)?;

        Ok(Briefing {
            id,
            category: category.to_owned(),
            data,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: &str) -> StorageResult<Option<Briefing>> {
        let mut con = self.connection().await?;

        let fields: HashMap<String, String> = con
            .hgetall(Self::briefing_key(id))
            .await
            .map_err(StorageError::Command)?;

        if fields.is_empty() {
            return Ok(None);
        }

        Self::parse_briefing(id, fields).map(Some)
    }

    async fn update(&self, id: &str, data: BriefingData) -> StorageResult<Option<Briefing>> {
        let mut con = self.connection().await?;
        let key = Self::briefing_key(id);

        let exists: bool = con.exists(&key).await.map_err(StorageError::Command)?;
        if !exists {
            return Ok(None);
        }

        let current = match self.get(id).await? {
            Some(briefing) => briefing,
            None => return Ok(None),
        };

        let now = Utc::now();
        let data_json = serde_json::to_string(&data).map_err(|e| StorageError::Corrupt {
            id: id.to_owned(),
            reason: format!("data payload failed to serialise: {e}"),
        })?;

        let fields = [("data", data_json), ("updatedAt", now.to_rfc3339())];
        con.hset_multiple::<_, _, _, ()>(&key, &fields)
            .await
            .map_err(StorageError::Command)?;

        Ok(Some(Briefing {
            data,
            updated_at: now,
            ..current
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_briefing_round_trips_stored_fields() {
        let mut fields = HashMap::new();
        fields.insert("id".to_owned(), "abc".to_owned());
        fields.insert("category".to_owned(), "web-development".to_owned());
        fields.insert(
            "data".to_owned(),
            r##"{"answers":{},"markdown":"# Test"}"##.to_owned(),
        );
        fields.insert("createdAt".to_owned(), "2025-06-01T10:00:00+00:00".to_owned());
        fields.insert("updatedAt".to_owned(), "2025-06-02T10:00:00+00:00".to_owned());

        let briefing = RedisStore::parse_briefing("abc", fields).unwrap();
        assert_eq!(briefing.category, "web-development");
        assert_eq!(briefing.data.markdown, "# Test");
        assert!(briefing.updated_at > briefing.created_at);
    }

    #[test]
    fn corrupt_data_payload_is_an_error_not_a_panic() {
        let mut fields = HashMap::new();
        fields.insert("data".to_owned(), "not json".to_owned());
        fields.insert("createdAt".to_owned(), "2025-06-01T10:00:00+00:00".to_owned());
        fields.insert("updatedAt".to_owned(), "2025-06-01T10:00:00+00:00".to_owned());

        let result = RedisStore::parse_briefing("abc", fields);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
