use crate::error::{AppResult, Error};
use crate::model::StoredSchedule;
use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};
use std::collections::HashMap;
use std::env;
use tokio::sync::RwLock;
use tracing::info;

/// Redis keys
mod keys {
    pub const SCHEDULE_PREFIX: &str = "shiftsheet:schedule:";
    pub const WEEKS_SET: &str = "shiftsheet:weeks";
}

/// Persistence for extracted schedules, keyed by week-ending label.
///
/// Saving a schedule for a week that already has one replaces it outright;
/// the store holds at most one record per week.
#[async_trait]
pub trait ScheduleStore: Send + Sync + 'static {
    /// Store a record, replacing any existing one for the same week
    async fn save(&self, record: &StoredSchedule) -> AppResult<()>;

    /// All stored records, newest first by creation time
    async fn list_all(&self) -> AppResult<Vec<StoredSchedule>>;

    /// Remove every stored record
    async fn clear_all(&self) -> AppResult<()>;
}

/// Direct Redis store implementation
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a new Redis store connection
    pub fn new() -> AppResult<Self> {
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        info!("Connecting to Redis at {}", redis_url);

        let client = RedisClient::open(redis_url)
            .map_err(|e| Error::Store(format!("Failed to create Redis client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get_connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::Store(format!("Failed to connect to Redis: {}", e)))
    }
}

#[async_trait]
impl ScheduleStore for RedisStore {
    async fn save(&self, record: &StoredSchedule) -> AppResult<()> {
        let mut conn = self.get_connection().await?;

        let json = serde_json::to_string(record)?;
        let key = format!("{}{}", keys::SCHEDULE_PREFIX, record.week_ending());

        // A single SET of the whole serialized record keeps replacement
        // atomic for concurrent readers
        conn.set::<_, _, ()>(&key, &json)
            .await
            .map_err(|e| Error::Store(format!("Redis SET error: {}", e)))?;

        conn.sadd::<_, _, ()>(keys::WEEKS_SET, record.week_ending())
            .await
            .map_err(|e| Error::Store(format!("Redis SADD error: {}", e)))?;

        info!(
            "Stored schedule for week ending {} with {} days",
            record.week_ending(),
            record.schedule.days.len()
        );
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<StoredSchedule>> {
        let mut conn = self.get_connection().await?;

        let weeks: Vec<String> = conn
            .smembers(keys::WEEKS_SET)
            .await
            .map_err(|e| Error::Store(format!("Redis SMEMBERS error: {}", e)))?;

        let mut records = Vec::with_capacity(weeks.len());
        for week in &weeks {
            let key = format!("{}{}", keys::SCHEDULE_PREFIX, week);
            let data: Option<String> = conn
                .get(&key)
                .await
                .map_err(|e| Error::Store(format!("Redis GET error: {}", e)))?;

            // A week may sit in the set after its record expired; skip it
            if let Some(data) = data {
                records.push(serde_json::from_str::<StoredSchedule>(&data)?);
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut conn = self.get_connection().await?;

        let weeks: Vec<String> = conn
            .smembers(keys::WEEKS_SET)
            .await
            .map_err(|e| Error::Store(format!("Redis SMEMBERS error: {}", e)))?;

        for week in &weeks {
            let key = format!("{}{}", keys::SCHEDULE_PREFIX, week);
            conn.del::<_, ()>(&key)
                .await
                .map_err(|e| Error::Store(format!("Redis DEL error: {}", e)))?;
        }

        conn.del::<_, ()>(keys::WEEKS_SET)
            .await
            .map_err(|e| Error::Store(format!("Redis DEL error: {}", e)))?;

        info!("Cleared {} stored schedules", weeks.len());
        Ok(())
    }
}

/// In-memory implementation of the store (tests and Redis-less fallback)
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, StoredSchedule>>,
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn save(&self, record: &StoredSchedule) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.insert(record.week_ending().to_string(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<StoredSchedule>> {
        let records = self.records.read().await;
        let mut all: Vec<StoredSchedule> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn clear_all(&self) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }
}
