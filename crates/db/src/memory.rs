//! In-process [`AnthologyStore`] backed by insertion-ordered maps.
//!
//! Data lives only as long as the process. Each collection sits behind its
//! own `RwLock`, so readers of one resource never wait on writers of another.

use anthology_core::types::{new_id, DbId, Timestamp};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::{
    CreateEmailSubscriber, CreateReflection, CreateSessionRequest, CreateVolume, EmailSubscriber,
    Reflection, SessionRequest, SessionStatus, Volume,
};
use crate::store::AnthologyStore;
use crate::StoreError;

/// Memory-only store. Cheap to construct; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStore {
    volumes: RwLock<IndexMap<DbId, Volume>>,
    reflections: RwLock<IndexMap<DbId, Reflection>>,
    session_requests: RwLock<IndexMap<DbId, SessionRequest>>,
    email_subscribers: RwLock<IndexMap<DbId, EmailSubscriber>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Clone every value, newest `key` first.
///
/// Values are reversed before the stable sort so equal keys keep
/// most-recently-inserted first.
fn newest_first<T, F>(map: &IndexMap<DbId, T>, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Timestamp,
{
    let mut items: Vec<T> = map.values().rev().cloned().collect();
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

/// Blank optional text is stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build_subscriber(input: CreateEmailSubscriber) -> EmailSubscriber {
    EmailSubscriber {
        id: new_id(),
        email: input.email,
        subscribed_at: Utc::now(),
        is_active: true,
    }
}

#[async_trait]
impl AnthologyStore for MemStore {
    async fn list_volumes(&self) -> Result<Vec<Volume>, StoreError> {
        let volumes = self.volumes.read().await;
        Ok(newest_first(&volumes, |v| v.release_date))
    }

    async fn get_current_volume(&self) -> Result<Option<Volume>, StoreError> {
        let volumes = self.volumes.read().await;
        Ok(volumes
            .values()
            .filter(|v| v.is_current)
            .max_by_key(|v| v.release_date)
            .cloned())
    }

    async fn get_volume(&self, id: DbId) -> Result<Option<Volume>, StoreError> {
        Ok(self.volumes.read().await.get(&id).cloned())
    }

    async fn create_volume(&self, input: CreateVolume) -> Result<Volume, StoreError> {
        let volume = Volume {
            id: new_id(),
            title: input.title,
            volume_number: input.volume_number,
            poem_content: input.poem_content,
            reflection_prompt: input.reflection_prompt,
            soundscape_url: non_blank(input.soundscape_url),
            soundscape_title: non_blank(input.soundscape_title),
            release_date: input.release_date.unwrap_or_else(Utc::now),
            is_current: input.is_current.unwrap_or(false),
        };

        self.volumes
            .write()
            .await
            .insert(volume.id, volume.clone());
        tracing::debug!(volume_id = %volume.id, volume_number = volume.volume_number, "Volume stored");
        Ok(volume)
    }

    async fn list_reflections(&self) -> Result<Vec<Reflection>, StoreError> {
        let reflections = self.reflections.read().await;
        Ok(newest_first(&reflections, |r| r.created_at))
    }

    async fn create_reflection(&self, input: CreateReflection) -> Result<Reflection, StoreError> {
        let reflection = Reflection {
            id: new_id(),
            seeker_name: input.seeker_name,
            volume_id: non_blank(input.volume_id),
            reflection_content: input.reflection_content,
            anonymous_sharing: input.anonymous_sharing.unwrap_or(false),
            created_at: Utc::now(),
        };

        self.reflections
            .write()
            .await
            .insert(reflection.id, reflection.clone());
        Ok(reflection)
    }

    async fn list_session_requests(&self) -> Result<Vec<SessionRequest>, StoreError> {
        let requests = self.session_requests.read().await;
        Ok(newest_first(&requests, |r| r.created_at))
    }

    async fn create_session_request(
        &self,
        input: CreateSessionRequest,
    ) -> Result<SessionRequest, StoreError> {
        let request = SessionRequest {
            id: new_id(),
            name: input.name,
            email: input.email,
            inner_landscape: input.inner_landscape,
            session_intent: input.session_intent,
            created_at: Utc::now(),
            status: SessionStatus::Pending,
        };

        self.session_requests
            .write()
            .await
            .insert(request.id, request.clone());
        Ok(request)
    }

    async fn list_email_subscribers(&self) -> Result<Vec<EmailSubscriber>, StoreError> {
        let subscribers = self.email_subscribers.read().await;
        Ok(newest_first(&subscribers, |s| s.subscribed_at))
    }

    async fn create_email_subscriber(
        &self,
        input: CreateEmailSubscriber,
    ) -> Result<EmailSubscriber, StoreError> {
        let subscriber = build_subscriber(input);
        self.email_subscribers
            .write()
            .await
            .insert(subscriber.id, subscriber.clone());
        Ok(subscriber)
    }

    async fn subscribe_if_absent(
        &self,
        input: CreateEmailSubscriber,
    ) -> Result<Option<EmailSubscriber>, StoreError> {
        // Hold the write guard across the scan and the insert.
        let mut subscribers = self.email_subscribers.write().await;
        if subscribers.values().any(|s| s.blocks(&input.email)) {
            return Ok(None);
        }

        let subscriber = build_subscriber(input);
        subscribers.insert(subscriber.id, subscriber.clone());
        Ok(Some(subscriber))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
