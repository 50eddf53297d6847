//! The storage contract consumed by the HTTP layer.

use anthology_core::types::DbId;
use async_trait::async_trait;

use crate::models::{
    CreateEmailSubscriber, CreateReflection, CreateSessionRequest, CreateVolume, EmailSubscriber,
    Reflection, SessionRequest, Volume,
};
use crate::StoreError;

/// Storage for every resource the site exposes.
///
/// Lists come back newest-first by the resource's own timestamp; entries
/// with equal timestamps are ordered most-recently-inserted first. Creates
/// assign the identifier and all server-set fields. Callers always receive
/// copies.
#[async_trait]
pub trait AnthologyStore: Send + Sync {
    // -- Volumes --

    /// All volumes, by `release_date` descending.
    async fn list_volumes(&self) -> Result<Vec<Volume>, StoreError>;

    /// The volume flagged `is_current`, if any. With several flagged, the
    /// most recently released one wins.
    async fn get_current_volume(&self) -> Result<Option<Volume>, StoreError>;

    async fn get_volume(&self, id: DbId) -> Result<Option<Volume>, StoreError>;

    async fn create_volume(&self, input: CreateVolume) -> Result<Volume, StoreError>;

    // -- Reflections --

    async fn list_reflections(&self) -> Result<Vec<Reflection>, StoreError>;

    async fn create_reflection(&self, input: CreateReflection) -> Result<Reflection, StoreError>;

    // -- Session requests --

    async fn list_session_requests(&self) -> Result<Vec<SessionRequest>, StoreError>;

    /// Status is always `pending` on the returned request.
    async fn create_session_request(
        &self,
        input: CreateSessionRequest,
    ) -> Result<SessionRequest, StoreError>;

    // -- Email subscribers --

    async fn list_email_subscribers(&self) -> Result<Vec<EmailSubscriber>, StoreError>;

    /// Insert unconditionally. Prefer [`subscribe_if_absent`](Self::subscribe_if_absent)
    /// when the address must stay unique.
    async fn create_email_subscriber(
        &self,
        input: CreateEmailSubscriber,
    ) -> Result<EmailSubscriber, StoreError>;

    /// Insert unless an active subscriber already holds the address.
    ///
    /// The check and the insert form one critical section. Returns `None`
    /// when the address is taken.
    async fn subscribe_if_absent(
        &self,
        input: CreateEmailSubscriber,
    ) -> Result<Option<EmailSubscriber>, StoreError>;

    // -- Health --

    async fn health_check(&self) -> Result<(), StoreError>;
}
