//! Repository Layer - Core Traits
//!
//! Abstract interface for data access. The SQLite implementation lives in
//! `event_repo`; the service layer only sees this trait.

use async_trait::async_trait;
use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity; the returned copy carries the assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity (NotFound if it is gone)
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID (NotFound if it is gone)
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
