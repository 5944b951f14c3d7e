use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::models::{Category, CategoryId, Equipment, EquipmentDraft, EquipmentId};

/// Repository trait for the remote equipment store
///
/// The store is the single source of truth; implementations perform one
/// request per call and never cache. Caching and resynchronization live in
/// [`crate::collection::EquipmentCollection`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// Fetch every equipment record, in store order
    async fn list(&self) -> InventoryResult<Vec<Equipment>>;

    /// Create a new record; the store assigns the id
    async fn create(&self, draft: EquipmentDraft) -> InventoryResult<Equipment>;

    /// Replace an existing record
    async fn update(&self, id: EquipmentId, draft: EquipmentDraft) -> InventoryResult<Equipment>;

    /// Hard-delete a record. The returned flag is the only proof of deletion;
    /// a failed delete leaves the store untouched.
    async fn delete(&self, id: EquipmentId) -> InventoryResult<bool>;
}

/// Repository trait for the remote category store
///
/// Categories are created and destroyed only by the external store; this
/// interface is read-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch every category, in store order
    async fn list(&self) -> InventoryResult<Vec<Category>>;

    /// Fetch a single category by id
    async fn get(&self, id: CategoryId) -> InventoryResult<Category>;
}
