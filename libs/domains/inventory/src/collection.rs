//! Equipment Collection - the authoritative client-side copy of the store

use std::sync::Arc;
use tracing::{debug, instrument};
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Equipment, EquipmentDraft, EquipmentId};
use crate::repository::EquipmentRepository;

/// Owns the in-memory equipment collection and keeps it consistent with the
/// remote store.
///
/// After any successful mutation the cached collection is invalid and is
/// refreshed with a full [`Self::reload`] before the call returns. Full
/// resynchronization is chosen over optimistic local patching: one extra
/// round trip buys guaranteed agreement with the store, including any
/// server-side derived fields.
pub struct EquipmentCollection<R: EquipmentRepository> {
    repository: Arc<R>,
    rows: Vec<Equipment>,
    version: u64,
}

impl<R: EquipmentRepository> EquipmentCollection<R> {
    /// Create an empty collection; call [`Self::reload`] to populate it
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            rows: Vec::new(),
            version: 0,
        }
    }

    /// Discard the cached collection and refetch it wholesale
    #[instrument(skip(self))]
    pub async fn reload(&mut self) -> InventoryResult<()> {
        self.rows = self.repository.list().await?;
        self.version += 1;
        debug!(rows = self.rows.len(), version = self.version, "Collection reloaded");
        Ok(())
    }

    /// The cached rows, in store order. Read-only: consumers derive views
    /// from this slice and never mutate it directly.
    pub fn rows(&self) -> &[Equipment] {
        &self.rows
    }

    /// Monotonic counter, bumped on every successful reload
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Create a record, then resynchronize
    #[instrument(skip(self, draft), fields(equipment_name = %draft.name))]
    pub async fn create(&mut self, draft: EquipmentDraft) -> InventoryResult<Equipment> {
        draft
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        let created = self.repository.create(draft).await?;
        self.reload().await?;
        Ok(created)
    }

    /// Replace a record, then resynchronize
    #[instrument(skip(self, draft))]
    pub async fn update(&mut self, id: EquipmentId, draft: EquipmentDraft) -> InventoryResult<Equipment> {
        draft
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        let updated = self.repository.update(id, draft).await?;
        self.reload().await?;
        Ok(updated)
    }

    /// Delete a record, then resynchronize.
    ///
    /// A failed delete leaves the cached collection untouched; deletion only
    /// happened if the returned flag is true.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: EquipmentId) -> InventoryResult<bool> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            self.reload().await?;
        }
        Ok(deleted)
    }
}
