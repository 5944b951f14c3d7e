//! Category Directory - session-scoped, read-only category set

use std::sync::Arc;
use tracing::instrument;

use crate::error::InventoryResult;
use crate::models::{Category, CategoryId};
use crate::repository::CategoryRepository;

/// Label rendered for a category id with no loaded match.
///
/// A single space keeps table rows renderable while the category load is
/// still in flight, and after a store-side category deletion orphans a row.
/// Resolution gaps are an expected state, never an error.
pub const UNRESOLVED_CATEGORY_LABEL: &str = " ";

/// Holds the loaded category set and resolves ids to display names.
///
/// The set is treated as immutable for the duration of a session and reloaded
/// wholesale on demand; no partial category mutation exists.
pub struct CategoryDirectory<C: CategoryRepository> {
    repository: Arc<C>,
    categories: Vec<Category>,
}

impl<C: CategoryRepository> CategoryDirectory<C> {
    /// Create an empty directory; call [`Self::reload`] to populate it
    pub fn new(repository: Arc<C>) -> Self {
        Self {
            repository,
            categories: Vec::new(),
        }
    }

    /// Replace the loaded set with a fresh fetch from the store
    #[instrument(skip(self))]
    pub async fn reload(&mut self) -> InventoryResult<()> {
        self.categories = self.repository.list().await?;
        Ok(())
    }

    /// The loaded categories, in store order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a category id to its display name.
    ///
    /// Never fails: an unknown id yields [`UNRESOLVED_CATEGORY_LABEL`].
    pub fn resolve_name(&self, id: CategoryId) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNRESOLVED_CATEGORY_LABEL)
    }

    /// Whether the id references a loaded category
    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}
