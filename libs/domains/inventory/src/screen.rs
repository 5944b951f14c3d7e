//! Inventory Screen - wires directory, collection, query, and forms together

use std::sync::Arc;
use tracing::{instrument, warn};

use crate::collection::EquipmentCollection;
use crate::directory::CategoryDirectory;
use crate::error::InventoryResult;
use crate::form::{EquipmentForm, FormState};
use crate::models::{Category, CategoryId, Equipment, EquipmentId};
use crate::query::{derive_page, Page, ViewQuery};
use crate::repository::{CategoryRepository, EquipmentRepository};

/// Mount-time load state of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Initial loads still in flight; the table renders empty
    Loading,
    Ready,
    /// A load failed. Non-fatal: the table renders empty with an error
    /// indicator, and a remount retries.
    Failed(String),
}

/// One visible table row with its category name already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub equipment: Equipment,
    pub category_name: String,
}

/// Owns the whole inventory screen: loading/error state, the view query, the
/// authoritative collection, and the category directory.
///
/// Single logical thread of control; all store operations are async and the
/// caller drives them one at a time.
pub struct InventoryScreen<E: EquipmentRepository, C: CategoryRepository> {
    collection: EquipmentCollection<E>,
    directory: CategoryDirectory<C>,
    query: ViewQuery,
    load: LoadState,
    banner: Option<String>,
}

impl<E: EquipmentRepository, C: CategoryRepository> InventoryScreen<E, C> {
    pub fn new(equipment: Arc<E>, categories: Arc<C>) -> Self {
        Self {
            collection: EquipmentCollection::new(equipment),
            directory: CategoryDirectory::new(categories),
            query: ViewQuery::new(),
            load: LoadState::Loading,
            banner: None,
        }
    }

    /// Load categories and equipment concurrently. The loads may settle in
    /// either order; until the category load lands, rows resolve to the
    /// placeholder label rather than erroring.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> &LoadState {
        self.load = LoadState::Loading;

        let (categories, equipment) =
            tokio::join!(self.directory.reload(), self.collection.reload());

        self.load = match categories.and(equipment) {
            Ok(()) => LoadState::Ready,
            Err(err) => {
                warn!(error = %err, "Mount-time load failed");
                LoadState::Failed(err.to_string())
            }
        };
        &self.load
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Retryable error from the last failed mutation, if any
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn categories(&self) -> &[Category] {
        self.directory.categories()
    }

    pub fn resolve_category(&self, id: CategoryId) -> &str {
        self.directory.resolve_name(id)
    }

    /// Find a cached row by id, for prefilled edit forms
    pub fn find(&self, id: EquipmentId) -> Option<&Equipment> {
        self.collection.rows().iter().find(|row| row.id == id)
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.query.set_search(text);
    }

    pub fn filter_by_category(&mut self, filter: Option<CategoryId>) {
        self.query.set_category_filter(filter);
    }

    pub fn go_to_page(&mut self, index: usize) {
        self.query.set_page(index);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.query.set_page_size(size);
    }

    /// The currently visible page of raw equipment rows
    pub fn visible_page(&self) -> Page {
        derive_page(self.collection.rows(), &self.query)
    }

    /// The visible page with category names resolved for display
    pub fn visible_rows(&self) -> (Vec<RowView>, usize) {
        let page = self.visible_page();
        let rows = page
            .rows
            .into_iter()
            .map(|equipment| RowView {
                category_name: self.directory.resolve_name(equipment.category_id).to_string(),
                equipment,
            })
            .collect();
        (rows, page.total_count)
    }

    /// Drive a form submit. On success the collection has resynchronized and
    /// the form should close; on store failure the banner carries the
    /// retryable error.
    pub async fn submit(&mut self, form: &mut EquipmentForm) -> bool {
        let closed = form.submit(&mut self.collection, &self.directory).await;
        if let FormState::Failed(message) = form.state() {
            self.banner = Some(message.clone());
        }
        closed
    }

    /// Delete a record after the caller has confirmed. A failure leaves the
    /// collection untouched and sets the banner.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: EquipmentId) -> InventoryResult<bool> {
        match self.collection.delete(id).await {
            Ok(deleted) => Ok(deleted),
            Err(err) => {
                self.banner = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::UNRESOLVED_CATEGORY_LABEL;
    use crate::error::InventoryError;
    use crate::models::Condition;
    use crate::repository::{MockCategoryRepository, MockEquipmentRepository};

    fn drill(id: EquipmentId) -> Equipment {
        Equipment {
            id,
            name: "Drill".to_string(),
            condition: Condition::New,
            quantity: 3,
            category_id: 1,
        }
    }

    fn category_repo() -> MockCategoryRepository {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list().returning(|| {
            Ok(vec![Category {
                id: 1,
                name: "Hardware".to_string(),
            }])
        });
        mock_repo
    }

    #[tokio::test]
    async fn test_mount_loads_both_sources() {
        let mut equipment_repo = MockEquipmentRepository::new();
        equipment_repo.expect_list().returning(|| Ok(vec![drill(1)]));

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo()));
        assert_eq!(screen.load_state(), &LoadState::Loading);

        screen.mount().await;

        assert_eq!(screen.load_state(), &LoadState::Ready);
        let (rows, total) = screen.visible_rows();
        assert_eq!(total, 1);
        assert_eq!(rows[0].category_name, "Hardware");
    }

    #[tokio::test]
    async fn test_failed_equipment_load_is_nonfatal() {
        let mut equipment_repo = MockEquipmentRepository::new();
        equipment_repo
            .expect_list()
            .returning(|| Err(InventoryError::Network("store unreachable".to_string())));

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo()));
        screen.mount().await;

        assert!(matches!(screen.load_state(), LoadState::Failed(_)));
        // Table renders empty with the error indicator, no panic
        let (rows, total) = screen.visible_rows();
        assert!(rows.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_failed_category_load_renders_placeholder_names() {
        let mut equipment_repo = MockEquipmentRepository::new();
        equipment_repo.expect_list().returning(|| Ok(vec![drill(1)]));

        let mut category_repo = MockCategoryRepository::new();
        category_repo
            .expect_list()
            .returning(|| Err(InventoryError::Network("store unreachable".to_string())));

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo));
        screen.mount().await;

        assert!(matches!(screen.load_state(), LoadState::Failed(_)));
        let (rows, _) = screen.visible_rows();
        assert_eq!(rows[0].category_name, UNRESOLVED_CATEGORY_LABEL);
    }

    #[tokio::test]
    async fn test_search_drives_the_visible_page() {
        let mut equipment_repo = MockEquipmentRepository::new();
        equipment_repo.expect_list().returning(|| {
            Ok(vec![
                drill(1),
                Equipment {
                    id: 2,
                    name: "Hammer".to_string(),
                    condition: Condition::Used,
                    quantity: 1,
                    category_id: 1,
                },
            ])
        });

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo()));
        screen.mount().await;
        screen.go_to_page(3);
        screen.search("ham");

        assert_eq!(screen.query().page_index(), 0);
        let page = screen.visible_page();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].id, 2);
    }

    #[tokio::test]
    async fn test_delete_failure_sets_banner_and_keeps_rows() {
        let mut equipment_repo = MockEquipmentRepository::new();
        equipment_repo.expect_list().times(1).returning(|| Ok(vec![drill(1)]));
        equipment_repo
            .expect_delete()
            .returning(|_| Err(InventoryError::Network("store unreachable".to_string())));

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo()));
        screen.mount().await;

        let result = screen.delete(1).await;

        assert!(result.is_err());
        assert!(screen.banner().is_some());
        assert_eq!(screen.visible_page().total_count, 1);

        screen.clear_banner();
        assert!(screen.banner().is_none());
    }

    #[tokio::test]
    async fn test_create_through_form_resynchronizes_the_screen() {
        let mut equipment_repo = MockEquipmentRepository::new();
        // First list on mount: empty. Second list, after the create: one row
        // with the store-assigned id.
        equipment_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![]));
        equipment_repo.expect_create().returning(|draft| {
            Ok(Equipment {
                id: 7,
                name: draft.name,
                condition: draft.condition,
                quantity: draft.quantity,
                category_id: draft.category_id,
            })
        });
        equipment_repo.expect_list().returning(|| Ok(vec![drill(7)]));

        let mut screen = InventoryScreen::new(Arc::new(equipment_repo), Arc::new(category_repo()));
        screen.mount().await;
        assert_eq!(screen.visible_page().total_count, 0);

        let mut form = EquipmentForm::create();
        form.draft_mut().name = "Drill".to_string();
        form.draft_mut().condition = Some(Condition::New);
        form.draft_mut().quantity = 3;
        form.draft_mut().category_id = Some(1);

        let closed = screen.submit(&mut form).await;

        assert!(closed);
        let page = screen.visible_page();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].id, 7);
    }
}
