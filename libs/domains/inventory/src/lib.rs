//! Inventory Domain
//!
//! Client-side state synchronization and querying for an equipment inventory
//! kept in a remote REST store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Screen    │  ← load/error state, view wiring
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐   ┌─────────────┐
//! │ Query/Form  │   │  Directory  │  ← category names, membership
//! └──────┬──────┘   └──────┬──────┘
//!        │                 │
//! ┌──────▼─────────────────▼──────┐
//! │          Collection           │  ← authoritative cache, resync
//! └──────────────┬────────────────┘
//!                │
//! ┌──────────────▼────────────────┐
//! │   Repository (trait + HTTP)   │  ← REST store access
//! └───────────────────────────────┘
//! ```
//!
//! Mutations never patch the cache locally: after a successful create,
//! update, or delete, the collection reloads wholesale from the store, so the
//! visible table always reflects what the store accepted.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_inventory::{HttpInventoryApi, InventoryScreen};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = Arc::new(HttpInventoryApi::new("http://localhost:5068")?);
//! let mut screen = InventoryScreen::new(Arc::clone(&api), api);
//! screen.mount().await;
//!
//! let (rows, total) = screen.visible_rows();
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod directory;
pub mod error;
pub mod form;
pub mod http;
pub mod models;
pub mod query;
pub mod repository;
pub mod screen;

// Re-export commonly used types
pub use collection::EquipmentCollection;
pub use directory::{CategoryDirectory, UNRESOLVED_CATEGORY_LABEL};
pub use error::{InventoryError, InventoryResult};
pub use form::{EquipmentForm, Field, FieldIssue, FormState, FormTarget, IssueKind};
pub use http::HttpInventoryApi;
pub use models::{
    Category, CategoryId, Condition, Equipment, EquipmentDraft, EquipmentId, FormDraft,
};
pub use query::{derive_page, Page, ViewQuery, DEFAULT_PAGE_SIZE};
pub use repository::{CategoryRepository, EquipmentRepository};
pub use screen::{InventoryScreen, LoadState, RowView};
