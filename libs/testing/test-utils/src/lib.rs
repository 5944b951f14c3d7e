//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure:
//! - `FakeInventoryApi`: a wiremock server speaking the inventory REST
//!   contract, for HTTP-level integration tests
//! - JSON builders for the contract's record shapes
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{category_json, equipment_json, FakeInventoryApi};
//!
//! # async fn example() {
//! let api = FakeInventoryApi::start().await;
//! api.stub_categories(vec![category_json(1, "Hardware")]).await;
//! api.stub_equipment_list(vec![equipment_json(1, "Drill", "new", 3, 1)]).await;
//!
//! let base_url = api.base_url();
//! # }
//! ```

pub mod api;

pub use api::{category_json, equipment_json, FakeInventoryApi};
