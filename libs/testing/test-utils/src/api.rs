//! Wiremock-backed fake of the inventory REST store

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON shape of a category record on the wire
pub fn category_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

/// JSON shape of an equipment record on the wire
pub fn equipment_json(id: i64, name: &str, condition: &str, quantity: i64, category_id: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "condition": condition,
        "quantity": quantity,
        "categoryId": category_id,
    })
}

/// A mock HTTP server pre-wired for the inventory endpoint contract.
///
/// Stubs are matched in mount order, and a `stub_*_once` stub is consumed by
/// its first hit, so resynchronization sequences can be modeled by mounting a
/// before-state stub followed by an after-state stub.
pub struct FakeInventoryApi {
    server: MockServer,
}

impl FakeInventoryApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to hand to the client under test
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// The underlying server, for custom stubs a test needs beyond the
    /// standard contract
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// GET `/api/categories` → 200 with the given records
    pub async fn stub_categories(&self, categories: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories))
            .mount(&self.server)
            .await;
    }

    /// GET `/api/categories/{id}` → 200 with the given record
    pub async fn stub_category(&self, id: i64, category: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/categories/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(category))
            .mount(&self.server)
            .await;
    }

    /// GET `/api/categories/{id}` → 404
    pub async fn stub_missing_category(&self, id: i64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/categories/{id}")))
            .respond_with(ResponseTemplate::new(404))
            .mount(&self.server)
            .await;
    }

    /// GET `/api/equipment` → 200 with the given records
    pub async fn stub_equipment_list(&self, rows: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .mount(&self.server)
            .await;
    }

    /// GET `/api/equipment` → 200, consumed by its first hit
    pub async fn stub_equipment_list_once(&self, rows: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// GET `/api/equipment` → the given error status
    pub async fn stub_equipment_list_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// POST `/api/equipment` → 201 with the created record
    pub async fn stub_create_equipment(&self, created: Value) {
        Mock::given(method("POST"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(201).set_body_json(created))
            .mount(&self.server)
            .await;
    }

    /// PUT `/api/equipment/{id}` → 200 with the updated record
    pub async fn stub_update_equipment(&self, id: i64, updated: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/api/equipment/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .mount(&self.server)
            .await;
    }

    /// PUT `/api/equipment/{id}` → 404
    pub async fn stub_update_missing(&self, id: i64) {
        Mock::given(method("PUT"))
            .and(path(format!("/api/equipment/{id}")))
            .respond_with(ResponseTemplate::new(404))
            .mount(&self.server)
            .await;
    }

    /// DELETE `/api/equipment/{id}` → 204
    pub async fn stub_delete_equipment(&self, id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/equipment/{id}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// DELETE `/api/equipment/{id}` → the given error status
    pub async fn stub_delete_error(&self, id: i64, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/equipment/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
