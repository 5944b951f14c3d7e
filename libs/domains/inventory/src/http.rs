//! HTTP implementation of the repository traits

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Category, CategoryId, Equipment, EquipmentDraft, EquipmentId};
use crate::repository::{CategoryRepository, EquipmentRepository};

/// Default timeout for store requests
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Single HTTP client for both the equipment and category endpoints of the
/// inventory store.
///
/// Every non-2xx response maps to [`InventoryError::Network`], except a 404 on
/// a targeted operation, which maps to [`InventoryError::NotFound`] so callers
/// can distinguish a vanished record from an unreachable store.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    base_url: String,
}

/// PUT body for a replace: the store expects the id repeated in the payload
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplaceBody<'a> {
    id: EquipmentId,
    #[serde(flatten)]
    draft: &'a EquipmentDraft,
}

impl HttpInventoryApi {
    /// Create a client with the default request timeout
    pub fn new(base_url: impl Into<String>) -> InventoryResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> InventoryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reject any non-2xx response as a transport failure
    async fn into_ok(response: Response) -> InventoryResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(InventoryError::Network(format!(
            "store responded {status}: {body}"
        )))
    }

    /// Like [`Self::into_ok`], but a 404 names the targeted record
    async fn into_ok_targeted(response: Response, id: i64) -> InventoryResult<Response> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound(id));
        }
        Self::into_ok(response).await
    }
}

#[async_trait]
impl EquipmentRepository for HttpInventoryApi {
    #[instrument(skip(self))]
    async fn list(&self) -> InventoryResult<Vec<Equipment>> {
        let response = self.client.get(self.url("/api/equipment")).send().await?;
        let rows = Self::into_ok(response).await?.json().await?;
        Ok(rows)
    }

    #[instrument(skip(self, draft), fields(equipment_name = %draft.name))]
    async fn create(&self, draft: EquipmentDraft) -> InventoryResult<Equipment> {
        let response = self
            .client
            .post(self.url("/api/equipment"))
            .json(&draft)
            .send()
            .await?;
        let created: Equipment = Self::into_ok(response).await?.json().await?;
        debug!(id = created.id, "Equipment created");
        Ok(created)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: EquipmentId, draft: EquipmentDraft) -> InventoryResult<Equipment> {
        let response = self
            .client
            .put(self.url(&format!("/api/equipment/{id}")))
            .json(&ReplaceBody { id, draft: &draft })
            .send()
            .await?;
        let updated = Self::into_ok_targeted(response, id).await?.json().await?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EquipmentId) -> InventoryResult<bool> {
        let response = self
            .client
            .delete(self.url(&format!("/api/equipment/{id}")))
            .send()
            .await?;
        Self::into_ok_targeted(response, id).await?;
        Ok(true)
    }
}

#[async_trait]
impl CategoryRepository for HttpInventoryApi {
    #[instrument(skip(self))]
    async fn list(&self) -> InventoryResult<Vec<Category>> {
        let response = self.client.get(self.url("/api/categories")).send().await?;
        let categories = Self::into_ok(response).await?.json().await?;
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: CategoryId) -> InventoryResult<Category> {
        let response = self
            .client
            .get(self.url(&format!("/api/categories/{id}")))
            .send()
            .await?;
        let category = Self::into_ok_targeted(response, id).await?.json().await?;
        Ok(category)
    }
}
