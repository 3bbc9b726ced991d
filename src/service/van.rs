//! Van service: validation + store composition.

use crate::error::AppError;
use crate::models::{VanInput, VanPatch, VanRecord};
use crate::service::validation::{validate_van, validate_van_patch};
use crate::store::VanStore;
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Clone)]
pub struct VanService {
    store: VanStore,
}

impl VanService {
    pub fn new(store: VanStore) -> Self {
        VanService { store }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<VanRecord>, AppError> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<VanRecord>, AppError> {
        self.store.get_all().await
    }

    pub async fn get_by_category(&self, category: &str) -> Result<Vec<VanRecord>, AppError> {
        self.store.get_by_category(category).await
    }

    pub async fn get_by_brand(&self, brand: &str) -> Result<Vec<VanRecord>, AppError> {
        self.store.get_by_brand(brand).await
    }

    pub async fn create(&self, input: &VanInput) -> Result<(u64, Uuid), AppError> {
        validate_van(input)?;
        self.store.create(input).await
    }

    pub async fn update_full(&self, id: Uuid, input: &VanInput) -> Result<u64, AppError> {
        validate_van(input)?;
        self.store.update_full(id, input).await
    }

    /// PATCH path: partial validation always runs against the raw body.
    pub async fn update_partial(
        &self,
        id: Uuid,
        body: Map<String, Value>,
    ) -> Result<u64, AppError> {
        validate_van_patch(&body)?;
        let patch: VanPatch = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::BadRequest(format!("invalid patch body: {}", e)))?;
        self.store.update_partial(id, &patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        self.store.delete(id).await
    }
}
