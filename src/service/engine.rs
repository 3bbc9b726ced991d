//! Engine service: validation + store composition.

use crate::error::AppError;
use crate::models::{EngineInput, EnginePatch, EngineRecord};
use crate::service::validation::{validate_engine, validate_engine_patch};
use crate::store::EngineStore;
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Clone)]
pub struct EngineService {
    store: EngineStore,
}

impl EngineService {
    pub fn new(store: EngineStore) -> Self {
        EngineService { store }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<EngineRecord>, AppError> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<EngineRecord>, AppError> {
        self.store.get_all().await
    }

    pub async fn create(&self, input: &EngineInput) -> Result<(u64, Uuid), AppError> {
        validate_engine(input)?;
        self.store.create(input).await
    }

    pub async fn update_full(&self, id: Uuid, input: &EngineInput) -> Result<u64, AppError> {
        validate_engine(input)?;
        self.store.update_full(id, input).await
    }

    /// PATCH path: partial validation always runs against the raw body.
    pub async fn update_partial(
        &self,
        id: Uuid,
        body: Map<String, Value>,
    ) -> Result<u64, AppError> {
        validate_engine_patch(&body)?;
        let patch: EnginePatch = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::BadRequest(format!("invalid patch body: {}", e)))?;
        self.store.update_partial(id, &patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        self.store.delete(id).await
    }
}
