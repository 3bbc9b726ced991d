//! Van table access.

use crate::error::AppError;
use crate::models::{VanInput, VanPatch, VanRecord};
use crate::sql::UpdateBuilder;
use crate::store::{finish, rollback_logged, run_update};
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "van_id, name, brand, description, category, fuel_type, engine_id, \
                       price, image_url, created_at, updated_at";

#[derive(Clone)]
pub struct VanStore {
    pool: PgPool,
}

impl VanStore {
    pub fn new(pool: PgPool) -> Self {
        VanStore { pool }
    }

    /// `None` when no row matches; not an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<VanRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, VanRecord>(&format!(
            "SELECT {} FROM van WHERE van_id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await;
        finish(tx, res).await
    }

    pub async fn get_all(&self) -> Result<Vec<VanRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, VanRecord>(&format!(
            "SELECT {} FROM van ORDER BY created_at",
            COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await;
        finish(tx, res).await
    }

    pub async fn get_by_category(&self, category: &str) -> Result<Vec<VanRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, VanRecord>(&format!(
            "SELECT {} FROM van WHERE category = $1 ORDER BY created_at",
            COLUMNS
        ))
        .bind(category)
        .fetch_all(&mut *tx)
        .await;
        finish(tx, res).await
    }

    pub async fn get_by_brand(&self, brand: &str) -> Result<Vec<VanRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, VanRecord>(&format!(
            "SELECT {} FROM van WHERE brand = $1 ORDER BY created_at",
            COLUMNS
        ))
        .bind(brand)
        .fetch_all(&mut *tx)
        .await;
        finish(tx, res).await
    }

    /// Insert one van; returns the rows-affected count and the generated id.
    pub async fn create(&self, input: &VanInput) -> Result<(u64, Uuid), AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO van (name, brand, description, category, fuel_type, engine_id, \
             price, image_url) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING van_id",
        )
        .bind(&input.name)
        .bind(&input.brand)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.fuel_type)
        .bind(input.engine_id)
        .bind(input.price)
        .bind(&input.image_url)
        .fetch_one(&mut *tx)
        .await
        .map(|id| (1, id));
        finish(tx, res).await
    }

    /// Full replace: every column is written.
    pub async fn update_full(&self, id: Uuid, input: &VanInput) -> Result<u64, AppError> {
        let mut builder = UpdateBuilder::new("van", "van_id");
        builder
            .set("name", input.name.as_str())
            .set("brand", input.brand.as_str())
            .set("description", input.description.as_str())
            .set("category", input.category.as_str())
            .set("fuel_type", input.fuel_type.as_str())
            .set("engine_id", input.engine_id)
            .set("price", input.price)
            .set("image_url", input.image_url.as_str());
        run_update(&self.pool, builder.build(id)?).await
    }

    /// Write only the columns the patch carries, in fixed column order.
    pub async fn update_partial(&self, id: Uuid, patch: &VanPatch) -> Result<u64, AppError> {
        let mut builder = UpdateBuilder::new("van", "van_id");
        if let Some(v) = &patch.name {
            builder.set("name", v.as_str());
        }
        if let Some(v) = &patch.brand {
            builder.set("brand", v.as_str());
        }
        if let Some(v) = &patch.description {
            builder.set("description", v.as_str());
        }
        if let Some(v) = &patch.category {
            builder.set("category", v.as_str());
        }
        if let Some(v) = &patch.fuel_type {
            builder.set("fuel_type", v.as_str());
        }
        if let Some(v) = patch.engine_id {
            builder.set("engine_id", v);
        }
        if let Some(v) = patch.price {
            builder.set("price", v);
        }
        if let Some(v) = &patch.image_url {
            builder.set("image_url", v.as_str());
        }
        run_update(&self.pool, builder.build(id)?).await
    }

    /// Existence check then delete, in one transaction.
    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM van WHERE van_id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await;
        let exists = match exists {
            Ok(v) => v,
            Err(e) => {
                rollback_logged(tx).await;
                return Err(AppError::Db(e));
            }
        };
        if exists.is_none() {
            tx.commit().await?;
            return Ok(0);
        }
        let res = sqlx::query("DELETE FROM van WHERE van_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|done| done.rows_affected());
        finish(tx, res).await
    }
}
