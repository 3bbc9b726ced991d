//! Engine table access.

use crate::error::AppError;
use crate::models::{EngineInput, EnginePatch, EngineRecord};
use crate::sql::UpdateBuilder;
use crate::store::{finish, rollback_logged, run_update};
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, displacement_in_cc, no_of_cylinders, material, created_at, updated_at";

#[derive(Clone)]
pub struct EngineStore {
    pool: PgPool,
}

impl EngineStore {
    pub fn new(pool: PgPool) -> Self {
        EngineStore { pool }
    }

    /// `None` when no row matches; not an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<EngineRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, EngineRecord>(&format!(
            "SELECT {} FROM engine WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await;
        finish(tx, res).await
    }

    pub async fn get_all(&self) -> Result<Vec<EngineRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_as::<_, EngineRecord>(&format!(
            "SELECT {} FROM engine ORDER BY created_at",
            COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await;
        finish(tx, res).await
    }

    /// Insert one engine; returns the rows-affected count and the generated
    /// id so the client can fetch what it just created.
    pub async fn create(&self, input: &EngineInput) -> Result<(u64, Uuid), AppError> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO engine (displacement_in_cc, no_of_cylinders, material) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(input.displacement)
        .bind(input.no_of_cylinders)
        .bind(&input.material)
        .fetch_one(&mut *tx)
        .await
        .map(|id| (1, id));
        finish(tx, res).await
    }

    /// Full replace: every column is written.
    pub async fn update_full(&self, id: Uuid, input: &EngineInput) -> Result<u64, AppError> {
        let mut builder = UpdateBuilder::new("engine", "id");
        builder
            .set("displacement_in_cc", input.displacement)
            .set("no_of_cylinders", input.no_of_cylinders)
            .set("material", input.material.as_str());
        run_update(&self.pool, builder.build(id)?).await
    }

    /// Write only the columns the patch carries. An empty patch fails with
    /// `NothingToUpdate` before any statement is issued.
    pub async fn update_partial(&self, id: Uuid, patch: &EnginePatch) -> Result<u64, AppError> {
        let mut builder = UpdateBuilder::new("engine", "id");
        if let Some(v) = patch.displacement {
            builder.set("displacement_in_cc", v);
        }
        if let Some(v) = patch.no_of_cylinders {
            builder.set("no_of_cylinders", v);
        }
        if let Some(v) = &patch.material {
            builder.set("material", v.as_str());
        }
        run_update(&self.pool, builder.build(id)?).await
    }

    /// Existence check then delete, in one transaction. A missing row
    /// short-circuits to rows-affected 0.
    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM engine WHERE id = $1")
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
        let res = sqlx::query("DELETE FROM engine WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|done| done.rows_affected());
        finish(tx, res).await
    }
}
