//! Transactional data access. Each operation runs inside its own
//! transaction: commit on success, rollback (best-effort, logged) on any
//! statement failure.

pub mod engine;
pub mod van;

pub use engine::EngineStore;
pub use van::VanStore;

use crate::error::AppError;
use crate::sql::UpdateQuery;
use sqlx::{Postgres, Transaction};

/// Commit on `Ok`, rollback on `Err`. Rollback failures are logged, never
/// surfaced; the original statement error is what propagates.
pub(crate) async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    res: Result<T, sqlx::Error>,
) -> Result<T, AppError> {
    match res {
        Ok(v) => {
            tx.commit().await?;
            Ok(v)
        }
        Err(e) => {
            rollback_logged(tx).await;
            Err(AppError::Db(e))
        }
    }
}

pub(crate) async fn rollback_logged(tx: Transaction<'_, Postgres>) {
    if let Err(rb) = tx.rollback().await {
        tracing::warn!(error = %rb, "transaction rollback failed");
    }
}

/// Bind and execute a built UPDATE inside its own transaction; returns the
/// rows-affected count.
pub(crate) async fn run_update(pool: &sqlx::PgPool, query: UpdateQuery) -> Result<u64, AppError> {
    let UpdateQuery { sql, params } = query;
    tracing::debug!(sql = %sql, "update");
    let mut tx = pool.begin().await?;
    let mut stmt = sqlx::query(&sql);
    for p in params {
        stmt = stmt.bind(p);
    }
    let res = stmt.execute(&mut *tx).await.map(|done| done.rows_affected());
    finish(tx, res).await
}
