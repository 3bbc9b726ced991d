//! Startup DDL bootstrap for the `engine` and `van` tables. Idempotent; runs
//! once before the server starts listening.

use crate::error::AppError;
use sqlx::PgPool;

const DDL: &[&str] = &[
    // gen_random_uuid() needs pgcrypto on Postgres < 13.
    r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto""#,
    r#"
    CREATE TABLE IF NOT EXISTS engine (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        displacement_in_cc BIGINT NOT NULL,
        no_of_cylinders INT NOT NULL,
        material TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS van (
        van_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        brand TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        fuel_type TEXT NOT NULL,
        engine_id UUID NOT NULL REFERENCES engine(id),
        price BIGINT NOT NULL,
        image_url TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create both tables if they do not exist. Referential integrity
/// (`van.engine_id` -> `engine.id`) is enforced here, not in application
/// code.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema bootstrap complete");
    Ok(())
}
