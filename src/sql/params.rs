//! Dynamic values that can be bound to a PostgreSQL query.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::Database;
use uuid::Uuid;

/// One positional parameter of a dynamically built statement. `produces`
/// reports the concrete Postgres type per variant, so mixed parameter lists
/// bind without SQL-level casts.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlArg {
    I64(i64),
    I32(i32),
    Str(String),
    Uuid(Uuid),
}

impl From<i64> for SqlArg {
    fn from(v: i64) -> Self {
        SqlArg::I64(v)
    }
}

impl From<i32> for SqlArg {
    fn from(v: i32) -> Self {
        SqlArg::I32(v)
    }
}

impl From<&str> for SqlArg {
    fn from(v: &str) -> Self {
        SqlArg::Str(v.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(v: String) -> Self {
        SqlArg::Str(v)
    }
}

impl From<Uuid> for SqlArg {
    fn from(v: Uuid) -> Self {
        SqlArg::Uuid(v)
    }
}

impl<'q> Encode<'q, Postgres> for SqlArg {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlArg::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            SqlArg::I32(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            SqlArg::Str(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
            SqlArg::Uuid(u) => <Uuid as Encode<Postgres>>::encode_by_ref(u, buf)?,
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            SqlArg::I64(_) => PgTypeInfo::with_name("INT8"),
            SqlArg::I32(_) => PgTypeInfo::with_name("INT4"),
            SqlArg::Str(_) => PgTypeInfo::with_name("TEXT"),
            SqlArg::Uuid(_) => PgTypeInfo::with_name("UUID"),
        })
    }
}

impl sqlx::Type<Postgres> for SqlArg {
    fn type_info() -> PgTypeInfo {
        // Per-value type comes from `produces`.
        PgTypeInfo::with_name("TEXT")
    }
}
