//! Van record and request payloads. Wire format keeps the dash-cased keys
//! (`van-id`, `fuel-type`, `engine-id`, `image-url`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row shape of the `van` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct VanRecord {
    #[serde(rename = "van-id")]
    pub van_id: Uuid,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "fuel-type")]
    pub fuel_type: String,
    #[serde(rename = "engine-id")]
    pub engine_id: Uuid,
    pub price: i64,
    #[serde(rename = "image-url")]
    pub image_url: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// Body of POST/PUT van requests. Missing fields default to the zero value
/// and are caught by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VanInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "fuel-type", default)]
    pub fuel_type: String,
    #[serde(rename = "engine-id", default)]
    pub engine_id: Uuid,
    #[serde(default)]
    pub price: i64,
    #[serde(rename = "image-url", default)]
    pub image_url: String,
}

/// Fields of a PATCH van request; `Some` means the key was present in the
/// raw JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VanPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "fuel-type")]
    pub fuel_type: Option<String>,
    #[serde(rename = "engine-id")]
    pub engine_id: Option<Uuid>,
    pub price: Option<i64>,
    #[serde(rename = "image-url")]
    pub image_url: Option<String>,
}
