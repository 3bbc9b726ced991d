//! Engine record and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row shape of the `engine` table. Timestamps are store-managed and never
/// serialized.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EngineRecord {
    pub id: Uuid,
    pub displacement_in_cc: i64,
    pub no_of_cylinders: i32,
    pub material: String,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// Body of POST/PUT engine requests. Missing fields default to the zero
/// value and are caught by validation, so the client sees the field-specific
/// rule message rather than a bare decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineInput {
    #[serde(default)]
    pub displacement: i64,
    #[serde(rename = "no-of-cylinders", default)]
    pub no_of_cylinders: i32,
    #[serde(default)]
    pub material: String,
}

/// Fields of a PATCH engine request. `Some` means the key was present in the
/// raw JSON body; validation runs on the raw object before this is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnginePatch {
    pub displacement: Option<i64>,
    #[serde(rename = "no-of-cylinders")]
    pub no_of_cylinders: Option<i32>,
    pub material: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_decodes_wire_field_names() {
        let input: EngineInput = serde_json::from_str(
            r#"{"displacement":2000,"no-of-cylinders":4,"material":"Iron"}"#,
        )
        .unwrap();
        assert_eq!(input.displacement, 2000);
        assert_eq!(input.no_of_cylinders, 4);
        assert_eq!(input.material, "Iron");
    }

    #[test]
    fn missing_input_fields_default_to_zero() {
        let input: EngineInput = serde_json::from_str(r#"{"material":"iron"}"#).unwrap();
        assert_eq!(input.displacement, 0);
        assert_eq!(input.no_of_cylinders, 0);
    }

    #[test]
    fn patch_keeps_absent_fields_as_none() {
        let patch: EnginePatch = serde_json::from_str(r#"{"displacement":1600}"#).unwrap();
        assert_eq!(patch.displacement, Some(1600));
        assert!(patch.no_of_cylinders.is_none());
        assert!(patch.material.is_none());
    }

    #[test]
    fn record_json_hides_timestamps() {
        let record = EngineRecord {
            id: Uuid::new_v4(),
            displacement_in_cc: 2000,
            no_of_cylinders: 4,
            material: "iron".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["no_of_cylinders"], 4);
    }
}
