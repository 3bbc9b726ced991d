//! HTTP-facing layer: decodes requests, calls services, maps outcomes to
//! status codes and the `{code, message?, data?}` envelope.

pub mod engine;
pub mod login;
pub mod van;

use crate::error::AppError;
use uuid::Uuid;

/// Route ids must be syntactically valid v4 UUIDs; anything else is
/// rejected before the store is touched.
pub(crate) fn parse_v4_id(raw: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|u| u.get_version_num() == 4)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {} ID", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_v4_ids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_v4_id(&id.to_string(), "engine").unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        let err = parse_v4_id("not-a-uuid", "engine").unwrap_err();
        assert_eq!(err.to_string(), "Invalid engine ID");
    }

    #[test]
    fn rejects_wrong_uuid_version() {
        // Valid v5 UUID, wrong version.
        let err = parse_v4_id("a6edc906-2f9f-5fb2-a373-efac406f0ef2", "van").unwrap_err();
        assert_eq!(err.to_string(), "Invalid van ID");
    }

    #[test]
    fn rejects_nil_uuid() {
        assert!(parse_v4_id("00000000-0000-0000-0000-000000000000", "engine").is_err());
    }
}
