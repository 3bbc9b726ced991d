//! Field-level business rules for engines and vans. Pure functions; the
//! caller maps failures to a client error response.
//!
//! Partial (PATCH) validation works on the raw decoded JSON object, not the
//! typed struct: a zero-value typed field is indistinguishable from an
//! absent one, so presence is detected by key lookup.

use crate::error::AppError;
use crate::models::{EngineInput, VanInput};
use serde_json::{Map, Value};
use uuid::Uuid;

const MATERIALS: [&str; 2] = ["aluminium", "iron"];
const CYLINDER_COUNTS: [i32; 3] = [4, 6, 8];
const CATEGORIES: [&str; 3] = ["simple", "rugged", "luxury"];
const FUEL_TYPES: [&str; 3] = ["petrol", "diesel", "gasoline"];

// 1500cc - 4000cc
fn validate_displacement(displacement: i64) -> Result<(), AppError> {
    if !(1500..=4000).contains(&displacement) {
        return Err(AppError::Validation(
            "displacement must fall within the range of 1500-4000".into(),
        ));
    }
    Ok(())
}

fn validate_cylinder_count(cylinders: i32) -> Result<(), AppError> {
    if !CYLINDER_COUNTS.contains(&cylinders) {
        return Err(AppError::Validation(
            "no. of cylinders must be one of following - [4, 6, 8]".into(),
        ));
    }
    Ok(())
}

fn validate_material(material: &str) -> Result<(), AppError> {
    if !MATERIALS.contains(&material.to_lowercase().as_str()) {
        return Err(AppError::Validation(
            "material must be one of following - ['aluminium', 'iron']".into(),
        ));
    }
    Ok(())
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), AppError> {
    if !CATEGORIES.contains(&category.to_lowercase().as_str()) {
        return Err(AppError::Validation(
            "category must be one of following - ['simple', 'rugged', 'luxury']".into(),
        ));
    }
    Ok(())
}

fn validate_fuel_type(fuel: &str) -> Result<(), AppError> {
    if !FUEL_TYPES.contains(&fuel.to_lowercase().as_str()) {
        return Err(AppError::Validation(
            "fuel type must be one of following - ['petrol', 'diesel', 'gasoline']".into(),
        ));
    }
    Ok(())
}

fn validate_engine_id(engine_id: Uuid) -> Result<(), AppError> {
    if engine_id.get_version_num() != 4 {
        return Err(AppError::Validation(
            "engine-id must be a valid v4 UUID".into(),
        ));
    }
    Ok(())
}

fn validate_price(price: i64) -> Result<(), AppError> {
    if price <= 0 {
        return Err(AppError::Validation(
            "price must be greater than 0".into(),
        ));
    }
    Ok(())
}

/// Full validation: every engine field checked unconditionally (POST/PUT).
pub fn validate_engine(input: &EngineInput) -> Result<(), AppError> {
    validate_displacement(input.displacement)?;
    validate_cylinder_count(input.no_of_cylinders)?;
    validate_material(&input.material)?;
    Ok(())
}

/// Full validation: every van field checked unconditionally (POST/PUT).
pub fn validate_van(input: &VanInput) -> Result<(), AppError> {
    validate_non_empty("name", &input.name)?;
    validate_non_empty("brand", &input.brand)?;
    validate_non_empty("description", &input.description)?;
    validate_category(&input.category)?;
    validate_fuel_type(&input.fuel_type)?;
    validate_engine_id(input.engine_id)?;
    validate_price(input.price)?;
    validate_non_empty("image-url", &input.image_url)?;
    Ok(())
}

/// Partial validation: only keys present in the raw body are checked.
pub fn validate_engine_patch(body: &Map<String, Value>) -> Result<(), AppError> {
    if let Some(v) = present_i64(body, "displacement")? {
        validate_displacement(v)?;
    }
    if let Some(v) = present_i64(body, "no-of-cylinders")? {
        let v = i32::try_from(v)
            .map_err(|_| field_type_error("no-of-cylinders", "an integer"))?;
        validate_cylinder_count(v)?;
    }
    if let Some(v) = present_str(body, "material")? {
        validate_material(v)?;
    }
    Ok(())
}

/// Partial validation: only keys present in the raw body are checked.
pub fn validate_van_patch(body: &Map<String, Value>) -> Result<(), AppError> {
    if let Some(v) = present_str(body, "name")? {
        validate_non_empty("name", v)?;
    }
    if let Some(v) = present_str(body, "brand")? {
        validate_non_empty("brand", v)?;
    }
    if let Some(v) = present_str(body, "description")? {
        validate_non_empty("description", v)?;
    }
    if let Some(v) = present_str(body, "category")? {
        validate_category(v)?;
    }
    if let Some(v) = present_str(body, "fuel-type")? {
        validate_fuel_type(v)?;
    }
    if let Some(v) = present_str(body, "engine-id")? {
        let id = Uuid::parse_str(v)
            .map_err(|_| field_type_error("engine-id", "a UUID string"))?;
        validate_engine_id(id)?;
    }
    if let Some(v) = present_i64(body, "price")? {
        validate_price(v)?;
    }
    if let Some(v) = present_str(body, "image-url")? {
        validate_non_empty("image-url", v)?;
    }
    Ok(())
}

fn field_type_error(field: &str, expected: &str) -> AppError {
    AppError::Validation(format!("{} must be {}", field, expected))
}

/// Key present with a non-integer value (including null) is an error;
/// absent key is `None`.
fn present_i64(body: &Map<String, Value>, key: &str) -> Result<Option<i64>, AppError> {
    match body.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| field_type_error(key, "an integer")),
    }
}

/// Key present with a non-string value (including null) is an error;
/// absent key is `None`.
fn present_str<'a>(body: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, AppError> {
    match body.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(Some)
            .ok_or_else(|| field_type_error(key, "a string")),
    }
}
