//! Domain records and request payload types.

pub mod engine;
pub mod van;

pub use engine::{EngineInput, EnginePatch, EngineRecord};
pub use van::{VanInput, VanPatch, VanRecord};
