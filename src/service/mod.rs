//! Orchestration: validation composed with store calls. No business logic
//! beyond composition; results and errors pass through unchanged.

pub mod engine;
pub mod validation;
pub mod van;

pub use engine::EngineService;
pub use van::VanService;
