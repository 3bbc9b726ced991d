//! Safe SQL builder: identifiers are compile-time constants, values are
//! bound as positional parameters.

mod builder;
pub mod params;

pub use builder::{UpdateBuilder, UpdateQuery};
pub use params::SqlArg;
