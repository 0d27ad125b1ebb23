//! Builder API for validated machine construction.
//!
//! Machines can be assembled in code with fluent builders or loaded from a
//! configuration document. Either way, every setting is checked and all
//! problems are reported together.

pub mod config;
pub mod error;
pub mod machine;
mod validate;

pub use config::{CatalogConfig, SingleItemConfig};
pub use error::{BuildError, ConfigViolation};
pub use machine::{CatalogBuilder, SingleItemBuilder};
