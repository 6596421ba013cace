pub mod api;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod expand;
pub mod ids;
pub mod qa;
pub mod reduce;
pub mod span;
pub mod table;
pub mod trace;

// Re-exports used by the CLI and tests
pub use config::RangeConfig;
pub use error::{Error, Result};
pub use ids::{parse, Ids};
pub use table::WriteOptions;

pub use api::*;
