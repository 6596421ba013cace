pub mod ranges;

pub use ranges::{CodePointRange, RangeConfig};
