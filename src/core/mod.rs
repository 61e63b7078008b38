//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod style;
pub mod timestamp;

// re-export frequently-used items for convenience
pub use bounds::{Range, terminal_columns};
pub use config::{Config, ConfigBuilder, MaxMode, MinMode};
pub use data::{Delimiter, Ingested, LoneField, Record};
pub use error::{ConfigError, HistError, RecordError};
pub use format::NumericFormat;
pub use style::BarStyle;
