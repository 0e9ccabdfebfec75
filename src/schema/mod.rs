//! Schema module - Configuration, snapshot and report types for extremum search.

mod config;
mod objective;
mod report;
mod snapshot;

pub use config::*;
pub use objective::*;
pub use report::*;
pub use snapshot::*;
