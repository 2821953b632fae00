//! Scanner: CLI targets to an ordered, de-duplicated list of Go files.
//!
//! Both passes consume the same list, so its order must be stable for the
//! whole run.

pub mod filters;
pub mod targets;

pub use filters::FileFilter;
pub use targets::{resolve_targets, Target};
