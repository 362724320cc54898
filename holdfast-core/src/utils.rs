//! Various shared functions that holdfast uses.
pub mod modmask_lookup;
