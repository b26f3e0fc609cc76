//! Storage-facing filter model and per-type capabilities.

pub mod capability;
pub mod filter;

pub use capability::{CapabilityTable, EqualityFilter, capabilities};
pub use filter::{IndexAccess, StorageFilter};
