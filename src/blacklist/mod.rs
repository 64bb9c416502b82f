pub mod merge;
pub mod types;

pub use merge::{inject_custom_hostnames, merge_existing};
pub use types::{HostnameList, HostnameRecord};
