use super::types::{HostnameList, HostnameRecord};

/// Adds the custom hostnames that are not already listed.
pub fn inject_custom_hostnames<S: AsRef<str>>(list: &mut HostnameList, custom: &[S]) -> usize {
    list.merge(custom)
}

/// Adds the hostnames already forbidden upstream, keeping the ones listed
/// first in their place.
pub fn merge_existing(list: &mut HostnameList, existing: &[HostnameRecord]) -> usize {
    list.merge(existing.iter().map(|record| record.hostname.as_str()))
}
