use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A hostname the crawler must not visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HostnameRecord {
    pub hostname: String,
}

impl HostnameRecord {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

/// Ordered list of forbidden hostnames without duplicates.
///
/// Matching is exact and case-sensitive: `Example.onion` and
/// `example.onion` are two distinct entries. New entries are always
/// appended, so the first occurrence of a hostname keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostnameList {
    records: Vec<HostnameRecord>,
    seen: HashSet<String>,
}

impl HostnameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `hostname` unless an identical one is already present.
    /// Returns `true` when the record was appended.
    pub fn add_if_not_exist(&mut self, hostname: &str) -> bool {
        if self.seen.contains(hostname) {
            return false;
        }

        self.seen.insert(hostname.to_owned());
        self.records.push(HostnameRecord::new(hostname));
        true
    }

    /// Adds every candidate through [`Self::add_if_not_exist`] and returns
    /// how many were new.
    pub fn merge<I, S>(&mut self, hostnames: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        hostnames
            .into_iter()
            .filter(|hostname| self.add_if_not_exist(hostname.as_ref()))
            .count()
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.seen.contains(hostname)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HostnameRecord] {
        &self.records
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.hostname.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for HostnameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.merge(iter);
        list
    }
}

// Serialized as the bare record array the configuration API stores.
impl Serialize for HostnameList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
