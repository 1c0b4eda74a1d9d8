//! Family batches: derived family name -> font sources.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::source::FontSource;

/// Grouped font sources, the unit of work handed to the batch loader.
///
/// Keys are derived family names. Sources of one family keep insertion
/// order; iteration over families is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyBatch {
    families: BTreeMap<String, Vec<FontSource>>,
}

impl FamilyBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to `family`, creating the entry if needed.
    pub fn add(&mut self, family: impl Into<String>, source: FontSource) {
        self.families.entry(family.into()).or_default().push(source);
    }

    /// Move every source of `other` into this batch.
    ///
    /// Families present in both keep all sources of both.
    pub fn merge(&mut self, other: FamilyBatch) {
        for (family, sources) in other.families {
            self.families.entry(family).or_default().extend(sources);
        }
    }

    /// Number of distinct families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Total number of sources across all families.
    pub fn source_count(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    pub fn sources(&self, family: &str) -> Option<&[FontSource]> {
        self.families.get(family).map(Vec::as_slice)
    }

    /// Family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FontSource])> {
        self.families
            .iter()
            .map(|(family, sources)| (family.as_str(), sources.as_slice()))
    }
}

impl IntoIterator for FamilyBatch {
    type Item = (String, Vec<FontSource>);
    type IntoIter = btree_map::IntoIter<String, Vec<FontSource>>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.into_iter()
    }
}

impl FromIterator<(String, FontSource)> for FamilyBatch {
    fn from_iter<I: IntoIterator<Item = (String, FontSource)>>(iter: I) -> Self {
        let mut batch = FamilyBatch::new();
        for (family, source) in iter {
            batch.add(family, source);
        }
        batch
    }
}
