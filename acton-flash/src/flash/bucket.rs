//! Per-category flash entry storage

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single flashed value
pub type FlashEntry = serde_json::Value;

/// Flash entries grouped by category name
///
/// This is the value stored in the session slot. Entries keep insertion order
/// within a category; categories are keyed by name so values outside the four
/// [`FlashCategory`](super::FlashCategory) variants are kept as well.
///
/// A category that was never written and a category that was cleared both
/// read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashBucket {
    categories: BTreeMap<String, Vec<FlashEntry>>,
}

impl FlashBucket {
    /// Create an empty bucket
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to `category`, creating the category if needed
    pub fn push(&mut self, category: impl Into<String>, entry: FlashEntry) {
        self.categories.entry(category.into()).or_default().push(entry);
    }

    /// Entries stored under `category`, empty if the category is absent
    #[must_use]
    pub fn entries(&self, category: &str) -> &[FlashEntry] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `category` has been written at least once
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Empty `category` if it exists
    ///
    /// Returns `false` without creating the key if the category was never
    /// written.
    pub fn clear(&mut self, category: &str) -> bool {
        if let Some(entries) = self.categories.get_mut(category) {
            entries.clear();
            true
        } else {
            false
        }
    }

    /// Remove and return the entries of `category`, leaving it empty
    pub fn take(&mut self, category: &str) -> Vec<FlashEntry> {
        self.categories
            .get_mut(category)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Whether no category holds any entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Total number of entries across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Iterate over categories and their entries, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FlashEntry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }
}
