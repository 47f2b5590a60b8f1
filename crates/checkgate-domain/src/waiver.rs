//! Waiver resolution: decide whether an item is covered by an approved exception.
//!
//! Matching is case-insensitive and runs in two passes over the waivers, in order:
//!
//! 1. **Word containment**: every whitespace-separated word of the key appears in the item name.
//!    Tolerates reordering and extra words in tool-generated text.
//! 2. **Fragment containment**: the key contains the name, or the name contains the key.
//!    Keeps waivers authored as literal fragments working.
//!
//! The first waiver to match in the earliest pass wins. Empty names and keys never match.

use std::collections::BTreeSet;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaiverEntry {
    pub key: String,
    pub reason: String,
}

/// Ordered key -> reason mapping. Order is priority order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaiverSet {
    entries: Vec<WaiverEntry>,
}

impl WaiverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a waiver. Re-inserting a key replaces its reason and keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        let key = key.into();
        let reason = reason.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.reason = reason,
            None => self.entries.push(WaiverEntry { key, reason }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&WaiverEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaiverEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, R: Into<String>> FromIterator<(K, R)> for WaiverSet {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut set = WaiverSet::new();
        for (key, reason) in iter {
            set.insert(key, reason);
        }
        set
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaiverMatch<'a> {
    /// Position of the matched entry in its `WaiverSet`.
    pub index: usize,
    pub entry: &'a WaiverEntry,
}

/// Find the waiver covering `item_name`, if any.
pub fn resolve<'a>(item_name: &str, waivers: &'a WaiverSet) -> Option<WaiverMatch<'a>> {
    let name = item_name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    let name_words = words(&name);
    let by_words = waivers.iter().enumerate().find(|(_, entry)| {
        let key = entry.key.to_lowercase();
        let key_words = words(&key);
        !key_words.is_empty() && key_words.is_subset(&name_words)
    });

    let found = by_words.or_else(|| {
        waivers.iter().enumerate().find(|(_, entry)| {
            let key = entry.key.trim().to_lowercase();
            !key.is_empty() && (key.contains(&name) || name.contains(&key))
        })
    });

    found.map(|(index, entry)| WaiverMatch { index, entry })
}

fn words(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

/// Per-invocation record of which waivers have been consumed.
///
/// Consumption is monotonic: once an entry matched an item it stays used.
#[derive(Clone, Debug)]
pub struct WaiverLedger<'a> {
    waivers: &'a WaiverSet,
    used: Vec<bool>,
}

impl<'a> WaiverLedger<'a> {
    pub fn new(waivers: &'a WaiverSet) -> Self {
        Self {
            waivers,
            used: vec![false; waivers.len()],
        }
    }

    /// Resolve `item_name` and mark the matching entry used.
    pub fn consume(&mut self, item_name: &str) -> Option<WaiverMatch<'a>> {
        let matched = resolve(item_name, self.waivers)?;
        if !self.used[matched.index] {
            debug!(item = item_name, waiver = %matched.entry.key, "waiver consumed");
        }
        self.used[matched.index] = true;
        Some(matched)
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|u| **u).count()
    }

    /// Entries that never matched, in waiver order.
    pub fn unused(&self) -> impl Iterator<Item = &'a WaiverEntry> + '_ {
        self.waivers
            .iter()
            .zip(self.used.iter())
            .filter(|(_, used)| !**used)
            .map(|(entry, _)| entry)
    }
}
