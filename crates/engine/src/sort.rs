use std::cmp::Ordering;

use log::debug;
use sls_fs::Entry;

use crate::{ListingError, MetadataCache};

/// The single active ordering of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// Size, largest first.
    Size,
    /// Modification time, most recent first.
    Time,
    /// Extension, ascending.
    Extension,
}

/// Precomputed comparison fields of one entry.
#[derive(Debug, Clone)]
pub struct SortKey {
    pub entry: Entry,
    name_lower: String,
    size: u64,
    mtime_secs: i64,
}

impl SortKey {
    /// Key for orderings that do not look at metadata.
    pub fn new(entry: Entry) -> Self {
        Self::with_stats(entry, 0, 0)
    }

    pub fn with_stats(entry: Entry, size: u64, mtime_secs: i64) -> Self {
        let name_lower = entry.name.to_lowercase();
        Self {
            entry,
            name_lower,
            size,
            mtime_secs,
        }
    }
}

impl SortMode {
    /// Whether keys for this mode must carry size and mtime.
    pub fn needs_metadata(self) -> bool {
        matches!(self, SortMode::Size | SortMode::Time)
    }

    /// Total order over keys. Every mode falls back to name order on ties.
    pub fn compare(self, a: &SortKey, b: &SortKey) -> Ordering {
        match self {
            SortMode::Name => name_order(a, b),
            SortMode::Size => b.size.cmp(&a.size).then_with(|| name_order(a, b)),
            SortMode::Time => b
                .mtime_secs
                .cmp(&a.mtime_secs)
                .then_with(|| name_order(a, b)),
            SortMode::Extension => a
                .entry
                .extension()
                .cmp(b.entry.extension())
                .then_with(|| name_order(a, b)),
        }
    }
}

/// Lowercased names first; raw names only separate `README` from `readme`.
fn name_order(a: &SortKey, b: &SortKey) -> Ordering {
    a.name_lower
        .cmp(&b.name_lower)
        .then_with(|| a.entry.name.cmp(&b.entry.name))
}

/// Sort `entries` by `mode`, resolving metadata through `cache` when the mode needs it.
pub fn sort_entries(
    entries: Vec<Entry>,
    mode: SortMode,
    cache: &mut MetadataCache,
) -> Result<Vec<Entry>, ListingError> {
    let mut keys: Vec<SortKey> = Vec::new();
    keys.try_reserve_exact(entries.len())?;

    for entry in entries {
        let key = if mode.needs_metadata() {
            let md = cache.get(&entry)?;
            let (size, mtime_secs) = (md.size, md.mtime_secs);
            SortKey::with_stats(entry, size, mtime_secs)
        } else {
            SortKey::new(entry)
        };
        keys.push(key);
    }

    debug!("[sort] {} entries by {:?}", keys.len(), mode);
    keys.sort_by(|a, b| mode.compare(a, b));

    Ok(keys.into_iter().map(|k| k.entry).collect())
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
