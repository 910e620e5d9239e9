use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use hashbrown::{HashMap, hash_map::EntryRef};
use sls_fs::{Entry, FsError, MetadataRecord, resolve};

/// Per-run memo of resolved metadata, keyed by raw entry name within `dir`.
///
/// Sorting, width computation and rendering all ask for the same records;
/// each entry is stat'ed at most once.
#[derive(Debug)]
pub struct MetadataCache {
    dir: PathBuf,
    records: HashMap<OsString, MetadataRecord>,
}

impl MetadataCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            records: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get(&mut self, entry: &Entry) -> Result<&MetadataRecord, FsError> {
        match self.records.entry_ref(entry.name_os.as_os_str()) {
            EntryRef::Occupied(slot) => Ok(slot.into_mut()),
            EntryRef::Vacant(slot) => {
                let record = resolve(&self.dir, &entry.name_os)?;
                Ok(slot.insert(record))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
