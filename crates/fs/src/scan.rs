use std::{fs::read_dir, os::unix::fs::DirEntryExt, path::Path};

use log::{debug, warn};

use crate::{FsError, record::Entry};

/// Enumerate the members of `dir` in OS order.
///
/// `.` and `..` are not reported. An entry that fails mid-iteration is
/// skipped with a warning; failing to open the directory at all is fatal.
pub fn scan_dir(dir: &Path) -> Result<Vec<Entry>, FsError> {
    let rd = read_dir(dir).map_err(|source| FsError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[scan] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        entries.push(Entry::new(entry.file_name(), entry.ino()));
    }

    debug!("[scan] {} entries in {:?}", entries.len(), dir);

    Ok(entries)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
