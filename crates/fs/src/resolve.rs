use std::{ffi::OsStr, fs, path::Path};

use log::info;

use crate::{FsError, record::MetadataRecord};

/// Stat `dir/name`, following symlinks.
///
/// When the followed query fails (typically a dangling link) the link itself
/// is reported instead. Only when both fail is the entry unavailable.
pub fn resolve(dir: &Path, name: impl AsRef<OsStr>) -> Result<MetadataRecord, FsError> {
    let path = dir.join(name.as_ref());
    match fs::metadata(&path) {
        Ok(md) => Ok(MetadataRecord::from(&md)),
        Err(follow_err) => match fs::symlink_metadata(&path) {
            Ok(md) => {
                info!("[resolve] {:?} not followable ({follow_err}), using lstat", path);
                Ok(MetadataRecord::from(&md))
            }
            Err(source) => Err(FsError::MetadataUnavailable { path, source }),
        },
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
