use std::path::PathBuf;

use sls_fs::Entry;
use sls_runtime::DEFAULT_DIR;

use crate::SortMode;

/// Everything one listing run needs to know, passed explicitly to each stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Directory to list; entry paths are resolved relative to it.
    pub dir: PathBuf,
    /// `-a`
    pub show_hidden: bool,
    /// `-F`
    pub classify: bool,
    /// `-i`
    pub show_inode: bool,
    /// `-l`
    pub detailed: bool,
    pub sort: SortMode,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            show_hidden: false,
            classify: false,
            show_inode: false,
            detailed: false,
            sort: SortMode::Name,
        }
    }
}

impl ListingConfig {
    /// Whether `entry` survives hidden-file filtering.
    #[inline]
    pub fn shows(&self, entry: &Entry) -> bool {
        self.show_hidden || !entry.is_hidden()
    }
}
