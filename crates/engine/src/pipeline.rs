use std::io::Write;

use log::debug;
use sls_fs::{IdentitySource, scan_dir};

use crate::{
    ColumnWidths, ListingConfig, ListingError, MetadataCache, compute_widths, render,
    sort_entries,
};

/// Counts reported by a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Entries enumerated in the directory.
    pub scanned: usize,
    /// Rows written after hidden-file filtering.
    pub printed: usize,
}

/// List `cfg.dir` into `out`: enumerate, sort, filter, measure, render.
///
/// Hidden entries are dropped only after sorting, and column widths are
/// measured over the surviving entries.
pub fn run_listing<W, S>(
    cfg: &ListingConfig,
    ids: &mut S,
    out: W,
) -> Result<ListingSummary, ListingError>
where
    W: Write,
    S: IdentitySource + ?Sized,
{
    let entries = scan_dir(&cfg.dir)?;
    let scanned = entries.len();

    let mut cache = MetadataCache::new(&cfg.dir);
    let entries = sort_entries(entries, cfg.sort, &mut cache)?;

    // Widths only drive detailed padding; compact output never looks up names.
    let widths = if cfg.detailed {
        compute_widths(entries.iter().filter(|e| cfg.shows(e)), &mut cache, ids)?
    } else {
        ColumnWidths::default()
    };

    let printed = render(out, &entries, cfg, widths, &mut cache, ids)?;

    debug!(
        "[pipeline] {:?}: scanned={} printed={} stat'ed={}",
        cfg.dir,
        scanned,
        printed,
        cache.len()
    );

    Ok(ListingSummary { scanned, printed })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
