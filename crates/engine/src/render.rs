use std::io::{self, Write};

use sls_fs::{Entry, IdentitySource, MetadataRecord};
use sls_runtime::COMPACT_SEPARATOR;

use crate::{
    ColumnWidths, ListingConfig, ListingError, MetadataCache,
    format::{classify, mode_string, time_string},
};

/// One printable entry with everything already resolved.
#[derive(Debug)]
pub struct Row<'a> {
    pub entry: &'a Entry,
    pub record: &'a MetadataRecord,
    /// Owner and group names; present only for detailed listings.
    pub names: Option<(&'a str, &'a str)>,
}

/// Writes rows in compact or detailed layout.
///
/// Detailed rows each end their own line. Compact rows share one line and
/// each leave a two-space trailer; `finish` closes whatever line is open.
pub struct ListingPrinter<'a, W: Write> {
    out: W,
    cfg: &'a ListingConfig,
    widths: ColumnWidths,
    line_open: bool,
}

impl<'a, W: Write> ListingPrinter<'a, W> {
    pub fn new(out: W, cfg: &'a ListingConfig, widths: ColumnWidths) -> Self {
        Self {
            out,
            cfg,
            widths,
            // An empty listing still prints a newline.
            line_open: true,
        }
    }

    pub fn print_row(&mut self, row: &Row<'_>) -> io::Result<()> {
        let w = self.widths;

        if self.cfg.show_inode {
            if self.cfg.detailed {
                write!(self.out, "{:<width$} ", row.entry.inode, width = w.inode)?;
            } else {
                write!(self.out, "{} ", row.entry.inode)?;
            }
        }

        if let Some((owner, group)) = row.names {
            let md = row.record;
            write!(
                self.out,
                "{} {:<lw$} {:<ow$} {:<gw$} {:>sw$} {} ",
                mode_string(md),
                md.links,
                owner,
                group,
                md.size,
                time_string(md.mtime_secs),
                lw = w.links,
                ow = w.owner,
                gw = w.group,
                sw = w.size,
            )?;
        }

        self.out.write_all(row.entry.name.as_bytes())?;

        if self.cfg.classify
            && let Some(symbol) = classify(row.record)
        {
            write!(self.out, "{symbol}")?;
        }

        if self.cfg.detailed {
            writeln!(self.out)?;
            self.line_open = false;
        } else {
            self.out.write_all(COMPACT_SEPARATOR.as_bytes())?;
            self.line_open = true;
        }

        Ok(())
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if self.line_open {
            writeln!(self.out)?;
            self.line_open = false;
        }
        self.out.flush()
    }
}

/// Render the sorted `entries`, skipping hidden ones unless `-a` is set.
///
/// Returns the number of rows printed.
pub fn render<W, S>(
    out: W,
    entries: &[Entry],
    cfg: &ListingConfig,
    widths: ColumnWidths,
    cache: &mut MetadataCache,
    ids: &mut S,
) -> Result<usize, ListingError>
where
    W: Write,
    S: IdentitySource + ?Sized,
{
    let mut printer = ListingPrinter::new(out, cfg, widths);
    let mut printed = 0;

    for entry in entries.iter().filter(|e| cfg.shows(e)) {
        let record = cache.get(entry)?;

        let names = if cfg.detailed {
            Some((ids.owner_name(record.uid)?, ids.group_name(record.gid)?))
        } else {
            None
        };

        printer.print_row(&Row {
            entry,
            record,
            names: names.as_ref().map(|(o, g)| (o.as_str(), g.as_str())),
        })?;
        printed += 1;
    }

    printer.finish()?;
    Ok(printed)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
