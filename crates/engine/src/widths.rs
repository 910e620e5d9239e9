use sls_fs::{Entry, IdentitySource};

use crate::{ListingError, MetadataCache};

/// Number of characters `value` takes in decimal, counting a leading `-`.
pub fn digit_width(value: impl Into<i128>) -> usize {
    let value = value.into();
    let sign = usize::from(value < 0);

    let mut rest = value.unsigned_abs();
    let mut digits = 1;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }

    digits + sign
}

/// Widest rendering of each variable-width column of the detailed listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub inode: usize,
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
}

impl ColumnWidths {
    fn widen(&mut self, other: ColumnWidths) {
        self.inode = self.inode.max(other.inode);
        self.links = self.links.max(other.links);
        self.owner = self.owner.max(other.owner);
        self.group = self.group.max(other.group);
        self.size = self.size.max(other.size);
    }
}

/// Column widths over exactly the entries that will be printed.
///
/// All zero for an empty set.
pub fn compute_widths<'a, I, S>(
    entries: I,
    cache: &mut MetadataCache,
    ids: &mut S,
) -> Result<ColumnWidths, ListingError>
where
    I: IntoIterator<Item = &'a Entry>,
    S: IdentitySource + ?Sized,
{
    let mut widths = ColumnWidths::default();

    for entry in entries {
        let md = cache.get(entry)?;
        let (links, size, uid, gid) = (md.links, md.size, md.uid, md.gid);

        widths.widen(ColumnWidths {
            inode: digit_width(entry.inode),
            links: digit_width(links),
            owner: ids.owner_name(uid)?.chars().count(),
            group: ids.group_name(gid)?.chars().count(),
            size: digit_width(size),
        });
    }

    Ok(widths)
}

#[cfg(test)]
#[path = "widths_tests.rs"]
mod tests;
