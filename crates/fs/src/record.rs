use std::{
    ffi::OsString,
    fs::{FileType, Metadata},
    os::unix::fs::{FileTypeExt, MetadataExt},
};

use bitflags::bitflags;

/// One directory member as produced by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// File name as stored on disk; used for every filesystem lookup
    pub name_os: OsString,
    /// Lossy UTF-8 rendering of `name_os`, used for ordering and output
    pub name: String,
    /// Inode number reported by the directory entry itself
    pub inode: u64,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, inode: u64) -> Self {
        let name_os = name.into();
        let name = name_os.to_string_lossy().into_owned();
        Self {
            name_os,
            name,
            inode,
        }
    }

    /// Dotfiles are hidden unless `-a` is given.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Substring after the last `.`, or empty when the name has none.
    ///
    /// Unlike `Path::extension`, a leading dot counts: `.hidden` yields `hidden`.
    pub fn extension(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
}

impl FileKind {
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else if ft.is_socket() {
            FileKind::Socket
        } else {
            FileKind::Regular
        }
    }
}

bitflags! {
    /// The nine `rwx` permission bits, laid out as in `st_mode`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u16 {
        const USER_READ   = 0o400;
        const USER_WRITE  = 0o200;
        const USER_EXEC   = 0o100;
        const GROUP_READ  = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC  = 0o010;
        const OTHER_READ  = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC  = 0o001;
    }
}

impl Permissions {
    /// Keep only the permission triples; type, setuid, setgid and sticky bits are dropped.
    pub fn from_mode(mode: u32) -> Self {
        Self::from_bits_truncate((mode & 0o777) as u16)
    }

    #[inline]
    pub fn any_executable(self) -> bool {
        self.intersects(Self::USER_EXEC | Self::GROUP_EXEC | Self::OTHER_EXEC)
    }

    /// Triples in display order: user, group, other.
    pub fn triples(self) -> [(bool, bool, bool); 3] {
        [
            (
                self.contains(Self::USER_READ),
                self.contains(Self::USER_WRITE),
                self.contains(Self::USER_EXEC),
            ),
            (
                self.contains(Self::GROUP_READ),
                self.contains(Self::GROUP_WRITE),
                self.contains(Self::GROUP_EXEC),
            ),
            (
                self.contains(Self::OTHER_READ),
                self.contains(Self::OTHER_WRITE),
                self.contains(Self::OTHER_EXEC),
            ),
        ]
    }
}

/// Normalised stat record of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub kind: FileKind,
    pub permissions: Permissions,
    pub links: u64,
    pub uid: u32,
    pub gid: u32,
    /// Size in bytes
    pub size: u64,
    /// Last modification, whole seconds since the Unix epoch
    pub mtime_secs: i64,
    /// Inode of the queried file (for a followed link, the target's)
    pub inode: u64,
}

impl From<&Metadata> for MetadataRecord {
    fn from(md: &Metadata) -> Self {
        Self {
            kind: FileKind::from_file_type(md.file_type()),
            permissions: Permissions::from_mode(md.mode()),
            links: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.size(),
            mtime_secs: md.mtime(),
            inode: md.ino(),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
