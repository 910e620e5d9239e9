use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures of the filesystem and identity lookups. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("unable to open '{}'", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither the link-following nor the link-preserving query succeeded.
    #[error("failed to get stats for: {}", .path.display())]
    MetadataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not get {kind} of file ({} {id})", .kind.id_label())]
    IdentityUnavailable { kind: IdentityKind, id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    User,
    Group,
}

impl IdentityKind {
    fn id_label(self) -> &'static str {
        match self {
            IdentityKind::User => "uid",
            IdentityKind::Group => "gid",
        }
    }
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityKind::User => f.write_str("user"),
            IdentityKind::Group => f.write_str("group"),
        }
    }
}
