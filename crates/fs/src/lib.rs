mod error;
mod identity;
mod record;
mod resolve;
mod scan;

pub use error::{FsError, IdentityKind};
pub use identity::{IdentitySource, SystemIdentity};
pub use record::{Entry, FileKind, MetadataRecord, Permissions};
pub use resolve::resolve;
pub use scan::scan_dir;
