use std::{collections::TryReserveError, io};

use sls_fs::FsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("unable to allocate memory")]
    AllocationFailure(#[from] TryReserveError),

    /// Writing the listing failed, e.g. stdout was closed.
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}
