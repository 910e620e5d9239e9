pub mod list;

use std::ffi::OsString;

use clap::{
    Parser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use sls_runtime::PROGRAM_NAME;
use thiserror::Error;

pub use list::ListArgs;

#[derive(Debug, Error)]
pub enum CliError {
    /// A flag character outside `aFilStX`.
    #[error("illegal option {0}")]
    InvalidOption(char),

    /// Any other rejection from the argument parser, already rendered.
    #[error("{0}")]
    Usage(String),
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        if err.kind() == ErrorKind::UnknownArgument
            && let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg)
            && arg.starts_with('-')
        {
            return CliError::InvalidOption(offending_flag(arg));
        }
        CliError::Usage(err.render().to_string().trim_end().to_owned())
    }
}

/// The flag character to blame for an unknown argument like `-z`.
///
/// A long option is blamed on its second dash, as a short-flag parser would.
fn offending_flag(arg: &str) -> char {
    arg.chars().nth(1).unwrap_or('-')
}

/// Parse the process arguments (program name first).
pub fn parse<I, T>(args: I) -> Result<ListArgs, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = ListArgs::try_parse_from(args)?;
    log::debug!("[{PROGRAM_NAME}] {args:?}");
    Ok(args)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
