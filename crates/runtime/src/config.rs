pub const PROGRAM_NAME: &str = "sls";
pub const PROGRAM_LOG_LEVEL: &str = "SLS_LOG_LEVEL";

/// Directory listed when no positional argument is given.
pub const DEFAULT_DIR: &str = ".";

/// Trailer written after every entry of a compact listing, the last one included.
pub const COMPACT_SEPARATOR: &str = "  ";

/// Modification time layout of the detailed listing, always rendered in UTC.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
