mod config;
pub mod logging;

pub use config::{COMPACT_SEPARATOR, DEFAULT_DIR, PROGRAM_LOG_LEVEL, PROGRAM_NAME, TIME_FORMAT};

pub use logging::init;
