mod cache;
mod config;
mod error;
mod format;
mod pipeline;
mod render;
mod sort;
mod widths;

#[cfg(test)]
mod test_support;

pub use cache::MetadataCache;
pub use config::ListingConfig;
pub use error::ListingError;
pub use format::{classify, mode_string, time_string};
pub use pipeline::{ListingSummary, run_listing};
pub use render::{ListingPrinter, Row, render};
pub use sort::{SortKey, SortMode, sort_entries};
pub use widths::{ColumnWidths, compute_widths, digit_width};
