use chrono::DateTime;
use sls_fs::{FileKind, MetadataRecord};
use sls_runtime::TIME_FORMAT;

/// 0000-01-01 00:00:00 UTC
const MIN_FOUR_DIGIT_SECS: i64 = -62_167_219_200;
/// 9999-12-31 23:59:59 UTC
const MAX_FOUR_DIGIT_SECS: i64 = 253_402_300_799;

/// `-F` symbol for an entry, or `None` when it gets no suffix.
///
/// File type wins over permissions: an executable directory is still `/`.
pub fn classify(record: &MetadataRecord) -> Option<char> {
    match record.kind {
        FileKind::Directory => Some('/'),
        FileKind::Symlink => Some('@'),
        FileKind::Socket => Some('='),
        FileKind::Fifo => Some('|'),
        _ if record.permissions.any_executable() => Some('*'),
        _ => None,
    }
}

fn type_letter(kind: FileKind) -> char {
    match kind {
        FileKind::BlockDevice => 'b',
        FileKind::CharDevice => 'c',
        FileKind::Directory => 'd',
        FileKind::Symlink => 'l',
        FileKind::Fifo => 'p',
        FileKind::Socket => 's',
        FileKind::Regular => '-',
    }
}

/// Ten-character `drwxr-x---` style string.
pub fn mode_string(record: &MetadataRecord) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_letter(record.kind));

    for (r, w, x) in record.permissions.triples() {
        out.push(if r { 'r' } else { '-' });
        out.push(if w { 'w' } else { '-' });
        out.push(if x { 'x' } else { '-' });
    }

    out
}

/// `YYYY-MM-DD hh:mm` in UTC.
///
/// Timestamps outside the four-digit-year range are clamped to its ends.
pub fn time_string(mtime_secs: i64) -> String {
    let secs = mtime_secs.clamp(MIN_FOUR_DIGIT_SECS, MAX_FOUR_DIGIT_SECS);
    DateTime::from_timestamp(secs, 0)
        .unwrap_or_default()
        .format(TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
