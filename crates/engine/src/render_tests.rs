use super::*;

use std::fs::{create_dir, write};

use sls_fs::{FileKind, Permissions};

use crate::test_support::StaticIdentity;

fn record(kind: FileKind, mode: u32, links: u64, size: u64, mtime_secs: i64) -> MetadataRecord {
    MetadataRecord {
        kind,
        permissions: Permissions::from_mode(mode),
        links,
        uid: 1000,
        gid: 1000,
        size,
        mtime_secs,
        inode: 0,
    }
}

fn print_rows(
    cfg: &ListingConfig,
    widths: ColumnWidths,
    rows: &[(Entry, MetadataRecord)],
    names: Option<(&str, &str)>,
) -> String {
    let mut buf = Vec::new();
    let mut printer = ListingPrinter::new(&mut buf, cfg, widths);

    for (entry, record) in rows {
        printer
            .print_row(&Row {
                entry,
                record,
                names,
            })
            .expect("print row");
    }
    printer.finish().expect("finish");

    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn compact_rows_share_a_line_with_two_space_trailers() {
    let cfg = ListingConfig::default();
    let rows = vec![
        (Entry::new("Apple.md", 1), record(FileKind::Regular, 0o644, 1, 100, 0)),
        (Entry::new("banana.txt", 2), record(FileKind::Regular, 0o644, 1, 10, 0)),
    ];

    let out = print_rows(&cfg, ColumnWidths::default(), &rows, None);

    assert_eq!(out, "Apple.md  banana.txt  \n");
}

#[test]
fn compact_with_inode_and_classify() {
    let cfg = ListingConfig {
        show_inode: true,
        classify: true,
        ..ListingConfig::default()
    };
    let rows = vec![
        (Entry::new("run.sh", 9), record(FileKind::Regular, 0o755, 1, 0, 0)),
        (Entry::new("sub", 42), record(FileKind::Directory, 0o755, 2, 0, 0)),
        (Entry::new("notes", 1234), record(FileKind::Regular, 0o644, 1, 0, 0)),
    ];

    // Compact mode never pads inodes, whatever the widths say.
    let widths = ColumnWidths {
        inode: 4,
        ..ColumnWidths::default()
    };
    let out = print_rows(&cfg, widths, &rows, None);

    assert_eq!(out, "9 run.sh*  42 sub/  1234 notes  \n");
}

#[test]
fn detailed_row_layout() {
    let cfg = ListingConfig {
        detailed: true,
        ..ListingConfig::default()
    };
    let widths = ColumnWidths {
        inode: 0,
        links: 2,
        owner: 5,
        group: 5,
        size: 3,
    };
    let rows = vec![
        (Entry::new("banana.txt", 2), record(FileKind::Regular, 0o644, 1, 10, 0)),
        (
            Entry::new("sub", 3),
            record(FileKind::Directory, 0o750, 12, 512, 1_700_000_000),
        ),
    ];

    let out = print_rows(&cfg, widths, &rows, Some(("alice", "staff")));

    assert_eq!(
        out,
        "-rw-r--r-- 1  alice staff  10 1970-01-01 00:00 banana.txt\n\
         drwxr-x--- 12 alice staff 512 2023-11-14 22:13 sub\n"
    );
}

#[test]
fn detailed_pads_inode_and_names_on_the_right() {
    let cfg = ListingConfig {
        detailed: true,
        show_inode: true,
        classify: true,
        ..ListingConfig::default()
    };
    let widths = ColumnWidths {
        inode: 3,
        links: 1,
        owner: 6,
        group: 4,
        size: 1,
    };
    let rows = vec![(Entry::new("sub", 7), record(FileKind::Directory, 0o755, 2, 0, 0))];

    let out = print_rows(&cfg, widths, &rows, Some(("bob", "wh")));

    assert_eq!(out, "7   drwxr-xr-x 2 bob    wh   0 1970-01-01 00:00 sub/\n");
}

#[test]
fn empty_listing_prints_single_newline() {
    for detailed in [false, true] {
        let cfg = ListingConfig {
            detailed,
            ..ListingConfig::default()
        };
        assert_eq!(print_rows(&cfg, ColumnWidths::default(), &[], None), "\n");
    }
}

#[test]
fn unclassified_entries_get_no_suffix() {
    let cfg = ListingConfig {
        classify: true,
        ..ListingConfig::default()
    };
    let rows = vec![(Entry::new("plain", 1), record(FileKind::Regular, 0o644, 1, 0, 0))];

    assert_eq!(print_rows(&cfg, ColumnWidths::default(), &rows, None), "plain  \n");
}

#[test]
fn render_skips_hidden_unless_requested() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write(tmp.path().join(".hidden"), b"h").expect("write");
    write(tmp.path().join("visible"), b"v").expect("write");
    create_dir(tmp.path().join("sub")).expect("mkdir");

    let entries = vec![
        Entry::new(".hidden", 1),
        Entry::new("sub", 2),
        Entry::new("visible", 3),
    ];
    let mut ids = StaticIdentity::empty();

    let hidden_cfg = ListingConfig {
        dir: tmp.path().to_path_buf(),
        classify: true,
        ..ListingConfig::default()
    };
    let mut cache = MetadataCache::new(tmp.path());
    let mut buf = Vec::new();
    let printed = render(
        &mut buf,
        &entries,
        &hidden_cfg,
        ColumnWidths::default(),
        &mut cache,
        &mut ids,
    )
    .expect("render ok");

    assert_eq!(printed, 2);
    assert_eq!(String::from_utf8(buf).expect("utf8"), "sub/  visible  \n");

    let all_cfg = ListingConfig {
        show_hidden: true,
        ..hidden_cfg
    };
    let mut buf = Vec::new();
    let printed = render(
        &mut buf,
        &entries,
        &all_cfg,
        ColumnWidths::default(),
        &mut cache,
        &mut ids,
    )
    .expect("render ok");

    assert_eq!(printed, 3);
    assert_eq!(
        String::from_utf8(buf).expect("utf8"),
        ".hidden  sub/  visible  \n"
    );
}

#[test]
fn render_detailed_requires_identity() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write(tmp.path().join("f"), b"").expect("write");

    let cfg = ListingConfig {
        dir: tmp.path().to_path_buf(),
        detailed: true,
        ..ListingConfig::default()
    };
    let mut cache = MetadataCache::new(tmp.path());
    let mut buf = Vec::new();

    let err = render(
        &mut buf,
        &[Entry::new("f", 1)],
        &cfg,
        ColumnWidths::default(),
        &mut cache,
        &mut StaticIdentity::empty(),
    )
    .expect_err("identity missing");

    assert!(matches!(err, ListingError::Fs(_)));
}

#[test]
fn render_fails_when_entry_vanished() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let cfg = ListingConfig {
        dir: tmp.path().to_path_buf(),
        ..ListingConfig::default()
    };
    let mut cache = MetadataCache::new(tmp.path());
    let mut buf = Vec::new();

    let err = render(
        &mut buf,
        &[Entry::new("gone", 1)],
        &cfg,
        ColumnWidths::default(),
        &mut cache,
        &mut StaticIdentity::empty(),
    )
    .expect_err("metadata missing");

    assert_eq!(
        err.to_string(),
        format!("failed to get stats for: {}", tmp.path().join("gone").display())
    );
}
