//! WAR archive tests against synthetic archives
//!
//! These exercise both the memory-mapped and the owned backends on files
//! written to a temporary directory.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

mod common;

use std::io::Write;
use tempfile::NamedTempFile;
use war2_formats::ErrorKind;
use war2_formats::FormatsConfig;
use war2_formats::war::{WAR_MAGIC, WarArchive, WarError};

fn write_temp(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(data).expect("write archive");
    file.flush().expect("flush archive");
    file
}

/// One entry at offset 20, after 8 filler bytes, holding 6 bytes
fn single_entry_with_gap() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&WAR_MAGIC.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&20u32.to_le_bytes());
    data.extend_from_slice(&[0xee; 8]);
    data.extend_from_slice(b"abcdef");
    data
}

#[test]
fn test_open_mapped_single_entry() {
    let file = write_temp(&single_entry_with_gap());
    let archive = WarArchive::open(file.path()).expect("open archive");

    assert!(archive.is_mapped());
    assert_eq!(archive.path(), Some(file.path()));
    assert_eq!(archive.magic(), WAR_MAGIC);
    assert_eq!(archive.file_id(), 0);
    assert_eq!(archive.entry_count(), 1);
    assert_eq!(archive.file_size(), 26);
    assert_eq!(archive.offsets(), &[Some(20)]);
    assert_eq!(archive.extract(0).expect("extract entry"), b"abcdef");

    archive.close();
}

#[test]
fn test_open_owned_matches_mapped() {
    let data = common::war_archive(
        0x0010,
        &[b"first".to_vec(), b"second entry".to_vec(), vec![0x42; 300]],
    );
    let file = write_temp(&data);

    let mapped = WarArchive::open(file.path()).expect("open mapped");
    let owned = WarArchive::open_with_config(file.path(), FormatsConfig::new().with_mmap(false))
        .expect("open owned");

    assert!(mapped.is_mapped());
    assert!(!owned.is_mapped());
    for index in 0..3 {
        assert_eq!(
            mapped.extract(index).expect("mapped entry"),
            owned.extract(index).expect("owned entry")
        );
    }
    assert_eq!(owned.extract(1).expect("entry 1"), b"second entry");
    assert_eq!(owned.entry_size(2).expect("entry 2"), 300);
}

#[test]
fn test_contiguous_entries_split_at_next_offset() {
    let data = common::war_archive(1, &[b"abc".to_vec(), b"defgh".to_vec()]);
    let archive = WarArchive::from_bytes(data).expect("load archive");

    assert_eq!(archive.path(), None);
    assert_eq!(archive.entry(0).expect("entry 0"), b"abc");
    assert_eq!(archive.entry(1).expect("entry 1"), b"defgh");
}

#[test]
fn test_offset_past_end_is_absent() {
    let mut data = common::war_archive(1, &[b"abc".to_vec(), b"xyz".to_vec()]);
    // point the second entry far past the end of file
    data[12..16].copy_from_slice(&10_000u32.to_le_bytes());
    let archive = WarArchive::from_bytes(data).expect("load archive");

    assert_eq!(archive.offsets()[1], None);
    let err = archive.extract(1).expect_err("absent entry");
    assert!(matches!(err, WarError::EntryAbsent(1)));
    assert_eq!(err.kind(), ErrorKind::Bounds);

    // the first entry now runs to the end of file
    assert_eq!(archive.extract(0).expect("entry 0"), b"abcxyz");
}

#[test]
fn test_index_out_of_range() {
    let archive =
        WarArchive::from_bytes(common::war_archive(1, &[b"abc".to_vec()])).expect("load archive");

    let err = archive.extract(5).expect_err("out of range");
    assert!(matches!(err, WarError::EntryOutOfRange { index: 5, count: 1 }));
    assert!(err.is_bounds_error());
}

#[test]
fn test_bad_magic_rejected() {
    let mut data = single_entry_with_gap();
    data[0] = 0x18;
    let file = write_temp(&data);

    let err = WarArchive::open(file.path()).expect_err("bad magic");
    assert!(matches!(
        err,
        WarError::InvalidMagic {
            expected: WAR_MAGIC,
            actual: 0x18
        }
    ));
    assert!(err.is_format_error());
}

#[test]
fn test_truncated_offset_table() {
    let mut data = Vec::new();
    data.extend_from_slice(&WAR_MAGIC.to_le_bytes());
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&12u32.to_le_bytes());

    let err = WarArchive::from_bytes(data).expect_err("truncated table");
    assert!(matches!(
        err,
        WarError::TruncatedHeader {
            needed: 24,
            size: 12
        }
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = WarArchive::open(dir.path().join("MAINDAT.WAR")).expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::Io);
}
