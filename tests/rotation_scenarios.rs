use std::path::Path;

use sizelog::{Error, Level, LogBuilder, Logger};
use time::PrimitiveDateTime;
use time::macros::format_description;

fn is_rotation_suffix(s: &str) -> bool {
    PrimitiveDateTime::parse(
        s,
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]"),
    )
    .is_ok()
}

fn rotated_files(dir: &Path, base: &str) -> Vec<String> {
    let prefix = format!("{}.", base);
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with(&prefix))
        .collect();
    names.sort();
    names
}

#[test]
fn test_info_threshold_scenario() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.log");

    let logger = Logger::new();
    LogBuilder::new()
        .with_file(&path)
        .with_level(Level::Info)
        .with_max_bytes(50)
        .with_console(false)
        .apply(&logger)
        .expect("configure");

    logger
        .log(Level::Debug, "m", 1, format_args!("x"))
        .expect("debug");
    assert_eq!(logger.written_bytes(), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    // Each record is 33 bytes: "<ts> INFO m:1" (28) + "hello" (5).
    logger
        .log(Level::Info, "m", 1, format_args!("hello"))
        .expect("first info");
    assert_eq!(logger.written_bytes(), 33);
    assert!(rotated_files(dir.path(), "test.log").is_empty());

    logger
        .log(Level::Info, "m", 1, format_args!("hello"))
        .expect("second info");
    assert_eq!(logger.written_bytes(), 0);

    let rotated = rotated_files(dir.path(), "test.log");
    assert_eq!(rotated.len(), 1);
    assert!(is_rotation_suffix(&rotated[0]["test.log.".len()..]));
    let old = std::fs::read_to_string(dir.path().join(&rotated[0])).unwrap();
    assert_eq!(old.lines().count(), 2);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_macro_records_grow_until_rotation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let logger = Logger::new();
    logger.set_console(false);
    logger.set_level(Level::Info);
    logger.open(&path).expect("open");

    sizelog::debug!(logger: &logger, "x").expect("debug");
    assert_eq!(logger.written_bytes(), 0);

    sizelog::info!(logger: &logger, "hello").expect("info");
    let record_len = logger.written_bytes();
    assert!(record_len > 0);
    logger.set_max_bytes(record_len * 5);

    let mut previous = record_len;
    for _ in 0..3 {
        sizelog::info!(logger: &logger, "hello").expect("info");
        assert!(logger.written_bytes() > previous);
        previous = logger.written_bytes();
    }
    assert!(rotated_files(dir.path(), "app.log").is_empty());

    // The fifth record reaches the threshold.
    sizelog::info!(logger: &logger, "hello").expect("info");
    assert_eq!(logger.written_bytes(), 0);

    let rotated = rotated_files(dir.path(), "app.log");
    assert_eq!(rotated.len(), 1);
    let old = std::fs::read_to_string(dir.path().join(&rotated[0])).unwrap();
    assert_eq!(old.lines().count(), 5);
    assert!(old.lines().all(|l| l.ends_with("hello")));
}

#[test]
fn test_reopen_keeps_content_and_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let first = Logger::new();
    first.set_console(false);
    first.open(&path).expect("open");
    sizelog::warn!(logger: &first, "before restart").expect("warn");
    first.close();
    let size = std::fs::metadata(&path).unwrap().len();

    let second = Logger::new();
    second.set_console(false);
    second.open(&path).expect("reopen");
    assert_eq!(second.written_bytes(), size);

    sizelog::error!(logger: &second, "after restart").expect("error");
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("before restart\n"));
    assert!(content.ends_with("after restart\n"));
}

#[test]
fn test_open_unwritable_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let logger = Logger::new();

    let err = logger
        .open(dir.path().join("forbidden/app.log"))
        .expect_err("open should fail");
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.to_string().contains("forbidden"));

    let err = sizelog::fatal!(logger: &logger, "unreachable").expect_err("not open");
    assert!(matches!(err, Error::NotOpen));
}
