use sizelog::{Level, Logger};

// The shared logger is process-wide, so everything touching it lives in one test.
#[test]
fn test_shared_instance() {
    let a = Logger::instance() as *const Logger as usize;
    let b = std::thread::spawn(|| sizelog::instance() as *const Logger as usize)
        .join()
        .expect("thread");
    assert_eq!(a, b);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shared.log");

    let logger = sizelog::builder()
        .with_file(&path)
        .with_level(Level::Warn)
        .with_console(false)
        .init()
        .expect("init");
    assert!(std::ptr::eq(logger, Logger::instance()));

    sizelog::info!("dropped").expect("info");
    sizelog::warn!("kept {}", 1).expect("warn");
    sizelog::fatal!("kept {}", 2).expect("fatal");

    let content = std::fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" WARN tests/shared_instance.rs:"));
    assert!(lines[0].ends_with("kept 1"));
    assert!(lines[1].contains(" FATAL tests/shared_instance.rs:"));
    assert!(lines[1].ends_with("kept 2"));

    Logger::instance().close();
    assert!(!sizelog::instance().is_open());
}
