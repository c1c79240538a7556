use chrono::NaiveDate;
use grem_core::{
    ensure_app_dir, open_store, resolve_app_dir, AppConfig, AppDirStatus, BootstrapError,
    ReminderRepository, SqliteReminderRepository,
};

#[test]
fn resolve_app_dir_prefers_override() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = resolve_app_dir(&AppConfig::default(), Some(dir.path())).unwrap();
    assert_eq!(resolved, dir.path());
}

#[test]
fn ensure_app_dir_creates_missing_directory_once() {
    let root = tempfile::tempdir().unwrap();
    let app_dir = root.path().join(".grem");

    assert_eq!(ensure_app_dir(&app_dir).unwrap(), AppDirStatus::Created);
    assert!(app_dir.is_dir());
    assert_eq!(ensure_app_dir(&app_dir).unwrap(), AppDirStatus::Existing);
}

#[test]
fn ensure_app_dir_rejects_file_in_the_way() {
    let root = tempfile::tempdir().unwrap();
    let app_dir = root.path().join(".grem");
    std::fs::write(&app_dir, b"not a directory").unwrap();

    let err = ensure_app_dir(&app_dir).unwrap_err();
    assert!(matches!(err, BootstrapError::NotADirectory(path) if path == app_dir));
}

#[cfg(unix)]
#[test]
fn ensure_app_dir_reports_stat_failure_other_than_not_found() {
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("f");
    std::fs::write(&file, b"plain file").unwrap();
    let app_dir = file.join(".grem");

    let err = ensure_app_dir(&app_dir).unwrap_err();
    assert!(matches!(err, BootstrapError::Stat { ref path, .. } if *path == app_dir));
    assert!(file.is_file());
    assert!(!app_dir.exists());
}

#[test]
fn ensure_app_dir_reports_create_failure_for_missing_parent() {
    let root = tempfile::tempdir().unwrap();
    let app_dir = root.path().join("missing-parent").join(".grem");

    let err = ensure_app_dir(&app_dir).unwrap_err();
    assert!(matches!(err, BootstrapError::CreateDir { .. }));
}

#[test]
fn open_store_creates_database_inside_app_dir_and_keeps_rows() {
    let root = tempfile::tempdir().unwrap();
    let config = AppConfig::default();
    let app_dir = root.path().join(".grem");
    ensure_app_dir(&app_dir).unwrap();

    let conn = open_store(&config, &app_dir).unwrap();
    let id = SqliteReminderRepository::new(&conn)
        .insert("Pay rent", NaiveDate::from_ymd_opt(2024, 12, 28).unwrap())
        .unwrap();
    drop(conn);

    assert!(config.db_path(&app_dir).is_file());

    let conn = open_store(&config, &app_dir).unwrap();
    let loaded = SqliteReminderRepository::new(&conn).get(id).unwrap();
    assert_eq!(loaded.title, "Pay rent");
}
