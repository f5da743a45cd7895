//! Cookie store persistence across kiosk restarts.

use std::fs;

use tracing_subscriber::EnvFilter;
use whiteboard_kiosk_shell::setup::{prepare_cookie_store, CookieStoreState};
use whiteboard_kiosk_shell::{Config, EngineProfile, ShellError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[test]
fn first_run_creates_directory_and_empty_store() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whiteboard-app").join("cookies.txt");

    let state = prepare_cookie_store(&path).unwrap();

    assert_eq!(state, CookieStoreState::Created);
    assert!(path.parent().unwrap().is_dir());
    assert_eq!(fs::read(&path).unwrap().len(), 0);
}

#[test]
fn restart_reuses_store_without_touching_it() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whiteboard-app").join("cookies.txt");
    prepare_cookie_store(&path).unwrap();

    // What the engine writes during a signed-in session.
    let session = "#HttpOnly_.whiteboard.test\tTRUE\t/\tTRUE\t1999999999\tsid\tabc123\n";
    fs::write(&path, session).unwrap();

    let state = prepare_cookie_store(&path).unwrap();

    assert_eq!(state, CookieStoreState::Reused);
    assert_eq!(fs::read_to_string(&path).unwrap(), session);
}

#[test]
fn directory_in_place_of_store_is_rejected() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cookies.txt");
    fs::create_dir(&path).unwrap();

    let err = prepare_cookie_store(&path).unwrap_err();
    assert!(matches!(err, ShellError::CookieStore { .. }));
    assert!(err.to_string().contains("cookies.txt"));
}

#[test]
fn profile_points_engine_at_configured_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store").join("cookies.txt");
    let mut config = Config::default();
    config.cookies.path = Some(path.clone());

    let profile = EngineProfile::kiosk(&config);
    assert_eq!(profile.cookie_store, path);
    assert_eq!(
        prepare_cookie_store(&profile.cookie_store).unwrap(),
        CookieStoreState::Created
    );
}

#[cfg(not(feature = "gtk"))]
#[test]
fn launch_without_engine_still_prepares_store() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cookies.txt");
    let mut config = Config::default();
    config.cookies.path = Some(path.clone());

    let err = whiteboard_kiosk_shell::launch(&config).unwrap_err();
    assert!(matches!(err, ShellError::EngineUnavailable(_)));
    assert!(path.is_file());
}
