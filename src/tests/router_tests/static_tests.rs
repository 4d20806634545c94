use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, request, test_config, StubSource};
use astra::Body;
use http::Method;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn app_with_assets() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("certificates")).unwrap();
    fs::write(dir.path().join("main.css"), "body { color: red; }").unwrap();
    fs::write(dir.path().join("certificates").join("CSS Basics.pdf"), b"%PDF-1.4").unwrap();

    let mut cfg = test_config();
    cfg.static_dir = dir.path().to_path_buf();

    let app = AppState::new(cfg, Arc::new(StubSource::ok(vec![])));
    (app, dir)
}

fn get(app: &AppState, uri: &str) -> Result<astra::Response, ServerError> {
    handle(request(Method::GET, uri, Body::empty()), app)
}

#[test]
fn serves_stylesheet_with_content_type() {
    let (app, _dir) = app_with_assets();

    let resp = get(&app, "/static/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert_eq!(body_string(resp), "body { color: red; }");
}

#[test]
fn serves_certificate_with_encoded_name() {
    let (app, _dir) = app_with_assets();

    let resp = get(&app, "/static/certificates/CSS%20Basics.pdf").unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/pdf"
    );
}

#[test]
fn missing_file_is_not_found() {
    let (app, _dir) = app_with_assets();
    assert!(matches!(
        get(&app, "/static/resume.pdf"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn directories_are_not_served() {
    let (app, _dir) = app_with_assets();
    assert!(matches!(
        get(&app, "/static/certificates"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn traversal_is_not_found() {
    let (app, _dir) = app_with_assets();
    assert!(matches!(
        get(&app, "/static/%2e%2e/Cargo.toml"),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        get(&app, "/static/certificates/%2E%2E/%2E%2E/etc/passwd"),
        Err(ServerError::NotFound)
    ));
}
