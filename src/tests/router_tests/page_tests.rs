use crate::errors::ServerError;
use crate::listings::ListingError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, get, repo, request, settled_app, StubSource};
use astra::Body;
use http::Method;
use scraper::{Html, Selector};

#[test]
fn home_page_renders_every_section() {
    let app = settled_app(StubSource::ok(vec![repo(1, "foo-bar", false)]));

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));

    let doc = Html::parse_document(&body);
    for id in ["home", "about", "skills", "projects", "experience", "certifications", "contact"] {
        let sel = Selector::parse(&format!("section#{id}")).unwrap();
        assert_eq!(doc.select(&sel).count(), 1, "missing section #{id}");
    }

    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("Foo Bar"));
}

#[test]
fn home_page_links_certificates_under_static() {
    let app = settled_app(StubSource::ok(vec![]));
    let body = body_string(get(&app, "/"));
    assert!(body.contains(r#"href="/static/certificates/CSS%20Basics.pdf""#));
}

#[test]
fn home_page_shows_loading_indicator_before_settling() {
    let (source, release) = StubSource::ok(vec![]).gated();
    let app = app_with(source);
    app.projects.mount();

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Loading projects from GitHub..."));
    assert!(body.contains(r#"hx-trigger="every 1s""#));

    drop(release);
    app.projects.join();
}

#[test]
fn home_page_is_usable_on_fallback() {
    let app = settled_app(StubSource::err(ListingError::Unavailable("HTTP 403".into())));

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("GitHub API unavailable"));
    assert!(body.contains("Get In Touch"));
}

#[test]
fn health_check() {
    let app = settled_app(StubSource::ok(vec![]));
    assert_eq!(body_string(get(&app, "/health")), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let app = settled_app(StubSource::ok(vec![]));

    let err = handle(request(Method::GET, "/nope", Body::empty()), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn wrong_method_is_not_found() {
    let app = settled_app(StubSource::ok(vec![]));
    let err = handle(request(Method::POST, "/", Body::empty()), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn internal_errors_hide_details() {
    let resp = error_to_response(ServerError::Asset("/secret/path: permission denied".into()));
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Internal Server Error"));
    assert!(!body.contains("/secret/path"));
}
