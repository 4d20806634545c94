use crate::router::handle;
use crate::tests::utils::{body_string, request, settled_app, StubSource};
use astra::Body;
use http::Method;

fn post_contact(form: &str) -> String {
    let app = settled_app(StubSource::ok(vec![]));
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/contact")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();

    let resp = handle(req, &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn valid_message_returns_success_partial() {
    let body = post_contact("name=Grace+Hopper&email=Grace%40Example.com&subject=Hello&message=Hi+there");

    assert!(body.contains("Thanks, <strong>Grace Hopper</strong>"));
    assert!(body.contains("grace@example.com"));

    // Partial only, so htmx can swap it in.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn invalid_email_returns_error_partial() {
    let body = post_contact("name=Grace&email=not-an-email&subject=Hello&message=Hi");
    assert!(body.contains("notice-error"));
    assert!(body.contains("Please enter a valid email address."));
}

#[test]
fn missing_field_is_named() {
    let body = post_contact("name=Grace&email=g%40example.com&message=Hi");
    assert!(body.contains("Please fill in the subject field."));
}

#[test]
fn submitted_text_is_escaped() {
    let body = post_contact("name=%3Cscript%3E&email=g%40example.com&subject=s&message=m");
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[test]
fn oversized_form_is_rejected_not_truncated() {
    let form = format!(
        "name=Grace&email=g%40example.com&subject=s&message={}",
        "%C3%A9".repeat(20_000)
    );
    let body = post_contact(&form);

    assert!(body.contains("notice-error"));
    assert!(body.contains("Messages are limited to 5000 characters."));
    assert!(!body.contains("Thanks"));
}

#[test]
fn multibyte_message_under_the_limit_is_accepted() {
    // 3000 characters, 18000 bytes once percent-encoded.
    let form = format!(
        "name=Grace&email=g%40example.com&subject=s&message={}",
        "%C3%A9".repeat(3_000)
    );
    let body = post_contact(&form);
    assert!(body.contains("Thanks, <strong>Grace</strong>"));
}

#[test]
fn character_limit_applies_to_the_whole_message() {
    let form = |chars: usize| {
        format!(
            "name=Grace&email=g%40example.com&subject=s&message={}",
            "%C3%A9".repeat(chars)
        )
    };

    assert!(post_contact(&form(5_000)).contains("Thanks"));
    assert!(post_contact(&form(5_001)).contains("Messages are limited to 5000 characters."));
}

#[test]
fn get_contact_is_not_routed() {
    let app = settled_app(StubSource::ok(vec![]));
    assert!(handle(request(Method::GET, "/contact", Body::empty()), &app).is_err());
}
