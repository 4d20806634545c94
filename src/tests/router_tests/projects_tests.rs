use crate::listings::ListingError;
use crate::tests::utils::{app_with, body_string, get, repo, settled_app, StubSource};
use scraper::{Html, Selector};

fn select_count(html: &Html, selector: &str) -> usize {
    html.select(&Selector::parse(selector).unwrap()).count()
}

fn select_texts(html: &Html, selector: &str) -> Vec<String> {
    html.select(&Selector::parse(selector).unwrap())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn loading_fragment_polls_itself() {
    let (source, release) = StubSource::ok(vec![]).gated();
    let app = app_with(source);
    app.projects.mount();

    let body = body_string(get(&app, "/projects"));
    assert!(!body.contains("<html"));
    assert!(body.contains(r#"hx-get="/projects""#));
    assert!(body.contains(r#"hx-trigger="every 1s""#));
    assert!(body.contains(r#"hx-swap="outerHTML""#));

    release.send(()).unwrap();
    app.projects.join();

    let settled = body_string(get(&app, "/projects"));
    assert!(!settled.contains("hx-trigger"));
}

#[test]
fn loaded_fragment_renders_cards() {
    let mut tagged = repo(2, "tag-heavy", false);
    tagged.topics = Some(vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect());
    tagged.homepage = Some("https://demo.example".to_string());
    tagged.language = Some("COBOL".to_string());

    let app = settled_app(StubSource::ok(vec![
        repo(1, "foo-bar", false),
        tagged,
        repo(3, "forked-thing", true),
    ]));

    let body = body_string(get(&app, "/projects"));
    let html = Html::parse_fragment(&body);

    assert_eq!(select_count(&html, "article.project-card"), 2);
    assert_eq!(select_texts(&html, ".project-name"), vec!["Foo Bar", "Tag Heavy"]);
    assert_eq!(select_texts(&html, ".projects-count .count"), vec!["2"]);
    assert_eq!(select_count(&html, ".notice-warning"), 0);

    let card = r#"article.project-card[data-project-id="2"]"#;
    assert_eq!(select_count(&html, &format!("{card} li.tag")), 4);
    assert_eq!(select_texts(&html, &format!("{card} li.tag-more")), vec!["+2"]);
    assert_eq!(select_count(&html, &format!(r#"{card} a[href="https://demo.example"]"#)), 1);
    assert!(body.contains("background-color: #6b7280"));
    assert_eq!(select_texts(&html, &format!("{card} time")), vec!["Jan 5, 2024"]);
}

#[test]
fn failed_fragment_shows_notice_and_fallback_cards() {
    let app = settled_app(StubSource::err(ListingError::Unavailable(
        "connection refused".into(),
    )));

    let body = body_string(get(&app, "/projects"));
    let html = Html::parse_fragment(&body);

    assert_eq!(select_count(&html, ".notice-warning"), 1);
    assert_eq!(select_count(&html, "article.project-card"), 3);
    assert_eq!(
        select_texts(&html, ".project-name"),
        vec![
            "Modern Portfolio Website",
            "AI Chat Application",
            "E Commerce Dashboard"
        ]
    );
    // The failure reason is for the log, not the visitor.
    assert!(!body.contains("connection refused"));
}

#[test]
fn empty_listing_renders_empty_grid() {
    let app = settled_app(StubSource::ok(vec![]));

    let body = body_string(get(&app, "/projects"));
    let html = Html::parse_fragment(&body);

    assert_eq!(select_count(&html, "div.project-grid"), 1);
    assert_eq!(select_count(&html, "article.project-card"), 0);
    assert_eq!(select_texts(&html, ".projects-count .count"), vec!["0"]);
}
