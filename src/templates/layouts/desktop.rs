use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Certifications", "#certifications"),
    ("Contact", "#contact"),
];

pub fn desktop_layout(title: &str, brand: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(title);
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a class="brand" href="#home" { (brand) }
                    // Menu toggle is a checkbox so it needs no script state.
                    input type="checkbox" id="nav-toggle" class="nav-toggle" aria-label="Toggle navigation";
                    label for="nav-toggle" class="nav-toggle-label" { span {} }
                    nav {
                        ul {
                            @for (label, href) in NAV {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
