use crate::domain::ViewItem;
use maud::{html, Markup};

pub fn project_card(view: &ViewItem) -> Markup {
    let item = view.item;

    html! {
        article class="project-card" data-project-id=(item.id) {
            div class="project-head" {
                h3 class="project-name" { (view.display_name) }
                div class="project-links" {
                    a href=(item.html_url) target="_blank" rel="noopener noreferrer" aria-label="View source" {
                        "Source"
                    }
                    @if let Some(live) = view.live_url() {
                        a href=(live) target="_blank" rel="noopener noreferrer" aria-label="View live demo" {
                            "Live"
                        }
                    }
                }
            }

            @if let Some(desc) = &item.description {
                p class="project-description" { (desc) }
            }

            div class="project-stats" {
                @if let Some(lang) = &item.language {
                    span class="project-language" {
                        span class="language-dot" style=(format!("background-color: {}", view.color)) {}
                        (lang)
                    }
                }
                span class="project-stars" title="Stars" { "★ " (item.stargazers_count) }
                @if item.forks_count > 0 {
                    span class="project-forks" title="Forks" { "⑂ " (item.forks_count) }
                }
                time class="project-updated" datetime=(item.updated_at) { (view.updated_label) }
            }

            @if !view.topics.shown.is_empty() {
                ul class="tags" {
                    @for topic in view.topics.shown {
                        li class="tag" { (topic) }
                    }
                    @if let Some(more) = view.topics.remainder_label() {
                        li class="tag tag-more" { (more) }
                    }
                }
            }
        }
    }
}
