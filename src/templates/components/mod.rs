use maud::{html, Markup};

pub mod contact_form;
pub mod error;
pub mod project_card;

pub use contact_form::{contact_form, contact_result};
pub use error::error_page;
pub use project_card::project_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-header" {
            h2 { (title) }
            p class="lead" { (subtitle) }
        }
    }
}

pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="tags" {
                @for tag in tags {
                    li class="tag" { (tag) }
                }
            }
        }
    }
}
