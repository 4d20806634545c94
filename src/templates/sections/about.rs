use crate::profile::Profile;
use crate::templates::components::section_header;
use maud::{html, Markup};

pub fn about_section(profile: &Profile) -> Markup {
    html! {
        section id="about" class="section" {
            (section_header("About Me", &profile.headline))
            div class="about-body" {
                @for paragraph in &profile.about {
                    p { (paragraph) }
                }
                @if let Some(location) = &profile.location {
                    p class="about-location" { "Based in " (location) }
                }
            }
        }
    }
}
