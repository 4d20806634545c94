use crate::profile::Profile;
use maud::{html, Markup};

pub fn site_footer(profile: &Profile, year: i32) -> Markup {
    html! {
        footer class="site-footer" {
            p class="brand" { (profile.name) }
            p { (profile.headline) }
            @if !profile.socials.is_empty() {
                ul class="socials" {
                    @for social in &profile.socials {
                        li { a href=(social.href) target="_blank" rel="noopener noreferrer" { (social.label) } }
                    }
                }
            }
            p class="copyright" { "© " (year) " " (profile.name) ". All rights reserved." }
            a class="back-to-top" href="#home" aria-label="Back to top" { "↑" }
        }
    }
}
