use crate::profile::Profile;
use maud::{html, Markup};

pub fn hero_section(profile: &Profile) -> Markup {
    html! {
        section id="home" class="hero" {
            div class="hero-text" {
                p class="eyebrow" { "Hello, I'm" }
                h1 { (profile.name) }
                p class="headline" { (profile.headline) }
                p class="tagline" { (profile.tagline) }

                div class="hero-actions" {
                    @if let Some(resume) = profile.resume_href() {
                        a class="button primary" href=(resume) download { "Download Resume" }
                    }
                    a class="button" href="#contact" { "Get in Touch" }
                }

                ul class="hero-contacts" {
                    @if let Some(email) = &profile.email {
                        li { a href=(format!("mailto:{email}")) { (email) } }
                    }
                    @if let Some(phone) = &profile.phone {
                        li { a href=(format!("tel:{}", phone.replace(' ', ""))) { (phone) } }
                    }
                    @for social in &profile.socials {
                        li { a href=(social.href) target="_blank" rel="noopener noreferrer" { (social.label) } }
                    }
                }
            }

            @if let Some(photo) = profile.photo_href() {
                img class="hero-photo" src=(photo) alt=(profile.name);
            }
        }
    }
}
