use crate::profile::Profile;
use crate::templates::components::{section_header, tag_list};
use maud::{html, Markup};

pub fn certifications_section(profile: &Profile) -> Markup {
    html! {
        section id="certifications" class="section" {
            (section_header("Certifications", "Courses and credentials I have completed"))

            ul class="cert-categories" {
                @for (category, count) in profile.certification_categories() {
                    li class="cert-category" { (category) " " span class="count" { (count) } }
                }
            }

            div class="cert-grid" {
                @for cert in &profile.certifications {
                    article class="cert-card" {
                        span class="cert-category-label" { (cert.category) }
                        h3 { (cert.title) }
                        p class="cert-issuer" { (cert.issuer) " · " (cert.date) }
                        (tag_list(&cert.skills))
                        @if let Some(href) = cert.href() {
                            div class="cert-actions" {
                                a href=(href) target="_blank" rel="noopener noreferrer" { "View" }
                                a href=(href) download { "Download" }
                            }
                        }
                    }
                }
            }
        }
    }
}
