use crate::profile::Profile;
use crate::templates::components::{section_header, tag_list};
use maud::{html, Markup};

pub fn experience_section(profile: &Profile) -> Markup {
    html! {
        section id="experience" class="section" {
            (section_header("Experience & Education", "My professional journey and academic background"))

            ol class="timeline" {
                @for exp in &profile.experience {
                    li class="timeline-entry" {
                        span class="timeline-kind" { (exp.kind) }
                        h3 { (exp.title) }
                        p class="timeline-org" {
                            (exp.organization)
                            @if let Some(location) = &exp.location {
                                " · " (location)
                            }
                        }
                        p class="timeline-period" { (exp.period) }
                        @if !exp.description.is_empty() {
                            p { (exp.description) }
                        }
                        (tag_list(&exp.skills))
                    }
                }
            }

            @if !profile.achievements.is_empty() {
                h3 class="subheading" { "Key Achievements" }
                div class="achievements" {
                    @for ach in &profile.achievements {
                        div class="achievement" {
                            span class="achievement-year" { (ach.year) }
                            h4 { (ach.title) }
                            p { (ach.description) }
                        }
                    }
                }
            }
        }
    }
}
