use crate::profile::Profile;
use crate::templates::components::{card, section_header};
use maud::{html, Markup};

pub fn skills_section(profile: &Profile) -> Markup {
    html! {
        section id="skills" class="section" {
            (section_header("Skills & Expertise", "Technologies and tools I work with"))
            div class="skills-grid" {
                @for group in &profile.skills {
                    (card(&group.title, html! {
                        ul class="skill-list" {
                            @for skill in &group.skills {
                                @let level = skill.level.min(100);
                                li class="skill" {
                                    div class="skill-label" {
                                        span { (skill.name) }
                                        span class="skill-level" { (level) "%" }
                                    }
                                    div class="skill-bar" role="progressbar"
                                        aria-valuenow=(level) aria-valuemin="0" aria-valuemax="100"
                                    {
                                        div class="skill-fill" style=(format!("width: {level}%")) {}
                                    }
                                }
                            }
                        }
                    }))
                }
            }
        }
    }
}
