use crate::domain::{project_all, ProjectsState};
use crate::templates::components::{project_card, section_header};
use maud::{html, Markup};

/// How often the loading fragment asks for `/projects` again.
pub const POLL_TRIGGER: &str = "every 1s";

pub fn projects_section(state: &ProjectsState, profile_url: &str) -> Markup {
    html! {
        section id="projects" class="section" {
            (section_header(
                "Featured Projects",
                "A showcase of my recent work and contributions to innovative solutions",
            ))

            (projects_body(state))

            div class="section-cta" {
                a class="button" href=(profile_url) target="_blank" rel="noopener noreferrer" {
                    "View All Projects on GitHub"
                }
            }
        }
    }
}

/// The swappable part of the section. While loading it polls itself; once
/// the coordinator has settled, the returned markup has no trigger and the
/// polling stops.
pub fn projects_body(state: &ProjectsState) -> Markup {
    if state.is_loading() {
        return html! {
            div id="projects-body" class="projects-loading"
                hx-get="/projects" hx-trigger=(POLL_TRIGGER) hx-swap="outerHTML"
            {
                span class="spinner" aria-hidden="true" {}
                span { "Loading projects from GitHub..." }
            }
        };
    }

    let views = project_all(state.items());

    html! {
        div id="projects-body" {
            @if state.fallback_notice() {
                div class="notice notice-warning" role="status" {
                    "Showing featured projects (GitHub API unavailable)"
                }
            }

            p class="projects-count" {
                "Showing " span class="count" { (views.len()) } " repositories from GitHub"
            }

            div class="project-grid" {
                @for view in &views {
                    (project_card(view))
                }
            }
        }
    }
}
