// templates/pages/home.rs

use crate::domain::ProjectsState;
use crate::profile::Profile;
use crate::templates::desktop_layout;
use crate::templates::sections::{
    about_section, certifications_section, contact_section, experience_section, hero_section,
    projects_section, site_footer, skills_section,
};
use maud::{html, Markup};

/// Everything the page needs, handed in explicitly per render.
pub struct HomeVm<'a> {
    pub profile: &'a Profile,
    pub projects: &'a ProjectsState,
    pub profile_url: &'a str,
    pub year: i32,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    let title = format!("{} | {}", vm.profile.name, vm.profile.headline);

    desktop_layout(
        &title,
        &vm.profile.name,
        html! {
            main {
                (hero_section(vm.profile))
                (about_section(vm.profile))
                (skills_section(vm.profile))
                (projects_section(vm.projects, vm.profile_url))
                (experience_section(vm.profile))
                (certifications_section(vm.profile))
                (contact_section(vm.profile))
            }
            (site_footer(vm.profile, vm.year))
        },
    )
}
