pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::about_section;
pub use certifications::certifications_section;
pub use contact::contact_section;
pub use experience::experience_section;
pub use footer::site_footer;
pub use hero::hero_section;
pub use projects::{projects_body, projects_section};
pub use skills::skills_section;
