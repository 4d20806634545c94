use crate::profile::Profile;
use crate::templates::components::{contact_form, section_header};
use maud::{html, Markup};

pub fn contact_section(profile: &Profile) -> Markup {
    html! {
        section id="contact" class="section" {
            (section_header("Get In Touch", "Have a project in mind or just want to say hello? Drop me a message."))

            div class="contact-grid" {
                div class="contact-info" {
                    ul {
                        @if let Some(email) = &profile.email {
                            li { span class="label" { "Email" } a href=(format!("mailto:{email}")) { (email) } }
                        }
                        @if let Some(phone) = &profile.phone {
                            li { span class="label" { "Phone" } a href=(format!("tel:{}", phone.replace(' ', ""))) { (phone) } }
                        }
                        @if let Some(location) = &profile.location {
                            li { span class="label" { "Location" } span { (location) } }
                        }
                    }
                    @if !profile.socials.is_empty() {
                        ul class="socials" {
                            @for social in &profile.socials {
                                li { a href=(social.href) target="_blank" rel="noopener noreferrer" { (social.label) } }
                            }
                        }
                    }
                }

                (contact_form())
            }
        }
    }
}
