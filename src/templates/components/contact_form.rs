use crate::domain::{ContactError, ContactMessage};
use maud::{html, Markup};

pub fn contact_form() -> Markup {
    html! {
        div class="contact-form-wrapper" {
            form
                method="post"
                action="/contact"
                hx-post="/contact"
                hx-target="#contact-result"
                hx-swap="innerHTML"
                hx-disabled-elt="button"
                class="contact-form"
            {
                label for="contact-name" { "Name" }
                input type="text" id="contact-name" name="name" autocomplete="name" required;

                label for="contact-email" { "Email" }
                input type="email" id="contact-email" name="email" autocomplete="email" required;

                label for="contact-subject" { "Subject" }
                input type="text" id="contact-subject" name="subject" required;

                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" rows="5" required {}

                button type="submit" class="primary" {
                    span class="btn-text" { "Send Message" }
                    span class="spinner" aria-hidden="true" {}
                }
            }

            div id="contact-result" role="status" {}
        }
    }
}

/// Partial swapped into `#contact-result`.
pub fn contact_result(outcome: &Result<ContactMessage, ContactError>) -> Markup {
    html! {
        @match outcome {
            Ok(msg) => div class="notice notice-success" {
                p { "Thanks, " strong { (msg.name) } "! Your message has been sent." }
                p class="microcopy" { "I'll reply to " (msg.email) " as soon as I can." }
            },
            Err(e) => div class="notice notice-error" {
                p { (e.to_string()) }
            },
        }
    }
}
