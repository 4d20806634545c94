use crate::domain::{ContactError, ContactMessage};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, text_response, ResultResp};
use crate::state::AppState;
use crate::templates;
use astra::Request;
use chrono::Datelike;
use std::io::Read;

// Room for a full-length message even when every character is
// percent-encoded multibyte UTF-8.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app),
        ("GET", "/projects") => html_response(templates::sections::projects_body(
            &app.projects.snapshot(),
        )),
        ("GET", "/health") => text_response("ok"),
        ("POST", "/contact") => contact(req),
        ("GET", p) if p.starts_with("/static/") => {
            asset_response(&app.config.static_dir, &p["/static/".len()..])
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &AppState) -> ResultResp {
    let projects = app.projects.snapshot();
    let profile_url = app.profile_url();

    let vm = templates::pages::HomeVm {
        profile: &app.config.profile,
        projects: &projects,
        profile_url: &profile_url,
        year: chrono::Utc::now().year(),
    };

    html_response(templates::pages::home_page(&vm))
}

/// Always answers with the result partial so htmx swaps it in, whether the
/// submission was accepted or not.
fn contact(req: Request) -> ResultResp {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    // A cut-off body must never be parsed as if it were the whole form.
    let outcome = if raw.len() as u64 > MAX_FORM_BYTES {
        Err(ContactError::TooLong)
    } else {
        let pairs: Vec<(String, String)> =
            url::form_urlencoded::parse(&raw).into_owned().collect();
        ContactMessage::from_form(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    };

    match &outcome {
        Ok(msg) => tracing::info!(
            name = %msg.name,
            email = %msg.email,
            subject = %msg.subject,
            message = %msg.message,
            "contact message received"
        ),
        Err(e) => tracing::debug!(error = %e, "contact form rejected"),
    }

    html_response(templates::components::contact_result(&outcome))
}
