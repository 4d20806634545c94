// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::{Path, PathBuf};

/// Serve a file below `static_dir`. `rel` is the still-encoded request
/// path after the `/static/` prefix.
pub fn asset_response(static_dir: &Path, rel: &str) -> ResultResp {
    let path = resolve_asset(static_dir, rel).ok_or(ServerError::NotFound)?;

    if !path.is_file() {
        return Err(ServerError::NotFound);
    }

    let bytes =
        fs::read(&path).map_err(|e| ServerError::Asset(format!("{}: {e}", path.display())))?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type_for(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

/// Joins the decoded segments onto `static_dir`. Anything that could step
/// outside it (`..`, `.`, empty segments, backslashes) is refused.
fn resolve_asset(static_dir: &Path, rel: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(rel).ok()?;

    let mut path = static_dir.to_path_buf();
    for seg in decoded.split('/') {
        if seg.is_empty() || seg == "." || seg == ".." || seg.contains('\\') || seg.contains('\0') {
            return None;
        }
        path.push(seg);
    }

    Some(path)
}

fn content_type_for(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => mime::TEXT_HTML_UTF_8,
        "css" => mime::TEXT_CSS_UTF_8,
        "js" => mime::APPLICATION_JAVASCRIPT_UTF_8,
        "json" => mime::APPLICATION_JSON,
        "txt" => mime::TEXT_PLAIN_UTF_8,
        "svg" => mime::IMAGE_SVG,
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "pdf" => mime::APPLICATION_PDF,
        "woff" => mime::FONT_WOFF,
        "woff2" => mime::FONT_WOFF2,
        "ico" => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
