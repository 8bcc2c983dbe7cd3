//! Landing page

use axum::response::Html;

/// GET /
///
/// The upload page is embedded at compile time so the server works no matter
/// where it is launched from; `/static` assets are served from disk.
pub async fn landing() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
