use axum::{extract::State, response::Html};
use tracing::info;

use crate::AppState;

/// Landing page naming the application
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    info!("GET /");

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{name}</title></head>\n<body>\n<h1>{name}</h1>\n<p>The book API lives under <code>/api/books</code>.</p>\n</body>\n</html>\n",
        name = escape_html(&state.app_name)
    ))
}

/// Escapes text for embedding in HTML element content
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_escapes_ampersand_once() {
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }
}
