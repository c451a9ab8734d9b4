use axum::response::Html;

/// The browser UI, compiled into the binary. No server-side templating; the
/// page drives the API entirely from client-side script.
const INDEX_HTML: &str = include_str!("index.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
#[path = "index_page_tests.rs"]
mod index_page_tests;
