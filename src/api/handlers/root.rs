use crate::session::CookieJar;
use crate::shell::RootLayout;
use axum::response::Html;

/// Mount point the client bundle renders into.
const APP_ROOT: &str = r#"<div id="app"></div>"#;

// axum handler for the page shell
pub async fn root(jar: CookieJar) -> Html<String> {
    Html(RootLayout::for_request(&jar).render(APP_ROOT))
}
