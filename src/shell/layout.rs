use super::{
    metadata::{DocumentMetadata, SITE_METADATA},
    theme::{SITE_THEME, ThemeMode, ThemeProvider},
};
use crate::session::{Claims, identity};
use axum_extra::extract::CookieJar;
use std::fmt::Write;

pub const USER_CONTEXT_ID: &str = "current-user";

/// The signed-in user's decoded claims, exposed to page scripts as a JSON
/// data island. `null` when signed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserContext {
    claims: Option<Claims>,
}

impl UserContext {
    #[must_use]
    pub fn new(claims: Option<Claims>) -> Self {
        Self { claims }
    }

    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self::new(identity::current_claims(jar))
    }

    #[must_use]
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// JSON safe to embed inside `<script>`: `<` is escaped so claim values
    /// cannot close the element.
    fn data_island(&self) -> String {
        serde_json::to_string(&self.claims)
            .map_or_else(|_| "null".to_string(), |json| json.replace('<', "\\u003c"))
    }
}

/// Root document wrapper shared by every page.
#[derive(Debug, Clone)]
pub struct RootLayout {
    pub metadata: DocumentMetadata,
    pub theme: ThemeProvider,
    pub mode: ThemeMode,
    pub user: UserContext,
}

impl RootLayout {
    /// Site layout with theme and user taken from the request cookies.
    #[must_use]
    pub fn for_request(jar: &CookieJar) -> Self {
        Self {
            metadata: SITE_METADATA,
            theme: SITE_THEME,
            mode: SITE_THEME.resolve(jar),
            user: UserContext::from_jar(jar),
        }
    }

    /// Render a complete HTML document around `children`, which must already be
    /// trusted markup.
    #[must_use]
    pub fn render(&self, children: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>");
        let _ = write!(
            html,
            r#"<html lang="en"{}><head><meta charset="utf-8">"#,
            self.theme.html_attributes(self.mode)
        );
        html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        html.push_str(&self.metadata.head_tags());
        if let Some(script) = self.theme.script(self.mode) {
            let _ = write!(html, "<script>{script}</script>");
        }
        html.push_str(r#"</head><body class="antialiased">"#);
        let _ = write!(
            html,
            r#"<script id="{USER_CONTEXT_ID}" type="application/json">{}</script>"#,
            self.user.data_island()
        );
        html.push_str(children);
        html.push_str("</body></html>");
        html
    }
}
