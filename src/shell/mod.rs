//! Root page layout: document metadata, theme context and current-user context
//! wrapped around page content.

pub mod layout;
pub mod metadata;
pub mod theme;

pub use layout::{RootLayout, UserContext};
pub use metadata::{DocumentMetadata, SITE_METADATA};
pub use theme::{SITE_THEME, THEME_COOKIE, ThemeMode, ThemeProvider};

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
