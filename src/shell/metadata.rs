use super::escape_html;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub icon: &'static str,
    pub shortcut: &'static str,
    pub apple: &'static str,
}

/// Static document metadata rendered into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub icons: Icons,
    pub keywords: &'static [&'static str],
}

pub const SITE_METADATA: DocumentMetadata = DocumentMetadata {
    title: "Rate My Byte",
    description: "Rate My Byte is a platform that allows users to rate and review food spots, share their experiences, and discover new places to eat.",
    icons: Icons {
        icon: "/favicon.ico",
        shortcut: "/favicon.ico",
        apple: "/apple-touch-icon.png",
    },
    keywords: &[
        "Rate My Byte",
        "food rating",
        "food review",
        "food discovery",
        "restaurant reviews",
        "food spots",
        "food community",
        "food events",
        "food blog",
    ],
};

impl DocumentMetadata {
    /// `<title>`, description, keywords and icon links.
    #[must_use]
    pub fn head_tags(&self) -> String {
        let mut tags = String::new();
        let _ = write!(tags, "<title>{}</title>", escape_html(self.title));
        let _ = write!(
            tags,
            r#"<meta name="description" content="{}">"#,
            escape_html(self.description)
        );
        if !self.keywords.is_empty() {
            let _ = write!(
                tags,
                r#"<meta name="keywords" content="{}">"#,
                escape_html(&self.keywords.join(","))
            );
        }
        let _ = write!(
            tags,
            r#"<link rel="icon" href="{}">"#,
            escape_html(self.icons.icon)
        );
        let _ = write!(
            tags,
            r#"<link rel="shortcut icon" href="{}">"#,
            escape_html(self.icons.shortcut)
        );
        let _ = write!(
            tags,
            r#"<link rel="apple-touch-icon" href="{}">"#,
            escape_html(self.icons.apple)
        );
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_metadata_head_tags() {
        let tags = SITE_METADATA.head_tags();
        assert!(tags.starts_with("<title>Rate My Byte</title>"));
        assert!(tags.contains(r#"<meta name="keywords" content="Rate My Byte,food rating,food review,"#));
        assert!(tags.contains(r#"<link rel="icon" href="/favicon.ico">"#));
        assert!(tags.contains(r#"<link rel="shortcut icon" href="/favicon.ico">"#));
        assert!(tags.contains(r#"<link rel="apple-touch-icon" href="/apple-touch-icon.png">"#));
    }

    #[test]
    fn head_tags_escape_values() {
        let metadata = DocumentMetadata {
            title: "Bytes & <Bites>",
            description: r#"say "hi""#,
            keywords: &[],
            ..SITE_METADATA
        };
        let tags = metadata.head_tags();
        assert!(tags.contains("<title>Bytes &amp; &lt;Bites&gt;</title>"));
        assert!(tags.contains("content=\"say &quot;hi&quot;\""));
        assert!(!tags.contains("name=\"keywords\""));
    }
}
