//! Site logo

use derive_more::Display;
use std::fmt;

use crate::escape::Escaped;

pub const SITE_NAME: &str = "기도터";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum LogoVariant {
    /// Mark and wordmark
    #[default]
    #[display("full")]
    Full,
    /// Mark only
    #[display("icon")]
    Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub variant: LogoVariant,
    /// Mark height in pixels
    pub size: u32,
    pub href: Option<String>,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            variant: LogoVariant::Full,
            size: 40,
            href: Some("/".to_string()),
        }
    }
}

impl Logo {
    pub fn icon(size: u32) -> Self {
        Self {
            variant: LogoVariant::Icon,
            size,
            href: None,
        }
    }
}

impl fmt::Display for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(href) = &self.href {
            write!(f, r#"<a href="{}" class="logo-link">"#, Escaped(href))?;
        }

        write!(
            f,
            r#"<span class="logo logo-{}"><img src="/logo.svg" alt="{SITE_NAME}" width="{size}" height="{size}">"#,
            self.variant,
            size = self.size,
        )?;
        if self.variant == LogoVariant::Full {
            write!(f, r#"<span class="logo-text">{SITE_NAME}</span>"#)?;
        }
        f.write_str("</span>")?;

        if self.href.is_some() {
            f.write_str("</a>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_logo_links_home() {
        let html = Logo::default().to_string();
        assert!(html.starts_with(r#"<a href="/""#));
        assert!(html.contains("logo-text"));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn test_icon_has_no_wordmark() {
        let html = Logo::icon(24).to_string();
        assert!(html.contains("logo-icon"));
        assert!(html.contains(r#"width="24""#));
        assert!(!html.contains("logo-text"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_href_escaped() {
        let logo = Logo {
            href: Some(r#"/?q="x""#.into()),
            ..Logo::default()
        };
        assert!(logo.to_string().contains("/?q=&quot;x&quot;"));
    }
}
