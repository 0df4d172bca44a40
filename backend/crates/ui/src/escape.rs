use std::fmt;

/// Writes `text` with HTML special characters escaped
pub(crate) struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Escaped;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            Escaped(r#"<b class="x">A & B's</b>"#).to_string(),
            "&lt;b class=&quot;x&quot;&gt;A &amp; B&#39;s&lt;/b&gt;"
        );
        assert_eq!(Escaped("기도터").to_string(), "기도터");
    }
}
