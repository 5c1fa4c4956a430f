/// Wrap an image locator as a CSS `url("…")` reference.
///
/// # Examples
///
/// ```
/// use mural::background::css_url;
///
/// assert_eq!(
///     css_url("https://example.com/bg.jpg"),
///     r#"url("https://example.com/bg.jpg")"#
/// );
/// ```
pub fn css_url(locator: &str) -> String {
    format!("url(\"{}\")", escape_css_string(locator))
}

/// Escape a string for embedding inside a double-quoted CSS string,
/// following the CSSOM serialization rules: NUL becomes U+FFFD, control
/// characters become hex escapes with a trailing space, quotes and
/// backslashes get a backslash prefix.
pub fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\u{0}' => out.push('\u{fffd}'),
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:x} ", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
