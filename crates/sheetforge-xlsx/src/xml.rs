//! Minimal XML emission engine
//!
//! All parts of the package are produced through [`XmlWriter`]: a single
//! append-only string buffer with context-aware escaping. Content closures
//! are infallible, so every opened element is closed exactly once on every
//! exit path; anything that can fail (interning, media registration) happens
//! before emission starts.

use std::fmt::Write as _;

/// Where a piece of text sits, which decides how it is escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    /// Inside an attribute value
    Attribute,
    /// Inside element text
    Text,
}

/// Escape `s` into `out` for the given context.
///
/// - `&`, `<`, `>` are always escaped.
/// - `'` and `"` are escaped only inside attribute values.
/// - A literal tab is dropped in both contexts.
/// - Inside attribute values raw CR and LF are dropped; in element text,
///   CRLF, lone CR and lone LF each normalize to a single `\n`.
/// - Remaining control characters below 0x20 render as `&#<hex>;` with
///   lowercase hex digits and no leading zero.
pub fn escape_into(out: &mut String, s: &str, ctx: EscapeContext) {
    let in_attr = ctx == EscapeContext::Attribute;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => {
                if in_attr {
                    out.push_str("&apos;");
                } else {
                    out.push(c);
                }
            }
            '"' => {
                if in_attr {
                    out.push_str("&quot;");
                } else {
                    out.push(c);
                }
            }
            '\t' => {}
            '\r' => {
                if !in_attr {
                    // CRLF collapses with the CR into one newline
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push('\n');
                }
            }
            '\n' => {
                if !in_attr {
                    out.push('\n');
                }
            }
            c if (c as u32) < 0x20 => {
                // Cannot fail when writing into a String
                let _ = write!(out, "&#{:x};", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// Append-only XML buffer
///
/// One writer produces exactly one part; there is no concurrency and no
/// buffering beyond the owned string.
#[derive(Debug, Default)]
pub struct XmlWriter {
    buf: String,
}

impl XmlWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the XML declaration
    pub fn decl(&mut self) {
        self.buf
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    }

    /// Append raw, pre-escaped text
    pub fn raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append element text with text-context escaping
    pub fn text(&mut self, s: &str) {
        escape_into(&mut self.buf, s, EscapeContext::Text);
    }

    /// Emit a self-closing element
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.open_tag(tag, attrs);
        self.buf.push_str("/>");
    }

    /// Emit an element whose content is produced by `f` on the same buffer
    pub fn element_with<F>(&mut self, tag: &str, attrs: &[(&str, &str)], f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.open_tag(tag, attrs);
        self.buf.push('>');
        f(self);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// Emit an element containing only escaped text
    pub fn text_element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.element_with(tag, attrs, |w| w.text(text));
    }

    fn open_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            escape_into(&mut self.buf, value, EscapeContext::Attribute);
            self.buf.push('"');
        }
    }

    /// Consume the writer, returning the buffer
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Consume the writer, returning the buffer as bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn escape(s: &str, ctx: EscapeContext) -> String {
        let mut out = String::new();
        escape_into(&mut out, s, ctx);
        out
    }

    #[test]
    fn attribute_escaping_drops_tabs() {
        assert_eq!(
            escape("He said \"hi\"\t & <bye>", EscapeContext::Attribute),
            "He said &quot;hi&quot; &amp; &lt;bye&gt;"
        );
    }

    #[test]
    fn attribute_escaping_drops_newlines() {
        assert_eq!(escape("a\r\nb\rc\nd", EscapeContext::Attribute), "abcd");
        assert_eq!(escape("it's", EscapeContext::Attribute), "it&apos;s");
    }

    #[test]
    fn text_escaping_leaves_quotes() {
        assert_eq!(
            escape("'quoted' \"text\" <&>", EscapeContext::Text),
            "'quoted' \"text\" &lt;&amp;&gt;"
        );
    }

    #[test]
    fn text_escaping_normalizes_line_endings() {
        assert_eq!(escape("a\r\nb", EscapeContext::Text), "a\nb");
        assert_eq!(escape("a\rb", EscapeContext::Text), "a\nb");
        assert_eq!(escape("a\nb", EscapeContext::Text), "a\nb");
        assert_eq!(escape("a\r\n\r\nb", EscapeContext::Text), "a\n\nb");
    }

    #[test]
    fn control_bytes_render_as_hex_references() {
        assert_eq!(escape("\u{5}", EscapeContext::Text), "&#5;");
        assert_eq!(escape("\u{1f}", EscapeContext::Text), "&#1f;");
        assert_eq!(escape("\u{10}", EscapeContext::Attribute), "&#10;");
    }

    #[test]
    fn nested_elements_close_in_order() {
        let mut w = XmlWriter::new();
        w.element_with("a", &[("x", "1")], |w| {
            w.element("b", &[]);
            w.text_element("c", &[], "hi");
        });
        assert_eq!(w.into_string(), r#"<a x="1"><b/><c>hi</c></a>"#);
    }

    #[test]
    fn declaration_comes_first() {
        let mut w = XmlWriter::new();
        w.decl();
        w.element("r", &[]);
        assert_eq!(
            w.into_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<r/>"
        );
    }
}
