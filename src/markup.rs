//! Lightweight markup escaping and line rendering.

use std::borrow::Cow;

/// Replace `<` and `>` with their entity forms, leaving everything else
/// untouched.
///
/// This keeps angle brackets in captured output from being read as markup
/// by the label. It is a presentation convenience, not a security boundary:
/// no other characters are escaped, and no injection-prevention guarantee
/// is made.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Render one captured line as the markup string pushed to a label surface.
///
/// The escaped text is wrapped in a paragraph container; when `error_mode`
/// is set it is additionally wrapped in a red font container.
pub fn render_line(text: &str, error_mode: bool) -> String {
    let escaped = escape_markup(text);
    let mut markup = String::with_capacity(escaped.len() + 48);
    markup.push_str("<html><p>");
    if error_mode {
        markup.push_str(ERROR_OPEN);
    }
    markup.push_str(&escaped);
    if error_mode {
        markup.push_str(ERROR_CLOSE);
    }
    markup.push_str("</p></html>");
    markup
}

/// Opening tag of the error-mode color wrapper.
pub const ERROR_OPEN: &str = "<font color=\"red\">";
/// Closing tag of the error-mode color wrapper.
pub const ERROR_CLOSE: &str = "</font>";
