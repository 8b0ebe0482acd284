//! Tests for markup escaping and line rendering.

use std::borrow::Cow;

use crate::markup::{ERROR_CLOSE, ERROR_OPEN, escape_markup, render_line};

#[test]
fn plain_text_is_untouched() {
    let escaped = escape_markup("plain text");
    assert_eq!(escaped, "plain text");
    assert!(matches!(escaped, Cow::Borrowed(_)));
}

#[test]
fn angle_brackets_become_entities() {
    assert_eq!(escape_markup("a<b>c"), "a&lt;b&gt;c");
}

#[test]
fn only_angle_brackets_are_escaped() {
    assert_eq!(
        escape_markup(r#"& "quotes" <tag> 'single'"#),
        r#"& "quotes" &lt;tag&gt; 'single'"#
    );
}

#[test]
fn render_wraps_in_paragraph_markup() {
    assert_eq!(render_line("hello", false), "<html><p>hello</p></html>");
}

#[test]
fn error_mode_adds_color_wrapper() {
    let markup = render_line("bad", true);
    assert!(markup.contains(ERROR_OPEN));
    assert!(markup.contains(ERROR_CLOSE));
    assert_eq!(
        markup,
        "<html><p><font color=\"red\">bad</font></p></html>"
    );
}

#[test]
fn non_error_mode_has_no_color_wrapper() {
    let markup = render_line("bad", false);
    assert!(!markup.contains(ERROR_OPEN));
    assert!(!markup.contains(ERROR_CLOSE));
}

#[test]
fn rendered_text_is_escaped_before_wrapping() {
    assert_eq!(
        render_line("</p>", true),
        "<html><p><font color=\"red\">&lt;/p&gt;</font></p></html>"
    );
}
