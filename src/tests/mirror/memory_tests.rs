//! Tests for in-memory mirror and label implementations.

use std::io::Write;

use crate::label::LabelSurface;
use crate::mirror::{InMemoryLabel, InMemoryMirror, MirrorTarget};

#[test]
fn in_memory_mirror_records_written_bytes() {
    let mirror = InMemoryMirror::new("mirror");

    let mut w = mirror.open().unwrap();
    w.write_all(b"abc").unwrap();
    w.write_all(b"def").unwrap();

    assert_eq!(mirror.contents(), b"abcdef".to_vec());
    assert_eq!(mirror.contents_string(), "abcdef");
}

#[test]
fn in_memory_mirror_clones_share_the_buffer() {
    let mirror = InMemoryMirror::new("mirror");
    let other = mirror.clone();

    let mut w = mirror.open().unwrap();
    w.write_all(b"shared").unwrap();

    assert_eq!(other.contents(), b"shared".to_vec());

    other.clear();
    assert!(mirror.contents().is_empty());
}

#[test]
fn in_memory_label_records_updates_in_order() {
    let label = InMemoryLabel::new();
    assert!(label.text().is_none());

    label.set_text("first".into());
    label.set_text("second".into());

    assert_eq!(label.updates(), vec!["first".to_string(), "second".to_string()]);
    assert_eq!(label.text().as_deref(), Some("second"));
}
