//! Tests for standard mirror targets.

use std::fs;
use std::io::Write;

use crate::mirror::{FileMirror, MirrorTarget, StderrMirror, StdoutMirror};

#[test]
fn file_mirror_appends_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mirror.log");

    let mirror = FileMirror::new(path.clone());
    assert_eq!(mirror.id(), path.to_string_lossy());

    {
        let mut w = mirror.open().unwrap();
        w.write_all(b"abc").unwrap();
    }
    {
        let mut w = mirror.open().unwrap();
        w.write_all(b"def").unwrap();
    }

    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());
}

#[test]
fn std_mirrors_use_conventional_ids() {
    assert_eq!(StdoutMirror::new().id(), "-");
    assert_eq!(StderrMirror::new().id(), "stderr");
}

#[test]
fn std_mirrors_open_writable_streams() {
    StdoutMirror::new().open().unwrap();
    StderrMirror::new().open().unwrap();
}
