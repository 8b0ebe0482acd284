//! Tests for the CaptureLabel reference consumer.

use std::sync::Arc;
use std::sync::mpsc;

use crate::consumer::{Consume, Payload};
use crate::error::ConsumeError;
use crate::label::CaptureLabel;
use crate::mirror::InMemoryLabel;
use crate::ui::UiThread;

fn label_fixture() -> (UiThread, InMemoryLabel, Arc<CaptureLabel>) {
    let ui = UiThread::spawn().expect("spawn UI thread");
    let surface = InMemoryLabel::new();
    let label = Arc::new(CaptureLabel::new(Arc::new(surface.clone()), ui.handle()));
    (ui, surface, label)
}

#[test]
fn raw_payload_is_rejected() {
    let (ui, _surface, label) = label_fixture();

    let err = label.consume(Payload::Raw(vec![1, 2, 3])).unwrap_err();
    assert!(matches!(
        err,
        ConsumeError::UnsupportedPayload { kind: "raw byte" }
    ));

    ui.shutdown().unwrap();
}

#[test]
fn consumed_line_reaches_surface_after_deferral() {
    let (ui, surface, label) = label_fixture();

    label.consume(Payload::from("[OUT] hello\n")).unwrap();

    // Shutdown drains the FIFO queue before joining.
    ui.shutdown().unwrap();
    assert_eq!(
        surface.updates(),
        vec!["<html><p>[OUT] hello\n</p></html>".to_string()]
    );
}

#[test]
fn error_mode_styles_the_rendered_line() {
    let (ui, surface, label) = label_fixture();
    label.set_err(true);

    label.consume(Payload::from("[ERR] boom\n")).unwrap();

    ui.shutdown().unwrap();
    let text = surface.text().unwrap();
    assert!(text.contains("<font color=\"red\">"));
    assert!(text.contains("[ERR] boom"));
}

#[test]
fn error_mode_is_snapshotted_at_consume_time() {
    let (ui, surface, label) = label_fixture();

    label.set_err(true);
    label.consume(Payload::from("styled\n")).unwrap();
    // Toggling after consume must not restyle the already-rendered line.
    label.set_err(false);
    label.consume(Payload::from("plain\n")).unwrap();

    ui.shutdown().unwrap();
    let updates = surface.updates();
    assert_eq!(updates.len(), 2);
    assert!(updates[0].contains("<font color=\"red\">"));
    assert!(!updates[1].contains("<font"));
}

#[test]
fn consume_on_ui_thread_updates_surface_directly() {
    let (ui, surface, label) = label_fixture();
    let (tx, rx) = mpsc::channel();

    let handle = ui.handle();
    handle
        .invoke_later({
            let label = Arc::clone(&label);
            move || {
                label.consume(Payload::from("direct\n")).unwrap();
                // set_text ran in place, before this task returned.
                tx.send(()).unwrap();
            }
        })
        .unwrap();

    rx.recv().unwrap();
    assert_eq!(surface.updates().len(), 1);
    ui.shutdown().unwrap();
}

#[test]
fn updates_keep_fifo_order_across_lines() {
    let (ui, surface, label) = label_fixture();

    for i in 0..5 {
        label.consume(Payload::from(format!("line {i}\n"))).unwrap();
    }

    ui.shutdown().unwrap();
    let updates = surface.updates();
    assert_eq!(updates.len(), 5);
    for (i, update) in updates.iter().enumerate() {
        assert!(update.contains(&format!("line {i}")));
    }
}
