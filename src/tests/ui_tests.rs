//! Tests for UI-thread affinity and task scheduling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::error::UiError;
use crate::ui::UiThread;

#[test]
fn tasks_run_in_fifo_order() {
    let ui = UiThread::spawn().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for i in 0..10 {
        let seen = Arc::clone(&seen);
        ui.handle()
            .invoke_later(move || seen.lock().unwrap().push(i))
            .unwrap();
    }

    ui.shutdown().unwrap();
    assert_eq!(*seen.lock().unwrap(), (0..10).collect::<Vec<_>>());
}

#[test]
fn is_ui_thread_distinguishes_threads() {
    let ui = UiThread::spawn().unwrap();
    let handle = ui.handle();
    assert!(!handle.is_ui_thread());

    let on_ui = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();
    handle
        .invoke_later({
            let handle = handle.clone();
            let on_ui = Arc::clone(&on_ui);
            move || {
                on_ui.store(handle.is_ui_thread(), Ordering::SeqCst);
                tx.send(()).unwrap();
            }
        })
        .unwrap();

    rx.recv().unwrap();
    assert!(on_ui.load(Ordering::SeqCst));
    ui.shutdown().unwrap();
}

#[test]
fn invoke_later_after_shutdown_is_disconnected() {
    let ui = UiThread::spawn().unwrap();
    let handle = ui.handle();
    ui.shutdown().unwrap();

    let err = handle.invoke_later(|| {}).unwrap_err();
    assert!(matches!(err, UiError::Disconnected));
}

#[test]
fn shutdown_drains_pending_tasks_first() {
    let ui = UiThread::spawn().unwrap();
    let count = Arc::new(Mutex::new(0u32));

    for _ in 0..100 {
        let count = Arc::clone(&count);
        ui.handle()
            .invoke_later(move || *count.lock().unwrap() += 1)
            .unwrap();
    }

    ui.shutdown().unwrap();
    assert_eq!(*count.lock().unwrap(), 100);
}
