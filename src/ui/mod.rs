//! Single-thread UI affinity.
//!
//! UI state in this crate is mutated from exactly one designated thread.
//! [`UiThread`] owns that thread and its FIFO task queue; [`UiHandle`] is a
//! cloneable handle that any thread can use to enqueue a mutation, or to
//! check whether it is already on the UI thread and may mutate directly.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle, ThreadId};

use tracing::debug;

use crate::error::UiError;

type Task = Box<dyn FnOnce() + Send>;

enum Message {
    Task(Task),
    Shutdown,
}

/// A dedicated thread draining queued UI tasks in FIFO order.
pub struct UiThread {
    handle: UiHandle,
    join: Option<JoinHandle<()>>,
}

impl UiThread {
    /// Spawn the UI thread and start draining its task queue.
    pub fn spawn() -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Message>();
        let join = thread::Builder::new()
            .name("streamlabel-ui".into())
            .spawn(move || {
                while let Ok(msg) = rx.recv() {
                    match msg {
                        Message::Task(task) => task(),
                        Message::Shutdown => break,
                    }
                }
                debug!("UI task queue closed, thread exiting");
            })?;
        let handle = UiHandle {
            sender: tx,
            thread_id: join.thread().id(),
        };
        Ok(Self {
            handle,
            join: Some(join),
        })
    }

    /// A cloneable handle for enqueueing tasks from any thread.
    pub fn handle(&self) -> UiHandle {
        self.handle.clone()
    }

    /// Close the queue and join the thread.
    ///
    /// Tasks enqueued before the shutdown request still run, in order,
    /// before the thread exits. Tasks enqueued afterwards are dropped.
    pub fn shutdown(mut self) -> std::thread::Result<()> {
        // Queued FIFO behind any pending tasks, so they drain first.
        let _ = self.handle.sender.send(Message::Shutdown);
        match self.join.take() {
            Some(j) => j.join(),
            None => Ok(()),
        }
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = self.handle.sender.send(Message::Shutdown);
            let _ = join.join();
        }
    }
}

/// Handle to the UI thread's task queue.
#[derive(Clone)]
pub struct UiHandle {
    sender: Sender<Message>,
    thread_id: ThreadId,
}

impl UiHandle {
    /// Whether the calling thread is the designated UI thread.
    pub fn is_ui_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Enqueue a task to run on the UI thread.
    ///
    /// Fire-and-forget: tasks run in FIFO order relative to other enqueued
    /// tasks, with no completion signal and no guarantee about how soon.
    pub fn invoke_later<F>(&self, task: F) -> Result<(), UiError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender
            .send(Message::Task(Box::new(task)))
            .map_err(|_| UiError::Disconnected)
    }
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle")
            .field("thread_id", &self.thread_id)
            .finish()
    }
}
