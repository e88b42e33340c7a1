//! Single-shot asynchronous values
//!
//! This module provides the primitive the rest of the crate composes on:
//! a oneshot-backed task that resolves at most once, either to a value or
//! to a [`TaskError`] describing why no value was produced.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Error describing why an [`AsyncTask`] produced no value.
///
/// This is the primitive-level failure channel: it reports that the
/// producing computation aborted, not that it computed an error value.
/// Expected, modeled failures belong in the task's payload (see
/// [`AsyncResult`](crate::AsyncResult)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    message: String,
}

impl TaskError {
    /// Creates a task error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps a foreign error type, preserving its display form.
    pub fn from_error(error: impl std::error::Error) -> Self {
        Self::new(error.to_string())
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    // Normal form for a producer that vanished without resolving the task
    // (it panicked or was dropped).
    pub(crate) fn aborted() -> Self {
        Self::new("task aborted before producing a value")
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskError {}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Generic async task wrapper for single operations
///
/// This wraps a oneshot::Receiver and implements Future to provide
/// a concrete return type instead of boxed futures or async fn.
///
/// A task resolves exactly once: `Ok(value)` when its producer delivered,
/// `Err(TaskError)` when the producer faulted or disappeared. Once
/// resolved, the outcome is immutable.
pub struct AsyncTask<T> {
    receiver: oneshot::Receiver<Result<T, TaskError>>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Create an already-resolved AsyncTask from a value
    pub fn from_value(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Ok(value));
        Self { receiver: rx }
    }

    /// Create an already-faulted AsyncTask
    pub fn faulted(error: TaskError) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(error));
        Self { receiver: rx }
    }

    /// Create an AsyncTask from a future
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::try_from_future(async move { Ok(future.await) })
    }

    /// Create an AsyncTask from a future that may fault
    pub fn try_from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, TaskError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = future.await;
            let _ = tx.send(result);
        });
        Self { receiver: rx }
    }

    /// Create an AsyncTask that spawns a blocking task
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn_blocking(move || {
            let result = f();
            let _ = tx.send(Ok(result));
        });
        Self { receiver: rx }
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, TaskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Producer gone without sending: surface it on the fault
            // channel so the chain stays observable and recoverable.
            Poll::Ready(Err(_)) => Poll::Ready(Err(TaskError::aborted())),
            Poll::Pending => Poll::Pending,
        }
    }
}
