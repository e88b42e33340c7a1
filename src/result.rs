//! Asynchronous disjoint results
//!
//! [`AsyncResult`] pairs "a value that arrives later" with "a computation
//! that can fail with a typed error": one [`AsyncTask`] carrying an
//! [`Either`], plus the combinator surface to chain dependent fallible
//! steps without nesting.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use either::Either;

use crate::future_ext::FutureExt;
use crate::task::{AsyncTask, TaskError};

/// An asynchronous value that resolves to either a typed failure `L` or a
/// success `R`.
///
/// Two failure channels stay distinct throughout a chain:
///
/// - **Typed failures** (`Either::Left`) are expected, modeled outcomes.
///   Success-path combinators ([`map`](Self::map), [`flat_map`](Self::flat_map))
///   pass them through untouched; only the failure-path mirrors
///   ([`map_left`](Self::map_left), [`flat_map_left`](Self::flat_map_left))
///   touch them.
/// - **Primitive faults** ([`TaskError`]) mean the underlying task never
///   produced a value at all. They are invisible to every `Either`-level
///   combinator and only observable through [`recover`](Self::recover) and
///   [`on_failure`](Self::on_failure).
///
/// Every combinator is non-blocking and leaves the input conceptually
/// unchanged; each call yields a freshly derived wrapper.
///
/// # Example
///
/// ```rust
/// use async_either::AsyncResult;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let reply = AsyncResult::<String, i32>::right(5)
///     .map(|n| n + 1)
///     .flat_map(|n| AsyncResult::right(n * 2))
///     .fold(|error| error, |n| n.to_string())
///     .await;
/// assert_eq!(reply, Ok("12".to_string()));
/// # }
/// ```
pub struct AsyncResult<L, R> {
    value: AsyncTask<Either<L, R>>,
}

impl<L, R> AsyncResult<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// Wraps an already-built task of a disjoint value.
    pub fn new(value: AsyncTask<Either<L, R>>) -> Self {
        Self { value }
    }

    /// Wraps an already-resolved disjoint value.
    pub fn from_either(either: Either<L, R>) -> Self {
        Self::new(AsyncTask::from_value(either))
    }

    /// An already-resolved success.
    pub fn right(value: R) -> Self {
        Self::from_either(Either::Right(value))
    }

    /// An already-resolved typed failure.
    pub fn left(value: L) -> Self {
        Self::from_either(Either::Left(value))
    }

    /// Bridges a plain future of a disjoint value.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Either<L, R>> + Send + 'static,
    {
        Self::new(AsyncTask::from_future(future))
    }

    /// Runs a closure on the blocking pool and wraps its disjoint value.
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce() -> Either<L, R> + Send + 'static,
    {
        Self::new(AsyncTask::spawn(f))
    }

    /// Unwraps into the underlying task.
    pub fn into_task(self) -> AsyncTask<Either<L, R>> {
        self.value
    }

    /// Transforms the success value.
    ///
    /// A typed failure passes through untouched; `f` is never invoked for
    /// it. If `f` panics, the producer task aborts and the chain observes
    /// a primitive fault.
    pub fn map<U>(self, f: impl FnOnce(R) -> U + Send + 'static) -> AsyncResult<L, U>
    where
        U: Send + 'static,
    {
        AsyncResult::new(self.value.map(move |either| either.map_right(f)))
    }

    /// Transforms the success value through a fallible function.
    ///
    /// An `Err` from `f` faults the underlying task; it never becomes a
    /// typed failure. A typed failure passes through with zero invocations
    /// of `f`, exactly as in [`map`](Self::map).
    pub fn map_try<U, E>(
        self,
        f: impl FnOnce(R) -> Result<U, E> + Send + 'static,
    ) -> AsyncResult<L, U>
    where
        U: Send + 'static,
        E: Into<TaskError>,
    {
        AsyncResult::new(self.value.map_try(move |either| match either {
            Either::Left(left) => Ok(Either::Left(left)),
            Either::Right(right) => f(right).map(Either::Right).map_err(Into::into),
        }))
    }

    /// Sequences a dependent asynchronous step.
    ///
    /// On success the chain adopts the resolution of `f`; a typed failure
    /// short-circuits and `f` is never invoked.
    pub fn flat_map<U>(
        self,
        f: impl FnOnce(R) -> AsyncResult<L, U> + Send + 'static,
    ) -> AsyncResult<L, U>
    where
        U: Send + 'static,
    {
        AsyncResult::new(self.value.flat_map(move |either| match either {
            Either::Left(left) => AsyncTask::from_value(Either::Left(left)),
            Either::Right(right) => f(right).value,
        }))
    }

    /// Like [`flat_map`](Self::flat_map), for collaborators that hand back
    /// the bare task instead of this wrapper.
    pub fn flat_map_task<U>(
        self,
        f: impl FnOnce(R) -> AsyncTask<Either<L, U>> + Send + 'static,
    ) -> AsyncResult<L, U>
    where
        U: Send + 'static,
    {
        AsyncResult::new(self.value.flat_map(move |either| match either {
            Either::Left(left) => AsyncTask::from_value(Either::Left(left)),
            Either::Right(right) => f(right),
        }))
    }

    /// Transforms the typed-failure value; a success passes through
    /// untouched.
    pub fn map_left<U>(self, f: impl FnOnce(L) -> U + Send + 'static) -> AsyncResult<U, R>
    where
        U: Send + 'static,
    {
        AsyncResult::new(self.value.map(move |either| either.map_left(f)))
    }

    /// Transforms the typed-failure value through a fallible function.
    ///
    /// The mirror of [`map_try`](Self::map_try): an `Err` from `f` faults
    /// the task, and a success passes through with zero invocations of `f`.
    pub fn map_left_try<U, E>(
        self,
        f: impl FnOnce(L) -> Result<U, E> + Send + 'static,
    ) -> AsyncResult<U, R>
    where
        U: Send + 'static,
        E: Into<TaskError>,
    {
        AsyncResult::new(self.value.map_try(move |either| match either {
            Either::Left(left) => f(left).map(Either::Left).map_err(Into::into),
            Either::Right(right) => Ok(Either::Right(right)),
        }))
    }

    /// Sequences a dependent step on the typed-failure branch.
    ///
    /// A success short-circuits and `f` is never invoked.
    pub fn flat_map_left<U>(
        self,
        f: impl FnOnce(L) -> AsyncResult<U, R> + Send + 'static,
    ) -> AsyncResult<U, R>
    where
        U: Send + 'static,
    {
        AsyncResult::new(self.value.flat_map(move |either| match either {
            Either::Left(left) => f(left).value,
            Either::Right(right) => AsyncTask::from_value(Either::Right(right)),
        }))
    }

    /// Transforms whichever side is populated; exactly one of the two
    /// functions runs.
    pub fn bimap<X, Y>(
        self,
        fl: impl FnOnce(L) -> X + Send + 'static,
        fr: impl FnOnce(R) -> Y + Send + 'static,
    ) -> AsyncResult<X, Y>
    where
        X: Send + 'static,
        Y: Send + 'static,
    {
        AsyncResult::new(self.value.map(move |either| either.map_either(fl, fr)))
    }

    /// Collapses both sides into one asynchronous value.
    ///
    /// The designated exit point for callers that no longer care about the
    /// left/right distinction.
    pub fn fold<C>(
        self,
        fl: impl FnOnce(L) -> C + Send + 'static,
        fr: impl FnOnce(R) -> C + Send + 'static,
    ) -> AsyncTask<C>
    where
        C: Send + 'static,
    {
        self.value.map(move |either| either.either(fl, fr))
    }

    /// Observes the success value without altering it.
    ///
    /// No fault-safety is offered for the observer: if it panics, the
    /// producer task aborts and that resolution path observes a primitive
    /// fault.
    pub fn peek(self, consumer: impl FnOnce(&R) + Send + 'static) -> Self {
        Self::new(self.value.map(move |either| {
            if let Either::Right(right) = &either {
                consumer(right);
            }
            either
        }))
    }

    /// Observes the typed-failure value without altering it.
    pub fn peek_left(self, consumer: impl FnOnce(&L) + Send + 'static) -> Self {
        Self::new(self.value.map(move |either| {
            if let Either::Left(left) = &either {
                consumer(left);
            }
            either
        }))
    }

    /// Registers both observers; exactly one fires, matching the resolved
    /// side.
    pub fn peek_both(
        self,
        left_consumer: impl FnOnce(&L) + Send + 'static,
        right_consumer: impl FnOnce(&R) + Send + 'static,
    ) -> Self {
        self.peek_left(left_consumer).peek(right_consumer)
    }

    /// Heals a primitive fault into a disjoint value.
    ///
    /// Fires only when the underlying task faulted outright. A resolved
    /// value passes through untouched - a typed failure is data, not a
    /// fault, and stays a typed failure.
    pub fn recover(self, f: impl FnOnce(TaskError) -> Either<L, R> + Send + 'static) -> Self {
        Self::new(self.value.recover(f))
    }

    /// Observes a primitive fault.
    ///
    /// Distinct from [`peek_left`](Self::peek_left): this fires when the
    /// task produced no value at all.
    pub fn on_failure(self, consumer: impl FnOnce(&TaskError) + Send + 'static) -> Self {
        Self::new(self.value.on_failure(consumer))
    }

    /// Observes a resolution of the underlying task, whichever side it
    /// carries.
    pub fn on_success(self, consumer: impl FnOnce(&Either<L, R>) + Send + 'static) -> Self {
        Self::new(self.value.on_success(consumer))
    }
}

impl<L, R> From<Either<L, R>> for AsyncResult<L, R>
where
    L: Send + 'static,
    R: Send + 'static,
{
    fn from(either: Either<L, R>) -> Self {
        Self::from_either(either)
    }
}

impl<L, R> Future for AsyncResult<L, R> {
    type Output = Result<Either<L, R>, TaskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.value).poll(cx)
    }
}
