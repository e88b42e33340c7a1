//! Future extension traits for async task processing

use crate::task::{AsyncTask, TaskError};

//────────────────────────────────────────────────────────────────────────────
// FutureExt – Fluent ops for AsyncTask<T>
//────────────────────────────────────────────────────────────────────────────

/// Extension trait providing combinators over [`AsyncTask`].
///
/// Every method returns immediately with a new task whose producer awaits
/// the input, so chains keep causal ordering without ever blocking the
/// caller.
pub trait FutureExt<T>: Sized {
    /// Maps the resolved value to a new type; faults pass through.
    fn map<U>(self, f: impl FnOnce(T) -> U + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static;

    /// Maps the resolved value through a fallible function.
    ///
    /// An `Err` from `f` faults the resulting task. Faults of the input
    /// task pass through without invoking `f`.
    fn map_try<U, E>(self, f: impl FnOnce(T) -> Result<U, E> + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static,
        E: Into<TaskError>;

    /// Sequences a dependent task; faults short-circuit without invoking `f`.
    fn flat_map<U>(self, f: impl FnOnce(T) -> AsyncTask<U> + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static;

    /// Converts a fault back into a resolved value; resolved tasks pass
    /// through untouched.
    fn recover(self, f: impl FnOnce(TaskError) -> T + Send + 'static) -> AsyncTask<T>;

    /// Observes a resolution without consuming it.
    fn on_success(self, f: impl FnOnce(&T) + Send + 'static) -> AsyncTask<T>;

    /// Observes a fault without consuming it.
    fn on_failure(self, f: impl FnOnce(&TaskError) + Send + 'static) -> AsyncTask<T>;
}

// Implementation for AsyncTask
impl<T: Send + 'static> FutureExt<T> for AsyncTask<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static,
    {
        AsyncTask::try_from_future(async move { self.await.map(f) })
    }

    fn map_try<U, E>(self, f: impl FnOnce(T) -> Result<U, E> + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static,
        E: Into<TaskError>,
    {
        AsyncTask::try_from_future(async move {
            match self.await {
                Ok(value) => f(value).map_err(Into::into),
                Err(error) => Err(error),
            }
        })
    }

    fn flat_map<U>(self, f: impl FnOnce(T) -> AsyncTask<U> + Send + 'static) -> AsyncTask<U>
    where
        U: Send + 'static,
    {
        AsyncTask::try_from_future(async move {
            match self.await {
                Ok(value) => f(value).await,
                Err(error) => Err(error),
            }
        })
    }

    fn recover(self, f: impl FnOnce(TaskError) -> T + Send + 'static) -> AsyncTask<T> {
        AsyncTask::try_from_future(async move {
            match self.await {
                Ok(value) => Ok(value),
                Err(error) => Ok(f(error)),
            }
        })
    }

    fn on_success(self, f: impl FnOnce(&T) + Send + 'static) -> AsyncTask<T> {
        AsyncTask::try_from_future(async move {
            let result = self.await;
            if let Ok(value) = &result {
                f(value);
            }
            result
        })
    }

    fn on_failure(self, f: impl FnOnce(&TaskError) + Send + 'static) -> AsyncTask<T> {
        AsyncTask::try_from_future(async move {
            let result = self.await;
            if let Err(error) = &result {
                f(error);
            }
            result
        })
    }
}
