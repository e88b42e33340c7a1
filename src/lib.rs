//! # async-either
//!
//! Asynchronous `Either` values: a single abstraction that combines "a
//! value that arrives later" with "a computation that can fail with a
//! typed error instead of a typed success".
//!
//! The crate is three small pieces:
//!
//! - [`AsyncTask`] - a single-shot asynchronous value with a fault channel
//! - [`FutureExt`] - fluent combinators over `AsyncTask`
//! - [`AsyncResult`] - an `AsyncTask` carrying an [`Either`], with the
//!   combinator surface to chain dependent fallible steps without nesting
//!
//! ## Example
//!
//! ```rust
//! use async_either::{AsyncResult, Either};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = AsyncResult::<String, u32>::right(5)
//!     .map(|n| n + 1)
//!     .flat_map(|n| AsyncResult::right(n * 2))
//!     .await;
//! assert_eq!(outcome, Ok(Either::Right(12)));
//!
//! // Typed failures short-circuit the success path untouched.
//! let failed = AsyncResult::<String, u32>::left("boom".to_string())
//!     .map(|n| n + 1)
//!     .await;
//! assert_eq!(failed, Ok(Either::Left("boom".to_string())));
//! # }
//! ```
//!
//! Scheduling is delegated entirely to the ambient tokio runtime; this
//! crate registers continuations and never blocks. Cancellation, timeouts,
//! retries and backpressure are the caller's concern.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod future_ext;
pub mod result;
pub mod task;

pub use either::Either;

pub use future_ext::FutureExt;
pub use result::AsyncResult;
pub use task::{AsyncTask, TaskError};
