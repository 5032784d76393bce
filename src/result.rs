// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT
//! This module defines the `Result` container and the `Results` helpers used to build and resolve it.
//! A `Result` carries either a success value or an error value; the variant is the only discriminator,
//! so `Result<T, T>` is never ambiguous.

use std::fmt::Display;
use std::future::{Future, IntoFuture, Ready};
use std::pin::Pin;

/// A container representing the result of an action.
///
/// `Success` holds the value of a successful action, `Failure` holds the error of an unsuccessful one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<V = (), E = String> {
    Success(V),
    Failure(E),
}

/// A pending computation that yields a `Result`.
pub type ResultPromise<'a, V = (), E = String> =
    Pin<Box<dyn Future<Output = Result<V, E>> + Send + 'a>>;

impl<V, E> Result<V, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Result::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Result::Success(v) => Some(v),
            Result::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Result::Success(_) => None,
            Result::Failure(e) => Some(e),
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Result::Success(v) => Some(v),
            Result::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Result::Success(_) => None,
            Result::Failure(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Result::Success(v) => Result::Success(v),
            Result::Failure(e) => Result::Failure(e),
        }
    }

    /// Convert into the standard library result, keeping the error payload as is.
    pub fn into_std(self) -> core::result::Result<V, E> {
        match self {
            Result::Success(v) => Ok(v),
            Result::Failure(e) => Err(e),
        }
    }
}

impl<V, E: Display> Result<V, E> {
    /// Write a warning log for a failed result and hand the result back untouched.
    /// # Arguments
    /// * `context` - The prefix of the log message, usually the name of the failed action
    pub fn log_failure(self, context: &str) -> Self {
        if let Result::Failure(e) = &self {
            log::warn!("{context}: {e}");
        }
        self
    }
}

impl<V, E> From<core::result::Result<V, E>> for Result<V, E> {
    fn from(value: core::result::Result<V, E>) -> Self {
        match value {
            Ok(v) => Result::Success(v),
            Err(e) => Result::Failure(e),
        }
    }
}

impl<V, E> From<Result<V, E>> for core::result::Result<V, E> {
    fn from(value: Result<V, E>) -> Self {
        value.into_std()
    }
}

// An already computed result is a pending computation that is ready right away.
impl<V, E> IntoFuture for Result<V, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        std::future::ready(self)
    }
}

/// Static helpers to construct and resolve `Result` values.
/// `Results` has no variants and cannot be instantiated.
pub enum Results {}

impl Results {
    /// Returns a success result wrapper with an underlying value.
    pub fn success<V, E>(value: V) -> Result<V, E> {
        Result::Success(value)
    }

    /// Returns an unsuccessful result wrapper with an underlying error.
    pub fn error<V, E>(err: E) -> Result<V, E> {
        Result::Failure(err)
    }

    /// The no-argument form of `success`, carrying a `()` payload.
    pub fn empty_success<E>() -> Result<(), E> {
        Result::Success(())
    }

    /// The no-argument form of `error`, carrying a `()` payload.
    pub fn empty_error<V>() -> Result<V, ()> {
        Result::Failure(())
    }

    /// Resolve a result to its value.
    /// # Arguments
    /// * `result` - The wrapped value being resolved
    /// # Returns
    /// * `Ok` with the underlying value if the result is successful
    /// * `Err` with the underlying error, unchanged, if the result is unsuccessful
    pub fn resolve_sync<V, E>(result: Result<V, E>) -> core::result::Result<V, E> {
        result.into_std()
    }

    /// Resolve a result or a pending result to its value.
    /// Awaits the pending computation first, then behaves like `resolve_sync`.
    /// # Arguments
    /// * `result` - A `Result`, a `ResultPromise` or any future yielding a `Result`
    pub async fn resolve<V, E, R>(result: R) -> core::result::Result<V, E>
    where
        R: IntoFuture<Output = Result<V, E>>,
    {
        Self::resolve_sync(result.await)
    }
}
