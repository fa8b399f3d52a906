use std::{
    any,
    fmt::{Debug, Display},
};

use log::{debug, trace};

use crate::{bi_attempt::BiAttempt, error::Error, result::Result, try_utils::run};

/// The outcome of a fallible computation, either the value it produced or the failure it
/// signalled.
///
/// Attempts are created by [`run`](crate::run) and then threaded through a chain of calls, each
/// of which takes the attempt by value and hands back either the same attempt or a new one.
/// Failures travel through the chain as data and only leave it as errors at an explicit escape
/// hatch: [`get`](Self::get), [`wrap`](Self::wrap) and friends.
#[derive(Debug)]
#[must_use]
pub enum Attempt<T> {
    Success(T),
    Failure(Failure),
}

/// A captured failure.
///
/// The first kind-specific handler to match a failure consumes it, after which no further
/// failure handlers on the same attempt fire.
#[derive(Debug)]
pub struct Failure {
    error: anyhow::Error,
    consumed: bool,
}

impl Failure {
    pub(crate) fn new(error: anyhow::Error) -> Self {
        Self {
            error,
            consumed: false,
        }
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    pub fn into_error(self) -> anyhow::Error {
        self.error
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl<T> Attempt<T> {
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether a kind-specific handler has already processed this attempt's failure. Always
    /// false for successes.
    pub fn is_consumed(&self) -> bool {
        match self {
            Self::Success(_) => false,
            Self::Failure(failure) => failure.consumed,
        }
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.error),
        }
    }

    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    pub fn ok(self, action: impl FnOnce(&T)) -> Self {
        self.on_success(action)
    }

    /// Calls `action` with the captured failure unless a kind-specific handler has already
    /// consumed it. Does not itself consume the failure.
    pub fn on_fail(self, action: impl FnOnce(&anyhow::Error)) -> Self {
        if let Self::Failure(failure) = &self {
            if !failure.consumed {
                action(&failure.error);
            }
        }
        self
    }

    pub fn fail(self, action: impl FnOnce(&anyhow::Error)) -> Self {
        self.on_fail(action)
    }

    /// Calls `action` with the captured failure if it has not yet been consumed and it is of
    /// kind `K`, then marks it consumed.
    ///
    /// A failure is of kind `K` if its error, or any context attached to it, is a `K`. Handler
    /// order matters: only the first matching handler in a chain fires, and a generic
    /// [`on_fail`](Self::on_fail) placed after it is skipped. Handlers which do not match leave
    /// the failure untouched.
    pub fn on_fail_kind<K>(mut self, action: impl FnOnce(&K)) -> Self
    where
        K: Display + Debug + Send + Sync + 'static,
    {
        if let Self::Failure(failure) = &mut self {
            if !failure.consumed {
                if let Some(error) = failure.error.downcast_ref::<K>() {
                    action(error);
                    failure.consumed = true;
                    debug!("failure consumed as {}", any::type_name::<K>());
                }
            }
        }
        self
    }

    pub fn fail_kind<K>(self, action: impl FnOnce(&K)) -> Self
    where
        K: Display + Debug + Send + Sync + 'static,
    {
        self.on_fail_kind(action)
    }

    pub fn map<R>(self, mapper: impl FnOnce(T) -> R) -> Attempt<R> {
        match self {
            Self::Success(value) => Attempt::Success(mapper(value)),
            Self::Failure(failure) => failure.retype(),
        }
    }

    /// Feeds a successful value into a second fallible step. A failure is passed along and
    /// the step is never run, so across a chain of steps the first failure wins.
    pub fn flat_map<R>(self, mapper: impl FnOnce(T) -> Attempt<R>) -> Attempt<R> {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(failure) => failure.retype(),
        }
    }

    /// Replaces a failure with the outcome of `fallback`. Successes are returned untouched and
    /// `fallback` is not run. If `fallback` fails too, its failure replaces the original one.
    pub fn or<E>(self, fallback: impl FnOnce() -> std::result::Result<T, E>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        if self.is_successful() {
            return self;
        }
        trace!("attempt failed, trying fallback");
        run(fallback)
    }

    /// Pairs a successful value with the outcome of a second, independent computation. A failure
    /// is passed along and `second` is not run.
    pub fn and<D, E>(self, second: impl FnOnce() -> std::result::Result<D, E>) -> BiAttempt<T, D>
    where
        E: Into<anyhow::Error>,
    {
        self.flat_map(|value| run(second).map(|second_value| (value, second_value)))
            .into()
    }

    pub fn get(self) -> Result<T> {
        self.wrap_with(|cause| Error::InvalidState { cause })
    }

    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    pub fn wrap(self) -> Result<T> {
        self.wrap_with(|cause| Error::Wrapped { cause })
    }

    pub fn wrap_msg(self, message: impl Into<String>) -> Result<T> {
        self.wrap_with(|cause| Error::WrappedWithMessage {
            message: message.into(),
            cause,
        })
    }

    pub fn wrap_with<W>(
        self,
        wrapper: impl FnOnce(anyhow::Error) -> W,
    ) -> std::result::Result<T, W> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => {
                trace!("raising captured failure: {:#}", failure.error);
                Err(wrapper(failure.error))
            }
        }
    }

    /// Raises a captured failure as a `W`, built by `W`'s conversion from [`anyhow::Error`].
    pub fn wrap_into<W>(self) -> std::result::Result<T, W>
    where
        W: From<anyhow::Error>,
    {
        self.wrap_with(W::from)
    }

    pub fn into_result(self) -> std::result::Result<T, anyhow::Error> {
        self.wrap_with(|error| error)
    }
}

impl Failure {
    /// Moves this failure into an attempt of another value type. The new attempt owns a fresh,
    /// unconsumed failure.
    fn retype<R>(self) -> Attempt<R> {
        Attempt::Failure(Self::new(self.error))
    }
}

impl<T, E> From<std::result::Result<T, E>> for Attempt<T>
where
    E: Into<anyhow::Error>,
{
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => {
                let error = error.into();
                trace!("captured failure: {error:#}");
                Self::Failure(Failure::new(error))
            }
        }
    }
}
