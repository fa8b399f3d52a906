use std::fmt::{Debug, Display};

use crate::{attempt::Attempt, result::Result};

/// The joint outcome of two independent fallible computations, as produced by
/// [`Attempt::and`]. Succeeds only if both did, otherwise holds the first failure.
#[derive(Debug)]
#[must_use]
pub struct BiAttempt<T, D>(Attempt<(T, D)>);

impl<T, D> BiAttempt<T, D> {
    pub fn is_successful(&self) -> bool {
        self.0.is_successful()
    }

    pub fn is_consumed(&self) -> bool {
        self.0.is_consumed()
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        self.0.error()
    }

    pub fn on_success(self, action: impl FnOnce(&T, &D)) -> Self {
        Self(self.0.on_success(|(first, second)| action(first, second)))
    }

    pub fn ok(self, action: impl FnOnce(&T, &D)) -> Self {
        self.on_success(action)
    }

    pub fn on_fail(self, action: impl FnOnce(&anyhow::Error)) -> Self {
        Self(self.0.on_fail(action))
    }

    pub fn fail(self, action: impl FnOnce(&anyhow::Error)) -> Self {
        self.on_fail(action)
    }

    pub fn on_fail_kind<K>(self, action: impl FnOnce(&K)) -> Self
    where
        K: Display + Debug + Send + Sync + 'static,
    {
        Self(self.0.on_fail_kind(action))
    }

    pub fn fail_kind<K>(self, action: impl FnOnce(&K)) -> Self
    where
        K: Display + Debug + Send + Sync + 'static,
    {
        self.on_fail_kind(action)
    }

    pub fn map<R>(self, mapper: impl FnOnce(T, D) -> R) -> Attempt<R> {
        self.0.map(|(first, second)| mapper(first, second))
    }

    pub fn get(self) -> Result<(T, D)> {
        self.0.get()
    }

    pub fn or_else(self, default: (T, D)) -> (T, D) {
        self.0.or_else(default)
    }

    pub fn or_else_get(self, supplier: impl FnOnce() -> (T, D)) -> (T, D) {
        self.0.or_else_get(supplier)
    }

    pub fn wrap(self) -> Result<(T, D)> {
        self.0.wrap()
    }

    pub fn wrap_msg(self, message: impl Into<String>) -> Result<(T, D)> {
        self.0.wrap_msg(message)
    }

    pub fn wrap_with<W>(
        self,
        wrapper: impl FnOnce(anyhow::Error) -> W,
    ) -> std::result::Result<(T, D), W> {
        self.0.wrap_with(wrapper)
    }

    pub fn wrap_into<W>(self) -> std::result::Result<(T, D), W>
    where
        W: From<anyhow::Error>,
    {
        self.0.wrap_into()
    }

    pub fn into_attempt(self) -> Attempt<(T, D)> {
        self.0
    }
}

impl<T, D> From<Attempt<(T, D)>> for BiAttempt<T, D> {
    fn from(attempt: Attempt<(T, D)>) -> Self {
        Self(attempt)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, num::ParseIntError};

    use pretty_assertions::assert_eq;

    use crate::{error::Error, try_utils::run};

    use super::*;

    fn parse(raw: &'static str) -> impl FnOnce() -> std::result::Result<i32, ParseIntError> {
        move || raw.parse()
    }

    #[test]
    fn consumes_both_values() {
        let seen = RefCell::new(None);
        let attempt = run(parse("12"))
            .and(parse("30"))
            .ok(|first, second| *seen.borrow_mut() = Some((*first, *second)))
            .fail(|error| panic!("unexpected failure: {error}"));
        assert_eq!(seen.into_inner(), Some((12, 30)));
        assert_eq!(attempt.map(|first, second| first + second).get().unwrap(), 42);
    }

    #[test]
    fn failure_skips_success_handler() {
        let fired = RefCell::new(Vec::new());
        let attempt = run(parse("12"))
            .and(parse("thirty"))
            .on_success(|_, _| fired.borrow_mut().push("ok"))
            .on_fail_kind::<ParseIntError>(|_| fired.borrow_mut().push("parse"))
            .on_fail(|_| fired.borrow_mut().push("generic"));
        assert!(!attempt.is_successful());
        assert!(attempt.is_consumed());
        assert_eq!(fired.into_inner(), ["parse"]);
    }

    #[test]
    fn fallbacks() {
        assert_eq!(run(parse("x")).and(parse("1")).or_else((0, 0)), (0, 0));
        assert_eq!(
            run(parse("1")).and(parse("2")).or_else_get(|| (0, 0)),
            (1, 2)
        );
    }

    #[test]
    fn wraps_failure() {
        let err = run(parse("1")).and(parse("")).wrap_msg("bad pair").unwrap_err();
        assert!(matches!(err, Error::WrappedWithMessage { .. }));
        assert!(err.captured_failure().unwrap().is::<ParseIntError>());

        let err = run(parse("")).and(parse("1")).get().unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
    }

    #[test]
    fn into_attempt() {
        let attempt = run(parse("4")).and(parse("2")).into_attempt();
        assert_eq!(attempt.into_result().unwrap(), (4, 2));
    }
}
