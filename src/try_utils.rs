use crate::{attempt::Attempt, result::Result};

/// Runs a fallible computation, capturing its outcome as an [`Attempt`].
///
/// Never fails itself: an `Err` from `computation` becomes a failed attempt. Panics are not
/// captured.
pub fn run<T, E>(computation: impl FnOnce() -> std::result::Result<T, E>) -> Attempt<T>
where
    E: Into<anyhow::Error>,
{
    computation().into()
}

/// Runs a fallible side-effect.
pub fn run_void<E>(action: impl FnOnce() -> std::result::Result<(), E>) -> Attempt<()>
where
    E: Into<anyhow::Error>,
{
    run(action)
}

/// Runs a fallible computation, wrapping any failure as an [`Error::Wrapped`](crate::Error).
pub fn uncheck<T, E>(computation: impl FnOnce() -> std::result::Result<T, E>) -> Result<T>
where
    E: Into<anyhow::Error>,
{
    run(computation).wrap()
}

pub fn uncheck_void<E>(action: impl FnOnce() -> std::result::Result<(), E>) -> Result<()>
where
    E: Into<anyhow::Error>,
{
    run_void(action).wrap()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io};

    use pretty_assertions::assert_eq;

    use crate::error::Error;

    use super::*;

    fn missing_file() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "missing.txt")
    }

    #[test]
    fn run_captures_value() {
        assert_eq!(run(|| Ok::<_, io::Error>("result")).get().unwrap(), "result");
    }

    #[test]
    fn run_captures_failure() {
        let attempt = run(|| -> io::Result<&'static str> { Err(missing_file()) });
        assert!(!attempt.is_successful());
        assert_eq!(
            attempt
                .error()
                .unwrap()
                .downcast_ref::<io::Error>()
                .unwrap()
                .kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn run_void() {
        let effects = RefCell::new(0);
        let attempt = super::run_void(|| {
            *effects.borrow_mut() += 1;
            Ok::<_, io::Error>(())
        });
        assert!(attempt.is_successful());
        assert_eq!(effects.into_inner(), 1);

        let attempt = super::run_void(|| Err(missing_file()));
        assert!(attempt.error().unwrap().is::<io::Error>());
    }

    #[test]
    fn uncheck_returns_value() {
        assert_eq!(uncheck(|| Ok::<_, io::Error>("result")).unwrap(), "result");
        uncheck_void(|| Ok::<_, io::Error>(())).unwrap();
    }

    #[test]
    fn uncheck_wraps_failure() {
        let err = uncheck(|| -> io::Result<()> { Err(missing_file()) }).unwrap_err();
        assert!(matches!(err, Error::Wrapped { .. }));
        assert!(err.captured_failure().unwrap().is::<io::Error>());

        let err = uncheck_void(|| Err(missing_file())).unwrap_err();
        assert!(err.captured_failure().unwrap().is::<io::Error>());
    }

    #[test]
    fn nested_uncheck_is_captured() {
        let attempt = run(|| uncheck(|| -> io::Result<()> { Err(missing_file()) }));
        let Some(Error::Wrapped { cause }) = attempt.error().unwrap().downcast_ref::<Error>()
        else {
            panic!("incorrect error");
        };
        assert!(cause.is::<io::Error>());
    }
}
