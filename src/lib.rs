#![deny(missing_debug_implementations)]

//! Chainable success/failure values for fallible calls.
//!
//! ```
//! use std::{io, num::ParseIntError};
//!
//! let port: u16 = tryutils::run(|| std::fs::read_to_string("port.txt"))
//!     .or(|| Ok::<_, io::Error>("8080".to_owned()))
//!     .flat_map(|raw| tryutils::run(|| raw.trim().parse::<u16>()))
//!     .fail_kind::<ParseIntError>(|err| eprintln!("bad port: {err}"))
//!     .fail(|err| eprintln!("cannot read port: {err}"))
//!     .or_else(8080);
//! assert!(port > 0);
//! ```

mod attempt;
mod bi_attempt;
mod error;
mod result;
mod try_utils;

pub use crate::{
    attempt::{Attempt, Failure},
    bi_attempt::BiAttempt,
    error::Error,
    result::Result,
    try_utils::{run, run_void, uncheck, uncheck_void},
};
