//! Spotcheck
//!
//! A small library for ad-hoc inline checking: a named test harness that
//! reports every assertion and never aborts the surrounding program, plus
//! bounds-checked slicing and stepped range generation over sequences.

pub mod error;
pub mod harness;
pub mod seq;

pub use error::{Result, SpotcheckError};
pub use harness::{assert_check, run_test, Harness, Summary};
pub use seq::{generate_range, slice};
