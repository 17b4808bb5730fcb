//! Inline test harness
//!
//! Runs named groups of assertions and reports every outcome as it happens.
//! A failed assertion is printed, never escalated; the rest of the body keeps
//! running. Callers that want a process-level verdict read the [`Summary`]
//! afterwards instead of relying on the checks themselves to abort.

use std::io::{self, Write};

use serde::Serialize;

/// Aggregate pass/fail counts for a harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Assertion recorder with pluggable output streams.
///
/// Passing traces go to the `out` stream, failing traces to the `err` stream.
/// [`Harness::new`] binds the process stdout/stderr; tests hand in byte
/// buffers to capture the trace.
pub struct Harness<O: Write, E: Write> {
    out: O,
    err: E,
    passed: usize,
    failed: usize,
}

impl Harness<io::Stdout, io::Stderr> {
    pub fn new() -> Self {
        Harness::with_streams(io::stdout(), io::stderr())
    }
}

impl Default for Harness<io::Stdout, io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> Harness<O, E> {
    pub fn with_streams(out: O, err: E) -> Self {
        Harness {
            out,
            err,
            passed: 0,
            failed: 0,
        }
    }

    /// Announce a named test and execute its body.
    ///
    /// Only assertions have recorder semantics: a panic inside `body`
    /// propagates to the caller untouched.
    pub fn run_test<F>(&mut self, description: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        let _ = writeln!(self.out, "Running test: {}", description);
        body(self);
    }

    /// Record one boolean check under its source-text label.
    ///
    /// Reports and counts the outcome; never returns an error and never
    /// panics. Each trace line is written in a single call so interleaved
    /// callers still get whole lines.
    pub fn assert_check(&mut self, condition_text: &str, condition_value: bool) {
        if condition_value {
            self.passed += 1;
            let _ = writeln!(self.out, "Assertion passed: {}", condition_text);
        } else {
            self.failed += 1;
            let _ = writeln!(self.err, "Assertion failed: {}", condition_text);
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.passed,
            failed: self.failed,
        }
    }

    /// Consume the harness and hand back its output streams.
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Announce a named test on stdout and execute its body.
pub fn run_test<F: FnOnce()>(description: &str, body: F) {
    println!("Running test: {}", description);
    body();
}

/// Report one boolean check: a passing line on stdout, a failing line on
/// stderr. Execution always continues.
pub fn assert_check(condition_text: &str, condition_value: bool) {
    if condition_value {
        println!("Assertion passed: {}", condition_text);
    } else {
        eprintln!("Assertion failed: {}", condition_text);
    }
}

/// Check a condition, using its source text as the trace label.
///
/// With a harness as the first argument the outcome is recorded on it;
/// with a bare condition the free [`assert_check`] reports to stdout/stderr.
///
/// ```
/// use spotcheck::{check, Harness};
///
/// let mut harness = Harness::new();
/// harness.run_test("arithmetic", |h| {
///     check!(h, 2 + 3 == 5);
/// });
/// check!(1 + 1 == 2);
/// ```
#[macro_export]
macro_rules! check {
    ($harness:expr, $condition:expr) => {
        $harness.assert_check(stringify!($condition), $condition)
    };
    ($condition:expr) => {
        $crate::harness::assert_check(stringify!($condition), $condition)
    };
}
