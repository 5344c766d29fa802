//! Integration tests for the sjphy binary.

mod helpers;

#[cfg(unix)]
mod cancel_test;
mod cli_test;
mod experiments_test;
mod profile_test;
