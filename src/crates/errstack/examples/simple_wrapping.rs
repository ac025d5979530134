//! Example: wrapping a low-level failure with a sentinel
//!
//! A cache lookup fails, the fetch layer wraps that failure with its own
//! sentinel, and `main` recognises the sentinel before printing the whole
//! hierarchy.

use errstack::{is, Stack};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("unable to fetch data")]
struct DataFetching;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    match fetch_some_data() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is(&err, &DataFetching) => {
            tracing::error!("\n{}", Stack::new(err).roll_out().pretty_print());
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::warn!("unknown error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn fetch_some_data() -> Result<(), Stack> {
    cache().map_err(|cache_err| Stack::new(cache_err).wrap(DataFetching))
}

fn cache() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("some cache error"))
}
