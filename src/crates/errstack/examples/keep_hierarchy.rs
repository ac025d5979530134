//! Example: keeping the full hierarchy across several call levels
//!
//! `encrypt` fails, `encode` records that failure under its own sentinel,
//! and `obfuscate` wraps everything with a higher-level sentinel plus some
//! context. Only the sentinels take part in identity checks; the rest is
//! kept for the pretty-printed report.

use errstack::{is, Stack, StackContext};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
enum PipelineError {
    #[error("unable to obfuscate data")]
    Obfuscate,
    #[error("encoding failed")]
    Encode,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let Err(err) = obfuscate() else {
        return ExitCode::SUCCESS;
    };

    if is(&err, &PipelineError::Obfuscate) {
        tracing::error!("\n{}", err.roll_out().pretty_print());
    } else {
        tracing::warn!("unknown error: {}", err);
    }

    ExitCode::FAILURE
}

fn obfuscate() -> Result<(), Stack> {
    encode()
        .wrap_err(PipelineError::Obfuscate)
        .add_err("some context of what happened")
}

fn encode() -> Result<(), Stack> {
    encrypt().map_err(|err| Stack::new(PipelineError::Encode).add(err))
}

fn encrypt() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("encryption error"))
}
