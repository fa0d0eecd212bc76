//! `memolite decode` command implementation.

use std::path::PathBuf;

use clap::Args;
use memolite_renderer::decode_raw;

use super::{read_source, write_target};
use crate::error::CliError;

/// Arguments for the decode command.
#[derive(Args)]
pub(crate) struct DecodeArgs {
    /// File holding URI-component encoded memo text (default: read stdin).
    input: Option<PathBuf>,

    /// Write decoded text to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DecodeArgs {
    /// Execute the decode command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or is not valid encoded UTF-8.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = read_source(self.input.as_deref())?;
        let text = decode_raw(source.trim())?;
        tracing::debug!(encoded_len = source.len(), decoded_len = text.len(), "Decoded memo");
        write_target(self.output.as_deref(), &text)
    }
}
