//! CLI command implementations.

pub(crate) mod decode;
pub(crate) mod render;

pub(crate) use decode::DecodeArgs;
pub(crate) use render::RenderArgs;

use std::io::{self, Write};
use std::path::Path;

use crate::error::CliError;

/// Read memo text from a file, or from stdin when no path is given.
pub(crate) fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

/// Write text to a file, or to stdout when no path is given.
pub(crate) fn write_target(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
