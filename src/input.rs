use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole input: the named file when a path is given, otherwise
/// standard input until end-of-stream.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| Error::InputFile(path.to_path_buf(), e))?;
            debug!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            debug!(bytes = text.len(), "read stdin");
            Ok(text)
        }
    }
}
