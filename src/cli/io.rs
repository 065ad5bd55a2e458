//! Terminal I/O helpers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::errors::CliResult;

/// Read page content from a file, or stdin when no file is given.
pub fn read_content(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
