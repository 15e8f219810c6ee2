pub mod output;

pub use output::{create_writer, AnalysisReport, CategoryCounts, OutputFormat, OutputWriter};

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

/// Read a whole text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|e| Error::io_at(e, path))
        }
        _ => {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Human-readable name for an input, used in report headers.
pub fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}
