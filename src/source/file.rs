//! JSON dataset files on disk.

use crate::model::error::LoadError;
use crate::model::TicketDetail;
use std::path::Path;

/// Read and parse a dataset file.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file does not exist,
/// `LoadError::Io` for other read failures, and any parse/validation error
/// from [`super::parse_dataset`].
pub fn load(path: &Path) -> Result<Vec<TicketDetail>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    super::parse_dataset(&contents)
}
