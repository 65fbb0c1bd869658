use crate::error::CliError;
use bmp_pixel_transform_file_formats_api::{file_io::FileOperationError, TransformError};
use log::{debug, error};
use std::fs;
use std::path::*;

/// Recursively visits directories and collects entries.
///
/// This function traverses the directory tree rooted at `dir`, collecting all
/// directory entries into a vector. If an error occurs while reading a directory
/// or an individual entry, the error is handled gracefully and the function
/// continues with the remaining entries.
///
/// # Arguments
///
/// * `dir`: The directory to start the traversal from.
/// * `entries`: A mutable reference to the vector of entries to populate.
///
/// # Returns
///
/// A `Result` indicating whether the traversal was successful.
pub fn find_all_files(dir: &Path, entries: &mut Vec<fs::DirEntry>) -> std::io::Result<()> {
    // Gracefully handle cases where the directory cannot be read
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()), // Silently return if directory can't be read
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            // Recursively collect files.
            find_all_files(&path, entries)?;
        } else {
            entries.push(entry);
        }
    }
    Ok(())
}

/// Handles errors from processing a single file by logging them
/// (except for files no handler supports, which are skipped quietly).
///
/// # Returns
///
/// `true` if the file was processed successfully.
pub fn handle_process_entry_error(result: Result<(), CliError>) -> bool {
    match result {
        Ok(()) => true,
        Err(CliError::FileOperation {
            path,
            source: FileOperationError::Transform(TransformError::NoSupportedHandler),
        }) => {
            debug!("Skipping unsupported file {}", path.display());
            false
        }
        Err(e) => {
            error!("{e}");
            false
        }
    }
}

/// Canonicalizes a CLI path argument that must already exist.
///
/// # Arguments
///
/// * `value` - The path string to canonicalize
///
/// # Returns
///
/// A canonicalized PathBuf on success, or a String error message on failure.
pub fn canonicalize_existing_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))
}

/// Maps a file found under `input_dir` to the same relative location under `output_dir`.
pub fn target_path_for(path: &Path, input_dir: &Path, output_dir: &Path) -> Result<PathBuf, CliError> {
    let relative = path
        .strip_prefix(input_dir)
        .map_err(|_| CliError::OutsideInputDirectory(path.to_path_buf()))?;
    Ok(output_dir.join(relative))
}
