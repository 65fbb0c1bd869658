use bmp_pixel_transform_file_formats_api::file_io::FileOperationError;
use lightweight_mmap::handles::HandleOpenError;
use lightweight_mmap::mmap::MmapError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{}: {source}", .path.display())]
    FileOperation {
        path: PathBuf,
        #[source]
        source: FileOperationError,
    },
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),
    #[error("{} is not inside the input directory", .0.display())]
    OutsideInputDirectory(PathBuf),
}
