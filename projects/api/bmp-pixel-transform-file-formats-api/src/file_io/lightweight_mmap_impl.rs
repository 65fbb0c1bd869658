//! File I/O implementation using lightweight-mmap.

use crate::file_io::FileOperationResult;
use crate::pipeline::TransformPipeline;
use crate::traits::{FileFormatDetection, FileFormatHandler};
use crate::TransformError;
use bmp_pixel_transform_common::Raster;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::debug;
use std::path::Path;

/// Decode a file using a specific handler.
///
/// This function memory-maps the input file and decodes it with `handler`.
///
/// # Returns
///
/// The decoded raster. Returns [`TransformError::EmptyInput`] for a zero-length file.
pub fn read_raster_file<H: FileFormatHandler + ?Sized>(
    handler: &H,
    input_path: &Path,
) -> FileOperationResult<Raster> {
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_size = input_handle.size()? as usize;
    if input_size == 0 {
        return Err(TransformError::EmptyInput.into());
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    Ok(handler.decode(input_mapping.as_slice())?)
}

/// Encode a raster to a file using a specific handler.
///
/// The output file is created (or truncated) with the exact encoded size, memory-mapped,
/// and the raster is encoded directly into the mapping.
///
/// # Arguments
///
/// * `handler` - The file format handler to encode with
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
/// * `raster` - The raster to write
pub fn write_raster_file<H: FileFormatHandler + ?Sized>(
    handler: &H,
    output_path: &Path,
    raster: &Raster,
) -> FileOperationResult<()> {
    let output_size = handler.encoded_len(raster)?;
    let output_handle = ReadWriteFileHandle::create_preallocated(output_path, output_size as i64)?;
    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, output_size)?;

    // Encode directly into the memory-mapped output
    let written = handler.encode_into(raster, output_mapping.as_mut_slice())?;
    debug!("Wrote {written} bytes to {}", output_path.display());
    Ok(())
}

/// Transform a file using a specific handler and pipeline.
///
/// This function memory-maps the input file, decodes it, runs the pipeline, and writes
/// the encoded result to the output file.
///
/// # Arguments
///
/// * `handler` - The file format handler to use
/// * `input_path` - Path to the input file
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
/// * `pipeline` - The filters to run
pub fn transform_file_with_handler<H: FileFormatHandler + ?Sized>(
    handler: &H,
    input_path: &Path,
    output_path: &Path,
    pipeline: &TransformPipeline,
) -> FileOperationResult<()> {
    let raster = read_raster_file(handler, input_path)?;
    let raster = pipeline.apply(raster);
    write_raster_file(handler, output_path, &raster)
}

/// Transform a file using multiple handlers with automatic format detection.
///
/// This function tries each handler in sequence until one accepts the file format,
/// then transforms the file using that handler and the provided pipeline.
///
/// # Arguments
///
/// * `handlers` - Iterator of file format handlers that implement [`FileFormatDetection`]
/// * `input_path` - Path to the input file
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
/// * `pipeline` - The filters to run
///
/// # Returns
///
/// Result indicating success or error. Returns [`TransformError::NoSupportedHandler`]
/// if no handler can process the file.
///
/// # Example
///
/// ```
/// use bmp_pixel_transform_file_formats_api::{
///     file_io::{transform_file_with_multiple_handlers, FileOperationResult},
///     TransformPipeline,
/// };
/// use bmp_pixel_transform_bmp::BmpHandler;
/// use bmp_pixel_transform_filters::Filter;
/// use std::path::Path;
///
/// fn example_transform_file_multiple_handlers(
///     input_path: &Path,
///     output_path: &Path
/// ) -> FileOperationResult<()> {
///     let handlers = [BmpHandler];
///     let pipeline = TransformPipeline::new().with_filter(Filter::Vignette);
///     transform_file_with_multiple_handlers(handlers, input_path, output_path, &pipeline)?;
///     Ok(())
/// }
/// ```
pub fn transform_file_with_multiple_handlers<HandlerIterator, Handler>(
    handlers: HandlerIterator,
    input_path: &Path,
    output_path: &Path,
    pipeline: &TransformPipeline,
) -> FileOperationResult<()>
where
    HandlerIterator: IntoIterator<Item = Handler>,
    Handler: FileFormatDetection,
{
    // Extract file extension from input path for faster format detection
    let file_extension = super::extract_lowercase_extension(input_path);
    let file_extension_ref = file_extension.as_deref();

    // Input is unmapped and closed before the output is created.
    let (handler, raster) = {
        let input_handle = ReadOnlyFileHandle::open(input_path)?;
        let input_size = input_handle.size()? as usize;
        if input_size == 0 {
            return Err(TransformError::EmptyInput.into());
        }

        let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
        let input_data = input_mapping.as_slice();

        // Try each handler until one accepts the file
        let Some(handler) = handlers
            .into_iter()
            .find(|handler| handler.can_handle(input_data, file_extension_ref))
        else {
            // No handler could process the file
            return Err(TransformError::NoSupportedHandler.into());
        };

        let raster = handler.decode(input_data)?;
        (handler, raster)
    };

    let raster = pipeline.apply(raster);
    write_raster_file(&handler, output_path, &raster)
}
