//! Slice based convenience functions: decode, run a pipeline, encode.

use crate::error::{TransformError, TransformResult};
use crate::pipeline::TransformPipeline;
use crate::traits::{FileFormatDetection, FileFormatHandler};
use bmp_pixel_transform_common::Raster;
use log::{debug, warn};

/// Decode `input` with `handler`, run `pipeline` over the raster and encode the result.
///
/// # Parameters
///
/// - `handler`: Handler for the container format of `input`
/// - `input`: A complete container
/// - `pipeline`: Filters to run, and the channel policy between them
///
/// # Returns
///
/// The encoded output container, or an error if the input is empty, fails the handler's
/// validation or the result cannot be encoded.
pub fn transform_slice<H: FileFormatHandler + ?Sized>(
    handler: &H,
    input: &[u8],
    pipeline: &TransformPipeline,
) -> TransformResult<Vec<u8>> {
    if input.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    let raster = handler.decode(input).inspect_err(|e| warn!("Rejected input: {e}"))?;
    debug!(
        "Decoded {}x{} raster from {} bytes",
        raster.width(),
        raster.height(),
        input.len()
    );

    let raster = pipeline.apply(raster);
    Ok(handler.encode(&raster)?)
}

/// Decode `input` with the first handler in `handlers` that accepts it.
///
/// # Parameters
///
/// - `handlers`: Candidate handlers, tried in order
/// - `input`: A complete container
/// - `file_extension`: Lowercase extension of the source file, if known
///
/// # Returns
///
/// The decoded raster, [`TransformError::NoSupportedHandler`] if no handler accepts the input,
/// or the accepting handler's decode error.
pub fn decode_with_multiple_handlers<HandlerIterator, Handler>(
    handlers: HandlerIterator,
    input: &[u8],
    file_extension: Option<&str>,
) -> TransformResult<Raster>
where
    HandlerIterator: IntoIterator<Item = Handler>,
    Handler: FileFormatDetection,
{
    if input.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    for handler in handlers {
        if handler.can_handle(input, file_extension) {
            return Ok(handler.decode(input)?);
        }
    }

    Err(TransformError::NoSupportedHandler)
}

/// Like [`transform_slice`], but picks the first handler in `handlers` that accepts `input`.
///
/// The output is written in the same container format as the input.
pub fn transform_slice_with_multiple_handlers<HandlerIterator, Handler>(
    handlers: HandlerIterator,
    input: &[u8],
    file_extension: Option<&str>,
    pipeline: &TransformPipeline,
) -> TransformResult<Vec<u8>>
where
    HandlerIterator: IntoIterator<Item = Handler>,
    Handler: FileFormatDetection,
{
    if input.is_empty() {
        return Err(TransformError::EmptyInput);
    }

    for handler in handlers {
        if handler.can_handle(input, file_extension) {
            return transform_slice(&handler, input, pipeline);
        }
    }

    Err(TransformError::NoSupportedHandler)
}
