use super::BmpHandler;
use crate::bmp::{decode_bmp, encode_bmp_into, encoded_len};
use bmp_pixel_transform_common::Raster;
use bmp_pixel_transform_file_formats_api::{FileFormatHandler, FormatHandlerResult};

impl FileFormatHandler for BmpHandler {
    fn decode(&self, input: &[u8]) -> FormatHandlerResult<Raster> {
        decode_bmp(input)
    }

    fn encoded_len(&self, raster: &Raster) -> FormatHandlerResult<usize> {
        encoded_len(raster)
    }

    fn encode_into(&self, raster: &Raster, output: &mut [u8]) -> FormatHandlerResult<usize> {
        encode_bmp_into(raster, output)
    }
}
