use super::BmpHandler;
use crate::bmp::likely_bmp;
use bmp_pixel_transform_file_formats_api::FileFormatDetection;

impl FileFormatDetection for BmpHandler {
    fn can_handle(&self, input: &[u8], file_extension: Option<&str>) -> bool {
        // Reject known extensions we don't own, to reduce false positives.
        if let Some(extension) = file_extension {
            if !self.supported_extensions().contains(&extension) {
                return false;
            }
        }

        likely_bmp(input)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["bmp", "dib"]
    }
}
