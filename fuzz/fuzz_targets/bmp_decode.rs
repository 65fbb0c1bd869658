#![no_main]

// Feeds arbitrary bytes to the BMP decoder. Decoding must never panic, and anything
// that decodes must re-encode into a container of the expected canonical size.

use bmp_pixel_transform_bmp::bmp::{decode_bmp, encode_bmp, encoded_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raster) = decode_bmp(data) else {
        return;
    };

    let encoded = encode_bmp(&raster).expect("decoded raster should re-encode");
    assert_eq!(encoded.len(), encoded_len(&raster).unwrap());
    assert_eq!(decode_bmp(&encoded).unwrap(), raster);
});
