use crate::error::CliError;
use crate::util::canonicalize_existing_cli_path;
use argh::FromArgs;
use bmp_pixel_transform_bmp::bmp::{likely_bmp, parse_bmp, BmpInfo};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// Print the header of a BMP file and whether it would decode
#[argh(subcommand, name = "inspect")]
pub struct InspectCmd {
    /// input file path
    #[argh(option, from_str_fn(canonicalize_existing_cli_path))]
    pub input: PathBuf,
}

pub fn handle_inspect_command(cmd: InspectCmd) -> Result<(), Box<dyn std::error::Error>> {
    let report = inspect_file(&cmd.input)?;
    println!("File: {}", cmd.input.display());
    print!("{report}");
    Ok(())
}

/// Reads the header of the file at `path` and describes it.
pub fn inspect_file(path: &Path) -> Result<String, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Ok("Empty file\n".to_string());
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(describe(mapping.as_slice()))
}

/// Describes the header of `data` as human readable lines.
pub fn describe(data: &[u8]) -> String {
    let mut report = format!(
        "Size: {} bytes\nBM magic: {}\n",
        data.len(),
        if likely_bmp(data) { "yes" } else { "no" }
    );

    match parse_bmp(data) {
        Ok(info) => {
            report.push_str(&describe_info(&info));
            match info.validate_size(data.len()) {
                Ok(()) => report.push_str("Decodable: yes\n"),
                Err(e) => report.push_str(&format!("Decodable: no ({e})\n")),
            }
        }
        Err(e) => report.push_str(&format!("Decodable: no ({e})\n")),
    }

    report
}

fn describe_info(info: &BmpInfo) -> String {
    format!(
        "Dimensions: {}x{}\n\
         Bits per pixel: {}\n\
         Pixel array offset: {}\n\
         Row bytes: {} (+{} padding)\n\
         Stated file size: {}\n\
         Expected file size: {}\n",
        info.width,
        info.height,
        info.bits_per_pixel,
        info.data_offset,
        info.scanline_bytes(),
        info.row_padding(),
        info.file_size,
        info.expected_file_size()
    )
}
