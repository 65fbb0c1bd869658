use crate::error::CliError;
use crate::util::{
    all_handlers, canonicalize_existing_cli_path, find_all_files, handle_process_entry_error,
    target_path_for, Throughput,
};
use argh::FromArgs;
use bmp_pixel_transform_common::ChannelPolicy;
use bmp_pixel_transform_file_formats_api::{file_io, TransformPipeline};
use bmp_pixel_transform_filters::Filter;
use bytesize::ByteSize;
use log::info;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
    time::Instant,
};

#[derive(FromArgs, Debug)]
/// Apply filters to a BMP file, or to every BMP file under a directory
#[argh(subcommand, name = "transform")]
pub struct TransformCmd {
    /// input file or directory path
    #[argh(option, from_str_fn(canonicalize_existing_cli_path))]
    pub input: PathBuf,

    /// output file path, or output directory path if the input is a directory
    #[argh(option)]
    pub output: PathBuf,

    /// filter to apply, in order; may be repeated. e.g. clarendon:0.5, rotate:-1, enlarge:2x3.
    /// See `list-filters`.
    #[argh(option)]
    pub filter: Vec<Filter>,

    /// clamp channels into 0-255 after every filter
    #[argh(switch)]
    pub clamp: bool,
}

impl TransformCmd {
    fn pipeline(&self) -> TransformPipeline {
        let policy = if self.clamp {
            ChannelPolicy::Clamped
        } else {
            ChannelPolicy::Unclamped
        };

        TransformPipeline::new()
            .with_filters(self.filter.iter().copied())
            .channel_policy(policy)
    }
}

pub fn handle_transform_command(cmd: TransformCmd) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = cmd.pipeline();
    if pipeline.is_empty() {
        info!("No filters given; files will be re-encoded unchanged.");
    }

    if cmd.input.is_file() {
        let bytes_processed = AtomicU64::new(0);
        process_file_transform(&cmd.input, &cmd.output, &pipeline, &bytes_processed)?;
        println!("Wrote {}", cmd.output.display());
        return Ok(());
    }

    // Collect all files
    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;

    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }

    fs::create_dir_all(&cmd.output)?;
    let output = fs::canonicalize(&cmd.output)?;
    println!("Found {} files to process\n", entries.len());

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let files_written = AtomicUsize::new(0);

    let process = |entry: &fs::DirEntry| {
        let path = entry.path();
        let result = target_path_for(&path, &cmd.input, &output).and_then(|target| {
            process_file_transform(&path, &target, &pipeline, &bytes_processed)
        });
        if handle_process_entry_error(result) {
            files_written.fetch_add(1, Ordering::Relaxed);
        }
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let elapsed = start.elapsed();
    let total_bytes = bytes_processed.load(Ordering::Relaxed);
    let data_size = ByteSize(total_bytes);
    let throughput = Throughput::from_elapsed(total_bytes, elapsed);

    println!("\n=== Transform Complete ===");
    println!(
        "Files written: {} of {}",
        files_written.load(Ordering::Relaxed),
        entries.len()
    );
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {data_size}");
    println!("Throughput: {throughput}");

    Ok(())
}

pub fn process_file_transform(
    path: &Path,
    target_path: &Path,
    pipeline: &TransformPipeline,
    bytes_processed: &AtomicU64,
) -> Result<(), CliError> {
    // Create output directory if needed
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Get file size for throughput calculation
    if let Ok(metadata) = fs::metadata(path) {
        bytes_processed.fetch_add(metadata.len(), Ordering::Relaxed);
    }

    file_io::transform_file_with_multiple_handlers(all_handlers(), path, target_path, pipeline)
        .map_err(|source| CliError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
}
