//! Batch processing command

use crate::BatchArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Result, bail};
use dichroma_sim::Deficiency;
use std::path::{Path, PathBuf};
use rayon::prelude::*;

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, modes = args.mode.len(), "batch::run");

    let files: Vec<PathBuf> = glob::glob(&args.input)?
        .filter_map(|r| r.ok())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch processing");

    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    std::fs::create_dir_all(&args.output_dir)?;

    // One task per file; modes for a file run on the same worker
    let results: Vec<Result<usize>> = files.par_iter().map(|input| {
        process_file(
            input,
            &args.output_dir,
            &args.mode,
            args.format.as_deref(),
            args.full_range_gray,
            verbose,
        )
    }).collect();

    let mut success = 0;
    let mut failed = 0;
    let mut written = 0;
    for r in results {
        match r {
            Ok(n) => {
                success += 1;
                written += n;
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, written, "Batch processing complete");
    println!("Processed: {} success, {} failed ({} images written)", success, failed, written);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

/// `<stem>_<mode id>.<ext>` inside `output_dir`
fn output_path(input: &Path, output_dir: &Path, mode: Deficiency, format: Option<&str>) -> PathBuf {
    let stem = input.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = format.unwrap_or_else(|| {
        input.extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png")
    });

    output_dir.join(format!("{}_{}.{}", stem, mode.id(), ext))
}

fn process_file(
    input: &Path,
    output_dir: &Path,
    modes: &[Deficiency],
    format: Option<&str>,
    full_range_gray: bool,
    verbose: u8,
) -> Result<usize> {
    let raster = super::load_raster(input)?;
    debug!(input = %input.display(), w = raster.width(), h = raster.height(), "Loaded");

    for &mode in modes {
        let output = output_path(input, output_dir, mode, format);
        if verbose > 0 {
            println!("Processing {} -> {}", input.display(), output.display());
        }
        let sim = super::simulator(mode, full_range_gray);
        super::save_raster(&output, &sim.apply(&raster))?;
    }

    Ok(modes.len())
}
