//! Simulate command
//!
//! Renders one image in one simulation mode.

use crate::SimulateArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;

pub fn run(args: SimulateArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), mode = %args.mode, "simulate::run");

    let raster = super::load_raster(&args.input)?;
    info!(mode = %args.mode, w = raster.width(), h = raster.height(), "Simulating");

    if verbose > 0 {
        println!("Simulating {} on {}", args.mode, args.input.display());
    }

    let sim = super::simulator(args.mode, args.full_range_gray);
    let output = sim.apply_par(&raster);
    super::save_raster(&args.output, &output)?;

    if verbose > 0 {
        println!("Saved: {}", args.output.display());
    }

    Ok(())
}
