//! Diff command
//!
//! Writes a difference map: the simulated image with strongly changed
//! pixels painted blue.

use crate::DiffArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use dichroma_sim::{difference_map, Simulator, MARKER};

pub fn run(args: DiffArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), mode = %args.mode, "diff::run");

    let normal = super::load_raster(&args.input)?;
    let simulated = Simulator::with_mode(args.mode).apply_par(&normal);
    let map = difference_map(&normal, &simulated)?;

    let marked = map.pixels().iter().filter(|&&p| p == MARKER).count();
    info!(mode = %args.mode, marked, total = map.pixel_count(), "Difference map built");

    if verbose > 0 {
        let pct = if map.is_empty() { 0.0 } else { 100.0 * marked as f64 / map.pixel_count() as f64 };
        println!("{}: {} of {} pixels changed strongly ({:.1}%)", args.mode, marked, map.pixel_count(), pct);
    }

    super::save_raster(&args.output, &map)?;
    Ok(())
}
