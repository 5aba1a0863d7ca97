//! Modes command

use anyhow::Result;
use dichroma_sim::Deficiency;

pub fn run() -> Result<()> {
    for mode in Deficiency::ALL {
        println!("{:<10} {}", mode.id(), mode.description());
    }
    Ok(())
}
