//! JSON export: an array of objects, two-space indented.

use std::{fs::File, io::Write, path::Path};

use crate::{balldontlie::TeamStats, Result};

pub fn write_json(stats: &[TeamStats], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, stats)?;
    file.write_all(b"\n")?;
    Ok(())
}
