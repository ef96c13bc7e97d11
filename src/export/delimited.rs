//! Tab-delimited export with a humanized header row.

use std::{io::Write, path::Path};

use super::humanize;
use crate::{balldontlie::TeamStats, Result};

pub fn write_csv(stats: &[TeamStats], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_delimited(stats, file)
}

/// Header plus one row per team; an empty list still gets the header.
pub fn write_delimited<W: Write>(stats: &[TeamStats], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);

    writer.write_record(TeamStats::COLUMNS.iter().map(|c| humanize(c)))?;

    for team in stats {
        let mut record = vec![team.team_name().to_string()];
        record.extend(team.counters().iter().map(|n| n.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
