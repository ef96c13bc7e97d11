//! Console rendering of season statistics.

use std::io::Write;

use crate::{balldontlie::TeamStats, Result};

pub fn write_stdout<W: Write>(stats: &[TeamStats], out: &mut W) -> Result<()> {
    for team in stats {
        writeln!(out, "{}", team.team_name())?;
        writeln!(out, "\twon games as home team: {}", team.won_games_as_home_team())?;
        writeln!(
            out,
            "\twon games as visitor team: {}",
            team.won_games_as_visitor_team()
        )?;
        writeln!(out, "\tlost games as home team: {}", team.lost_games_as_home_team())?;
        writeln!(
            out,
            "\tlost games as visitor team: {}",
            team.lost_games_as_visitor_team()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures::sample_stats;

    #[test]
    fn test_write_stdout_lines() {
        let mut buf = Vec::new();
        write_stdout(&sample_stats(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Boston Celtics (BOS)");
        assert_eq!(lines[1], "\twon games as home team: 1");
        assert_eq!(lines[2], "\twon games as visitor team: 1");
        assert_eq!(lines[3], "\tlost games as home team: 0");
        assert_eq!(lines[4], "\tlost games as visitor team: 0");
        assert_eq!(lines[5], "Los Angeles Lakers (LAL)");
        assert_eq!(lines[9], "\tlost games as visitor team: 1");
    }

    #[test]
    fn test_write_stdout_empty() {
        let mut buf = Vec::new();
        write_stdout(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
