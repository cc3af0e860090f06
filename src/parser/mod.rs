//! Parser module — catalog text to command records.

pub mod line;
pub mod params;

use crate::model::Command;

pub use line::parse_line;

/// Parse a whole catalog, one record per non-blank line, in file order.
pub fn parse_catalog(input: &str) -> Vec<Command> {
    let commands: Vec<Command> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    tracing::debug!(count = commands.len(), "parsed catalog");
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let input = "A|/mod/a.mod/b.mod/A\n\n   \r\nB()|/mod/a.mod/b.mod/B\r\n";
        let cmds = parse_catalog(input);
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].real_name, "A");
        assert_eq!(cmds[1].real_name, "B");
        assert_eq!(cmds[1].url, "/mod/a.mod/b.mod/B");
    }

    #[test]
    fn empty_catalog() {
        assert!(parse_catalog("").is_empty());
        assert!(parse_catalog("\n\n").is_empty());
    }
}
