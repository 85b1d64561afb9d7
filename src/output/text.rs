use std::io::{self, Write};

use super::display_indices;
use crate::clique::Clique;

/// Render a group as `[1, 2]` using 1-based positions
pub fn format_group(group: &Clique) -> String {
    let members: Vec<String> = display_indices(group)
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("[{}]", members.join(", "))
}

/// Write one group per line
pub fn write_text(groups: &[Clique], out: &mut dyn Write) -> io::Result<()> {
    for group in groups {
        writeln!(out, "{}", format_group(group))?;
    }
    out.flush()?;
    Ok(())
}
