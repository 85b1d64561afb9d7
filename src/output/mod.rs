mod json;
mod text;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use crate::cli::Command;
use crate::clique::Clique;
use crate::error::RectCliqueError;
use crate::geometry::Rectangle;

pub use json::write_json;
pub use text::{format_group, write_text};

/// Ascending 1-based positions of a group's rectangles
pub fn display_indices(group: &Clique) -> Vec<usize> {
    group.iter().map(|&index| index + 1).collect()
}

/// Put groups in a stable order: lexicographic by ascending members.
pub fn sort_groups(groups: &mut [Clique]) {
    groups.sort();
}

/// Sort groups for display and write them in the subcommand's format.
///
/// Write failures are reported as [`RectCliqueError::OutputWrite`] when
/// `path` names the destination file.
pub fn write_groups(
    command: &Command,
    groups: &mut [Clique],
    rectangles: &[Rectangle],
    out: &mut dyn Write,
    path: Option<&Path>,
) -> Result<()> {
    sort_groups(groups);

    let written = match command {
        Command::Text(_) => write_text(groups, out),
        Command::Json(_) => write_json(groups, rectangles, out),
    };

    written.map_err(|e| -> anyhow::Error {
        match path {
            Some(path) => RectCliqueError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            }
            .into(),
            None => anyhow::Error::new(e).context("failed to write to stdout"),
        }
    })
}

/// Open the output destination: the given file, or stdout when `None`
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| RectCliqueError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
