use std::io::{self, Write};

use serde::Serialize;

use super::display_indices;
use crate::clique::Clique;
use crate::geometry::Rectangle;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    meta: Meta,
    rectangle_count: usize,
    groups: Vec<JsonGroup>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonGroup {
    /// 1-based, ascending
    members: Vec<usize>,
    rectangles: Vec<Rectangle>,
}

/// Write groups as pretty-printed JSON, including each member's geometry
pub fn write_json(
    groups: &[Clique],
    rectangles: &[Rectangle],
    out: &mut dyn Write,
) -> io::Result<()> {
    let json_groups = groups
        .iter()
        .map(|group| JsonGroup {
            members: display_indices(group),
            rectangles: group
                .iter()
                .filter_map(|&index| rectangles.get(index).copied())
                .collect(),
        })
        .collect();

    let output = JsonOutput {
        meta: Meta {
            app: "rectclique",
            version: env!("CARGO_PKG_VERSION"),
        },
        rectangle_count: rectangles.len(),
        groups: json_groups,
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
