use std::path::Path;

use anyhow::Result;
use log::debug;

use crate::error::RectCliqueError;
use crate::geometry::Rectangle;

/// Read rectangles from a text file, one `x y width height` line each.
///
/// Line `n` of the file becomes rectangle `n - 1`. An empty file gives an
/// empty list.
pub fn read_rectangles(path: &Path) -> Result<Vec<Rectangle>> {
    if !path.exists() {
        return Err(RectCliqueError::InputNotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| RectCliqueError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rectangles = parse_rectangles(&content)?;
    debug!("Read {} rectangles from {}", rectangles.len(), path.display());

    Ok(rectangles)
}

/// Parse rectangle lines.
///
/// Every line must hold exactly four whitespace-separated integers; blank
/// lines are rejected like any other short line. The first bad line aborts
/// the whole parse.
pub fn parse_rectangles(content: &str) -> Result<Vec<Rectangle>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line).map_err(anyhow::Error::from))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Rectangle, RectCliqueError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, width, height] = tokens.as_slice() else {
        return Err(RectCliqueError::TokenCount {
            line: line_number,
            found: tokens.len(),
        });
    };

    Ok(Rectangle::new(
        parse_int(line_number, x)?,
        parse_int(line_number, y)?,
        parse_int(line_number, width)?,
        parse_int(line_number, height)?,
    ))
}

fn parse_int(line_number: usize, token: &str) -> Result<i32, RectCliqueError> {
    token
        .parse::<i32>()
        .map_err(|e| RectCliqueError::InvalidInteger {
            line: line_number,
            token: token.to_string(),
            source: e,
        })
}
