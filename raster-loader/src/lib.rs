//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Provides functions to read alpha rasters from simple text formats
//--------------------------------------------------------------------

extern crate shape_processor;
extern crate thiserror;

use shape_processor::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("the raster has no pixels")]
    Empty,
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },
    #[error("unknown pixel character {ch:?} at row {row}, column {column}")]
    UnknownPixel { ch: char, row: usize, column: usize },
    #[error("bad greymap header: {0}")]
    BadHeader(String),
    #[error("bad greymap value: {0}")]
    BadValue(String),
    #[error(transparent)]
    Raster(#[from] ContourError),
}

fn ascii_alpha(ch: char) -> Option<u8> {
    match ch {
        '#' | 'X' | '@' | '*' => Some(255),
        '.' | ' ' => Some(0),
        _ => None
    }
}

// One row per line; `#`, `X`, `@` and `*` are solid, `.` and spaces are
// transparent. Short rows are an error, trailing blank lines are ignored.
pub fn raster_from_ascii(data: &str) -> Result<RasterBuffer, LoadError> {
    let lines: Vec<&str> = data.lines().collect();
    let last = lines.iter().rposition(|l| !l.trim().is_empty()).ok_or(LoadError::Empty)?;

    let width = lines[0].chars().count();
    let mut alpha = Vec::with_capacity(width * (last + 1));

    for (row, line) in lines[..=last].iter().enumerate() {
        let found = line.chars().count();
        if found != width { return Err(LoadError::RaggedRows { row, expected: width, found }); }

        for (column, ch) in line.chars().enumerate() {
            alpha.push(ascii_alpha(ch).ok_or(LoadError::UnknownPixel { ch, row, column })?);
        }
    }

    if width == 0 { return Err(LoadError::Empty); }
    Ok(RasterBuffer::from_alpha(alpha, width)?)
}

// Plain (P2) greymap; the grey values are rescaled to the full alpha range
pub fn raster_from_pgm(data: &str) -> Result<RasterBuffer, LoadError> {
    let mut tokens = data.lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .flat_map(|l| l.split_whitespace());

    match tokens.next() {
        Some("P2") => {},
        Some(magic) => return Err(LoadError::BadHeader(format!("unsupported magic number {}", magic))),
        None => return Err(LoadError::Empty)
    }

    let mut header = |name: &str| -> Result<usize, LoadError> {
        let token = tokens.next().ok_or_else(|| LoadError::BadHeader(format!("missing {}", name)))?;
        token.parse().map_err(|_| LoadError::BadHeader(format!("invalid {} {}", name, token)))
    };

    let width = header("width")?;
    let height = header("height")?;
    let max_value = header("maximum value")?;
    if width == 0 || height == 0 { return Err(LoadError::Empty); }
    if max_value == 0 || max_value > 65535 {
        return Err(LoadError::BadHeader(format!("maximum value {} out of range", max_value)));
    }

    let alpha = tokens.take(width * height).map(|token| {
        let value: usize = token.parse().map_err(|_| LoadError::BadValue(token.to_string()))?;
        if value > max_value { return Err(LoadError::BadValue(format!("{} exceeds {}", value, max_value))); }
        Ok(((value * 255 + max_value / 2) / max_value) as u8)
    }).collect::<Result<Vec<_>, _>>()?;

    if alpha.len() != width * height {
        return Err(LoadError::BadValue(format!("expected {} values, found {}", width * height, alpha.len())));
    }

    Ok(RasterBuffer::from_alpha(alpha, width)?)
}
