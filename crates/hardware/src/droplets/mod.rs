//! Lava droplet scans.
//!
//! A scan lists unit cubes by their integer coordinates, one `x,y,z` triple per
//! line. This module provides:
//! 1. **Parsing:** [`Droplet`] values with line-numbered errors.
//! 2. **Surface area:** Total exposed faces and faces reachable from outside
//!    ([`surface_area`], [`exterior_surface_area`]).
//! 3. **Scatter export:** Per-axis coordinate series for an external 3-D
//!    plotter ([`Scatter`]).

/// Scatter-plot export.
pub mod scatter;

/// Face counting and exterior flood fill.
pub mod surface;

use std::path::Path;
use std::str::FromStr;

use crate::common::error::{DropletError, Result as CrateResult};
use crate::sim::loader;

pub use scatter::Scatter;
pub use surface::{exterior_surface_area, surface_area};

/// One unit cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Droplet {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
}

impl Droplet {
    /// Creates a droplet at `(x, y, z)`.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The six face-adjacent positions.
    ///
    /// A face on the edge of the `i64` range has no neighbour and yields `None`.
    pub fn neighbours(self) -> [Option<Self>; 6] {
        let Self { x, y, z } = self;
        [
            x.checked_add(1).map(|x| Self::new(x, y, z)),
            x.checked_sub(1).map(|x| Self::new(x, y, z)),
            y.checked_add(1).map(|y| Self::new(x, y, z)),
            y.checked_sub(1).map(|y| Self::new(x, y, z)),
            z.checked_add(1).map(|z| Self::new(x, y, z)),
            z.checked_sub(1).map(|z| Self::new(x, y, z)),
        ]
    }
}

/// Parses one `x,y,z` line.
///
/// # Errors
///
/// Returns [`DropletError::FieldCount`] unless there are exactly three fields,
/// and [`DropletError::InvalidCoordinate`] for a non-integer field.
pub fn parse_droplet(text: &str, line: usize) -> Result<Droplet, DropletError> {
    let fields: Vec<&str> = text.trim().split(',').map(str::trim).collect();
    let &[x, y, z] = fields.as_slice() else {
        return Err(DropletError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let coord = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|source| DropletError::InvalidCoordinate {
                line,
                field: field.to_owned(),
                source,
            })
    };
    Ok(Droplet::new(coord(x)?, coord(y)?, coord(z)?))
}

/// Parses a whole scan, skipping blank lines.
///
/// # Errors
///
/// Stops at the first malformed line.
pub fn parse_scan(text: &str) -> Result<Vec<Droplet>, DropletError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_droplet(line, idx + 1))
        .collect()
}

/// Reads and parses a scan file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::common::Error::Io) if the file cannot be read
/// and [`Error::Droplet`](crate::common::Error::Droplet) for a malformed line.
pub fn load_scan(path: impl AsRef<Path>) -> CrateResult<Vec<Droplet>> {
    let text = loader::load_text(path)?;
    Ok(parse_scan(&text)?)
}

impl FromStr for Droplet {
    type Err = DropletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_droplet(s, 1)
    }
}
