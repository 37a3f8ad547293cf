//! Scatter-plot export.
//!
//! The scan is split into three parallel coordinate series, the shape most
//! 3-D plotting tools take for a scatter plot:
//!
//! ```
//! use clocksim_core::droplets::{Droplet, Scatter};
//!
//! let scatter = Scatter::from_droplets(&[Droplet::new(1, 2, 3), Droplet::new(4, 5, 6)]);
//! assert_eq!(scatter.to_json().unwrap(), r#"{"x":[1,4],"y":[2,5],"z":[3,6]}"#);
//! ```

use serde::{Deserialize, Serialize};

use super::Droplet;

/// Per-axis coordinate series; index `i` of each series is droplet `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scatter {
    /// X coordinates.
    pub x: Vec<i64>,
    /// Y coordinates.
    pub y: Vec<i64>,
    /// Z coordinates.
    pub z: Vec<i64>,
}

impl Scatter {
    /// Splits droplets into coordinate series, keeping scan order.
    pub fn from_droplets(droplets: &[Droplet]) -> Self {
        let mut scatter = Self {
            x: Vec::with_capacity(droplets.len()),
            y: Vec::with_capacity(droplets.len()),
            z: Vec::with_capacity(droplets.len()),
        };
        for d in droplets {
            scatter.x.push(d.x);
            scatter.y.push(d.y);
            scatter.z.push(d.z);
        }
        scatter
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Compact JSON encoding.
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON encoding.
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
