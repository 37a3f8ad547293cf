//! Face counting.
//!
//! Duplicate droplets in a scan are counted once. Positions past the edge of
//! the `i64` range are open air, so a face there is always exposed.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use super::Droplet;

/// Number of faces not shared with another droplet.
pub fn surface_area(droplets: &[Droplet]) -> usize {
    let occupied: HashSet<Droplet> = droplets.iter().copied().collect();
    occupied
        .iter()
        .flat_map(|d| d.neighbours())
        .filter(|&n| n.is_none_or(|n| !occupied.contains(&n)))
        .count()
}

/// A grid position widened so the padded bounding box never overflows.
type Cell = (i128, i128, i128);

fn widen(d: Droplet) -> Cell {
    (i128::from(d.x), i128::from(d.y), i128::from(d.z))
}

const fn adjacent((x, y, z): Cell) -> [Cell; 6] {
    [
        (x + 1, y, z),
        (x - 1, y, z),
        (x, y + 1, z),
        (x, y - 1, z),
        (x, y, z + 1),
        (x, y, z - 1),
    ]
}

/// Number of faces reachable from outside the droplet cluster.
///
/// Air pockets fully enclosed by droplets do not count. The outside is found
/// by flood-filling the bounding box grown by one cell in every direction,
/// starting from a corner, which is always air.
pub fn exterior_surface_area(droplets: &[Droplet]) -> usize {
    let occupied: HashSet<Cell> = droplets.iter().copied().map(widen).collect();
    let Some(bounds) = Bounds::around(&occupied) else {
        return 0;
    };

    let start = bounds.min;
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut faces = 0;

    while let Some(air) = queue.pop_front() {
        for next in adjacent(air) {
            if !bounds.contains(next) {
                continue;
            }
            if occupied.contains(&next) {
                faces += 1;
            } else if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    debug!(air_cells = seen.len(), faces, "exterior flood fill");
    faces
}

/// Inclusive bounding box.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: Cell,
    max: Cell,
}

impl Bounds {
    /// The box around `cells`, grown by one on every side.
    fn around(cells: &HashSet<Cell>) -> Option<Self> {
        let mut iter = cells.iter();
        let first = *iter.next()?;
        let (mut min, mut max) = (first, first);
        for &(x, y, z) in iter {
            min = (min.0.min(x), min.1.min(y), min.2.min(z));
            max = (max.0.max(x), max.1.max(y), max.2.max(z));
        }
        Some(Self {
            min: (min.0 - 1, min.1 - 1, min.2 - 1),
            max: (max.0 + 1, max.1 + 1, max.2 + 1),
        })
    }

    const fn contains(&self, (x, y, z): Cell) -> bool {
        x >= self.min.0
            && x <= self.max.0
            && y >= self.min.1
            && y <= self.max.1
            && z >= self.min.2
            && z <= self.max.2
    }
}
