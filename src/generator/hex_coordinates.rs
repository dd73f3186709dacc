/*
hex_coordinates.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexmines.

Hexmines is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexmines is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexmines. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Axial coordinates for the cells of the hexagonal map.
//!
//! A cell is addressed by two integers, `q` and `r`.
//! A third value, `s = -q - r`, is derived when computing distances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the six neighbors of a cell: east, north-east, north-west, west, south-west, and
/// south-east.
const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Axial coordinates of a cell.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct HexCoordinates {
    q: i32,
    r: i32,
}

impl HexCoordinates {
    /// Center of the map. The player always starts there.
    pub const ORIGIN: HexCoordinates = HexCoordinates { q: 0, r: 0 };

    /// Create a [`HexCoordinates`] object from axial coordinates.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Third cube coordinate, derived from the two others.
    pub const fn s(&self) -> i32 {
        self.q.saturating_neg().saturating_sub(self.r)
    }

    /// Return the number of steps between two cells.
    ///
    /// The result saturates at `u32::MAX` for coordinates at the far ends of the `i32` range.
    pub fn distance(a: HexCoordinates, b: HexCoordinates) -> u32 {
        let dq: i64 = i64::from(a.q) - i64::from(b.q);
        let dr: i64 = i64::from(a.r) - i64::from(b.r);
        let steps: i64 = (dq.abs() + dr.abs() + (dq + dr).abs()) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// Return the six adjacent coordinates.
    ///
    /// The order never changes. Random choices made over the result are therefore reproducible
    /// for a given seed. Coordinates saturate at the bounds of `i32`.
    pub fn neighbors(&self) -> [HexCoordinates; 6] {
        DIRECTIONS.map(|(dq, dr)| {
            HexCoordinates::new(self.q.saturating_add(dq), self.r.saturating_add(dr))
        })
    }

    /// Convert the coordinates into a position on a plane (pointy-top layout).
    pub fn to_position(&self, size: f32) -> (f32, f32) {
        let x: f32 = size * 3.0_f32.sqrt() * (self.q as f32 + self.r as f32 / 2.0);
        let y: f32 = size * 1.5 * self.r as f32;
        (x, y)
    }

    /// Return all the coordinates at a distance of `range` or less.
    ///
    /// The coordinates are listed by increasing `q`, and then by increasing `r`. Coordinates that
    /// would not fit in an `i32` are left out.
    pub fn range(&self, range: u32) -> Vec<HexCoordinates> {
        let n: i64 = i64::from(range);
        let mut results: Vec<HexCoordinates> = Vec::new();

        for dq in -n..=n {
            let Ok(q) = i32::try_from(i64::from(self.q) + dq) else {
                continue;
            };
            let r1: i64 = (-n).max(-dq - n);
            let r2: i64 = n.min(-dq + n);
            for dr in r1..=r2 {
                if let Ok(r) = i32::try_from(i64::from(self.r) + dr) {
                    results.push(HexCoordinates::new(q, r));
                }
            }
        }
        results
    }
}

impl fmt::Display for HexCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}

/// Number of cells in an hexagon of the given radius.
///
/// The result saturates at `usize::MAX`.
pub fn hexagon_size(radius: u32) -> usize {
    let r: u128 = u128::from(radius);
    let size: u128 = 3 * r * r + 3 * r + 1;
    usize::try_from(size).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let points: [HexCoordinates; 5] = [
            HexCoordinates::ORIGIN,
            HexCoordinates::new(3, -1),
            HexCoordinates::new(-2, 5),
            HexCoordinates::new(4, -4),
            HexCoordinates::new(-5, 0),
        ];
        for a in points {
            assert_eq!(HexCoordinates::distance(a, a), 0);
            for b in points {
                assert_eq!(HexCoordinates::distance(a, b), HexCoordinates::distance(b, a));
            }
        }
    }

    #[test]
    fn distance_values() {
        let o: HexCoordinates = HexCoordinates::ORIGIN;
        assert_eq!(HexCoordinates::distance(o, HexCoordinates::new(1, 0)), 1);
        assert_eq!(HexCoordinates::distance(o, HexCoordinates::new(3, -3)), 3);
        assert_eq!(HexCoordinates::distance(o, HexCoordinates::new(2, 1)), 3);
        assert_eq!(
            HexCoordinates::distance(HexCoordinates::new(-2, 1), HexCoordinates::new(2, -1)),
            4
        );
    }

    #[test]
    fn neighbors_are_adjacent() {
        let c: HexCoordinates = HexCoordinates::new(2, -3);
        let n: [HexCoordinates; 6] = c.neighbors();
        assert_eq!(n[0], HexCoordinates::new(3, -3));
        assert_eq!(n[5], HexCoordinates::new(2, -2));
        for v in n {
            assert_eq!(HexCoordinates::distance(c, v), 1);
        }
    }

    #[test]
    fn position_projection() {
        let (x, y) = HexCoordinates::ORIGIN.to_position(1.0);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = HexCoordinates::new(0, 2).to_position(2.0);
        assert!((x - 2.0 * 3.0_f32.sqrt()).abs() < 1e-5);
        assert!((y - 6.0).abs() < 1e-5);
    }

    #[test]
    fn range_counts() {
        let c: HexCoordinates = HexCoordinates::new(1, 1);
        assert_eq!(c.range(0), vec![c]);
        assert_eq!(c.range(1).len(), 7);
        assert_eq!(c.range(2).len(), 19);
        assert!(c.range(2).iter().all(|v| HexCoordinates::distance(c, *v) <= 2));
    }

    #[test]
    fn far_coordinates() {
        let edge: HexCoordinates = HexCoordinates::new(i32::MAX, i32::MIN);
        assert_eq!(edge.neighbors()[0], edge);
        assert_eq!(edge.neighbors()[3], HexCoordinates::new(i32::MAX - 1, i32::MIN));
        assert_eq!(edge.s(), 1);
        assert_eq!(HexCoordinates::distance(edge, HexCoordinates::ORIGIN), 1 << 31);
        assert_eq!(
            HexCoordinates::distance(
                HexCoordinates::new(i32::MAX, i32::MAX),
                HexCoordinates::new(i32::MIN, i32::MIN)
            ),
            u32::MAX
        );

        // Cells beyond i32::MAX are dropped
        let c: HexCoordinates = HexCoordinates::new(i32::MAX, 0);
        assert_eq!(c.range(1).len(), 5);
        assert_eq!(hexagon_size(u32::MAX), usize::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(HexCoordinates::new(2, -3).to_string(), "(2, -3, 1)");
    }
}
