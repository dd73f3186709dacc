/*
path.rs

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

//! Path between two cells of the map.

use serde::Serialize;

use super::hex_coordinates::HexCoordinates;

/// Path object.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Path {
    /// Path as an ordered list of coordinates, both ends included.
    path: Vec<HexCoordinates>,
}

impl Path {
    /// Create a [`Path`] object from a list of coordinates.
    pub fn from_vec(path: Vec<HexCoordinates>) -> Self {
        Self { path }
    }

    /// Get the number of cells in the path. The number of steps is one less.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Return the path as a slice.
    pub fn get(&self) -> &[HexCoordinates] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<HexCoordinates> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<HexCoordinates> {
        self.path.last().copied()
    }

    /// Return the same path, walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            path: self.path.iter().rev().copied().collect(),
        }
    }

    /// Whether each cell of the path is adjacent to the next one.
    pub fn is_continuous(&self) -> bool {
        self.path
            .windows(2)
            .all(|w| HexCoordinates::distance(w[0], w[1]) == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_of_path() {
        let p: Path = Path::from_vec(vec![HexCoordinates::ORIGIN, HexCoordinates::new(1, 0)]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.get_first(), Some(HexCoordinates::ORIGIN));
        assert_eq!(p.get_last(), Some(HexCoordinates::new(1, 0)));
        assert!(p.is_continuous());

        let empty: Path = Path::default();
        assert!(empty.is_empty());
        assert_eq!(empty.get_first(), None);
    }

    #[test]
    fn reversed_path() {
        let p: Path = Path::from_vec(vec![
            HexCoordinates::ORIGIN,
            HexCoordinates::new(0, 1),
            HexCoordinates::new(0, 2),
        ]);
        let r: Path = p.reversed();
        assert_eq!(r.get_first(), Some(HexCoordinates::new(0, 2)));
        assert_eq!(r.get_last(), Some(HexCoordinates::ORIGIN));
        assert_eq!(r.get()[1], HexCoordinates::new(0, 1));
        assert_eq!(r.reversed(), p);
    }

    #[test]
    fn gap_detected() {
        let p: Path = Path::from_vec(vec![HexCoordinates::ORIGIN, HexCoordinates::new(2, 0)]);
        assert!(!p.is_continuous());
    }
}
