/*
grid.rs

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

//! Hexagonal map.
//!
//! The grid owns all the cells. It is built once, and then no cell is ever added or removed.
//! Only the cell flags change, during the generation and then while playing.

use log::debug;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map;

use super::cell::Cell;
use super::hex_coordinates::{self, HexCoordinates};
use super::search;
use crate::config::ConfigError;

/// Hexagonal map of a given radius around [`HexCoordinates::ORIGIN`].
///
/// Cells are stored by coordinates, ordered by `q` and then `r`. The iteration order is therefore
/// stable, which keeps the generation reproducible for a given seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of cells between the center and the border.
    radius: u32,

    /// Cells of the map.
    cells: BTreeMap<HexCoordinates, Cell>,
}

impl Grid {
    /// Create all the cells of an hexagon of the given radius.
    ///
    /// # Errors
    ///
    /// The method returns an error if the radius is negative.
    pub fn new(radius: i32) -> Result<Self, ConfigError> {
        if radius < 0 {
            return Err(ConfigError::NegativeRadius(radius));
        }

        let mut cells: BTreeMap<HexCoordinates, Cell> = BTreeMap::new();
        let radius: u32 = radius.unsigned_abs();
        for coords in HexCoordinates::ORIGIN.range(radius) {
            cells.insert(coords, Cell::new(coords));
        }
        debug!("Grid of radius {radius}: {} cells", cells.len());

        Ok(Self { radius, cells })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells in the map.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the coordinates are inside the map.
    pub fn contains(&self, coords: HexCoordinates) -> bool {
        self.cells.contains_key(&coords)
    }

    /// Return the cell at the given coordinates, or `None` if the coordinates are outside the map.
    pub fn get(&self, coords: HexCoordinates) -> Option<&Cell> {
        self.cells.get(&coords)
    }

    /// Return the cell at the given coordinates, or `None` if the coordinates are outside the map.
    pub fn get_mut(&mut self, coords: HexCoordinates) -> Option<&mut Cell> {
        self.cells.get_mut(&coords)
    }

    /// Whether the cell at the given coordinates has a mine.
    /// Coordinates outside the map have no mine.
    pub fn has_hazard(&self, coords: HexCoordinates) -> bool {
        self.cells.get(&coords).is_some_and(|c| c.has_hazard)
    }

    /// Add or remove the mine of a cell. Nothing happens for coordinates outside the map.
    pub fn set_hazard(&mut self, coords: HexCoordinates, hazard: bool) {
        if let Some(c) = self.cells.get_mut(&coords) {
            c.has_hazard = hazard;
        }
    }

    /// Remove all the mines.
    pub fn clear_hazards(&mut self) {
        for c in self.cells.values_mut() {
            c.has_hazard = false;
        }
    }

    /// Number of cells with a mine.
    pub fn hazard_count(&self) -> usize {
        self.cells.values().filter(|c| c.has_hazard).count()
    }

    /// Iterate over the cells, ordered by coordinates.
    pub fn iter(&self) -> btree_map::Values<'_, HexCoordinates, Cell> {
        self.cells.values()
    }

    /// Iterate over the coordinates of the cells.
    pub fn coordinates(&self) -> btree_map::Keys<'_, HexCoordinates, Cell> {
        self.cells.keys()
    }

    /// Return the neighbors of the given coordinates that are inside the map.
    ///
    /// Cells on the border have less than six neighbors.
    pub fn neighbors(&self, coords: HexCoordinates) -> Vec<HexCoordinates> {
        coords
            .neighbors()
            .into_iter()
            .filter(|n| self.cells.contains_key(n))
            .collect()
    }

    /// Number of mines around the given coordinates.
    ///
    /// Coordinates too far from the map have no neighbor inside it, and so no mine around.
    pub fn neighbor_hazard_count(&self, coords: HexCoordinates) -> usize {
        if HexCoordinates::distance(coords, HexCoordinates::ORIGIN) > self.radius.saturating_add(1)
        {
            return 0;
        }
        coords
            .neighbors()
            .iter()
            .filter(|n| self.has_hazard(**n))
            .count()
    }

    /// Return the coordinates inside the map at a distance of `range` or less.
    ///
    /// The coordinates are in the map order. `center` does not have to be inside the map.
    pub fn cells_in_range(&self, center: HexCoordinates, range: u32) -> Vec<HexCoordinates> {
        self.cells
            .keys()
            .copied()
            .filter(|c| HexCoordinates::distance(center, *c) <= range)
            .collect()
    }

    /// Number of steps of the shortest walk between two cells, mines ignored.
    ///
    /// Return `None` if one of the cells is outside the map.
    pub fn path_distance(&self, a: HexCoordinates, b: HexCoordinates) -> Option<usize> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        search::find_path(self, a, b).map(|p| p.len() - 1)
    }

    /// Expected number of cells for the map radius.
    pub fn expected_len(&self) -> usize {
        hex_coordinates::hexagon_size(self.radius)
    }
}

/// Serialize the grid as a list of cells.
///
/// JSON object keys must be strings, so the coordinates cannot be used as keys. Each cell carries
/// its own coordinates instead.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
        for cell in self.cells.values() {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count() {
        for (radius, count) in [(0, 1), (1, 7), (2, 19), (5, 91)] {
            let g: Grid = Grid::new(radius).unwrap();
            assert_eq!(g.len(), count);
            assert_eq!(g.expected_len(), count);
        }
    }

    #[test]
    fn negative_radius() {
        assert_eq!(Grid::new(-1), Err(ConfigError::NegativeRadius(-1)));
    }

    #[test]
    fn cells_inside_radius() {
        let g: Grid = Grid::new(4).unwrap();
        for c in g.coordinates() {
            let m: i32 = c.q().abs().max(c.r().abs()).max(c.s().abs());
            assert!(m <= 4);
        }
        assert!(g.iter().all(|c| !c.has_hazard && !c.has_objective()));
    }

    #[test]
    fn lookup_outside() {
        let mut g: Grid = Grid::new(2).unwrap();
        let outside: HexCoordinates = HexCoordinates::new(3, 0);
        assert!(g.get(outside).is_none());
        assert!(g.get_mut(outside).is_none());
        assert!(!g.has_hazard(outside));
        g.set_hazard(outside, true);
        assert_eq!(g.hazard_count(), 0);
        assert_eq!(g.path_distance(HexCoordinates::ORIGIN, outside), None);
    }

    #[test]
    fn border_neighbors() {
        let g: Grid = Grid::new(1).unwrap();
        assert_eq!(g.neighbors(HexCoordinates::ORIGIN).len(), 6);
        assert_eq!(g.neighbors(HexCoordinates::new(1, 0)).len(), 3);
    }

    #[test]
    fn hazard_count_around() {
        let mut g: Grid = Grid::new(2).unwrap();
        g.set_hazard(HexCoordinates::new(1, 0), true);
        g.set_hazard(HexCoordinates::new(0, 1), true);
        g.set_hazard(HexCoordinates::new(2, 0), true);
        assert_eq!(g.neighbor_hazard_count(HexCoordinates::ORIGIN), 2);
        assert_eq!(g.hazard_count(), 3);
        g.clear_hazards();
        assert_eq!(g.hazard_count(), 0);
    }

    #[test]
    fn distances() {
        let g: Grid = Grid::new(3).unwrap();
        let a: HexCoordinates = HexCoordinates::new(-3, 0);
        let b: HexCoordinates = HexCoordinates::new(3, -3);
        assert_eq!(g.path_distance(a, b), Some(HexCoordinates::distance(a, b) as usize));
        assert_eq!(g.path_distance(a, a), Some(0));
    }

    #[test]
    fn range_clipped_to_map() {
        let g: Grid = Grid::new(2).unwrap();
        assert_eq!(g.cells_in_range(HexCoordinates::ORIGIN, 2).len(), 19);
        assert_eq!(g.cells_in_range(HexCoordinates::new(2, 0), 1).len(), 4);
        assert_eq!(g.cells_in_range(HexCoordinates::new(4, 0), 1).len(), 0);
        assert_eq!(g.cells_in_range(HexCoordinates::new(4, 0), 2).len(), 1);
    }

    #[test]
    fn far_outside_queries() {
        let mut g: Grid = Grid::new(3).unwrap();
        g.set_hazard(HexCoordinates::new(3, 0), true);

        assert_eq!(g.neighbor_hazard_count(HexCoordinates::new(4, 0)), 1);
        assert_eq!(g.neighbor_hazard_count(HexCoordinates::new(i32::MAX, 0)), 0);
        assert_eq!(g.neighbor_hazard_count(HexCoordinates::new(i32::MIN, i32::MAX)), 0);
        assert!(g.neighbors(HexCoordinates::new(i32::MAX, i32::MAX)).is_empty());

        assert_eq!(g.cells_in_range(HexCoordinates::ORIGIN, u32::MAX).len(), 37);
        assert_eq!(g.cells_in_range(HexCoordinates::ORIGIN, 1 << 31).len(), 37);
        assert_eq!(g.cells_in_range(HexCoordinates::new(i32::MAX, 0), u32::MAX).len(), 37);
        assert!(g.cells_in_range(HexCoordinates::new(i32::MIN, 0), 10).is_empty());
    }
}
