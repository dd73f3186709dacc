/*
objectives.rs

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

//! Place the objectives on the map.
//!
//! Objectives are placed far enough from the starting cell, one per cell, in a fixed order:
//! the helipad, the radio, the masks, the detectors, and then the towers.

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

use super::cell::ObjectiveKind;
use super::grid::Grid;
use super::hex_coordinates::HexCoordinates;
use crate::config::{OBJECTIVE_MIN_DISTANCE, TOWER_COUNT};

/// Locations of the objectives.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Objectives {
    /// Coordinates of the objectives, by kind.
    by_kind: BTreeMap<ObjectiveKind, Vec<HexCoordinates>>,

    /// Coordinates of all the objectives, in placement order.
    locations: Vec<HexCoordinates>,

    /// Coordinates of the helipad. The radio reveals it.
    helipad: Option<HexCoordinates>,
}

impl Objectives {
    /// Return the coordinates of the objectives of the given kind.
    pub fn get(&self, kind: ObjectiveKind) -> &[HexCoordinates] {
        self.by_kind.get(&kind).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Coordinates of all the objectives, in placement order.
    pub fn locations(&self) -> &[HexCoordinates] {
        &self.locations
    }

    pub fn helipad(&self) -> Option<HexCoordinates> {
        self.helipad
    }

    /// Number of placed objectives.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over the objective kinds and their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectiveKind, &Vec<HexCoordinates>)> {
        self.by_kind.iter()
    }

    fn insert(&mut self, kind: ObjectiveKind, coords: HexCoordinates) {
        self.by_kind.entry(kind).or_default().push(coords);
        self.locations.push(coords);
        if kind == ObjectiveKind::Helipad {
            self.helipad = Some(coords);
        }
    }
}

/// [`ObjectivePlacer`] object.
pub struct ObjectivePlacer {
    /// Starting cell of the player.
    start: HexCoordinates,

    /// Objectives to place, in order, with the number of each.
    quotas: Vec<(ObjectiveKind, usize)>,
}

impl ObjectivePlacer {
    /// Create the object.
    pub fn new(start: HexCoordinates, mask_count: usize, detector_count: usize) -> Self {
        Self {
            start,
            quotas: vec![
                (ObjectiveKind::Helipad, 1),
                (ObjectiveKind::Radio, 1),
                (ObjectiveKind::Mask, mask_count),
                (ObjectiveKind::Detector, detector_count),
                (ObjectiveKind::Tower, TOWER_COUNT),
            ],
        }
    }

    /// Total number of objectives requested.
    pub fn requested(&self) -> usize {
        self.quotas.iter().map(|(_, n)| n).sum()
    }

    /// Pick random cells for the objectives and tag them in the grid.
    ///
    /// If the map is too small, then some objectives are not placed. A warning is logged but this
    /// is not an error: the map is still playable.
    pub fn place<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Objectives {
        let mut objectives: Objectives = Objectives::default();
        let mut candidates: Vec<HexCoordinates> = grid
            .coordinates()
            .copied()
            .filter(|c| HexCoordinates::distance(*c, self.start) >= OBJECTIVE_MIN_DISTANCE)
            .collect();

        debug!(
            "Placing {} objectives among {} candidate cells",
            self.requested(),
            candidates.len()
        );

        for (kind, count) in &self.quotas {
            for i in 0..*count {
                if candidates.is_empty() {
                    warn!("No cell left for {kind} objectives: {i} placed out of {count}");
                    break;
                }
                let idx: usize = rng.random_range(0..candidates.len());
                let coords: HexCoordinates = candidates.remove(idx);
                if let Some(cell) = grid.get_mut(coords) {
                    cell.objective = *kind;
                }
                debug!("    {kind} at {coords}");
                objectives.insert(*kind, coords);
            }
        }
        objectives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn all_objectives_placed() {
        let mut grid: Grid = Grid::new(5).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let placer: ObjectivePlacer = ObjectivePlacer::new(HexCoordinates::ORIGIN, 2, 2);
        let objectives: Objectives = placer.place(&mut grid, &mut rng);

        assert_eq!(objectives.len(), 9);
        assert_eq!(objectives.get(ObjectiveKind::Helipad).len(), 1);
        assert_eq!(objectives.get(ObjectiveKind::Radio).len(), 1);
        assert_eq!(objectives.get(ObjectiveKind::Mask).len(), 2);
        assert_eq!(objectives.get(ObjectiveKind::Detector).len(), 2);
        assert_eq!(objectives.get(ObjectiveKind::Tower).len(), 3);
        assert_eq!(
            objectives.helipad(),
            objectives.get(ObjectiveKind::Helipad).first().copied()
        );

        let distinct: HashSet<HexCoordinates> = objectives.locations().iter().copied().collect();
        assert_eq!(distinct.len(), 9);
        for (kind, coords) in objectives.iter() {
            for c in coords {
                assert!(HexCoordinates::distance(*c, HexCoordinates::ORIGIN) >= 3);
                assert_eq!(grid.get(*c).unwrap().objective, *kind);
            }
        }
        assert_eq!(grid.iter().filter(|c| c.has_objective()).count(), 9);
    }

    #[test]
    fn small_map_shortfall() {
        // Radius 3: only the 18 cells of the outer ring are candidates
        let mut grid: Grid = Grid::new(3).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let placer: ObjectivePlacer = ObjectivePlacer::new(HexCoordinates::ORIGIN, 10, 10);
        let objectives: Objectives = placer.place(&mut grid, &mut rng);

        assert_eq!(objectives.len(), 18);
        assert!(objectives.helipad().is_some());
        assert_eq!(objectives.get(ObjectiveKind::Mask).len(), 10);
        assert_eq!(objectives.get(ObjectiveKind::Detector).len(), 6);
        assert!(objectives.get(ObjectiveKind::Tower).is_empty());
    }

    #[test]
    fn no_candidate() {
        let mut grid: Grid = Grid::new(2).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let objectives: Objectives =
            ObjectivePlacer::new(HexCoordinates::ORIGIN, 2, 2).place(&mut grid, &mut rng);
        assert!(objectives.is_empty());
        assert_eq!(objectives.helipad(), None);
    }

    #[test]
    fn same_seed_same_objectives() {
        let placer: ObjectivePlacer = ObjectivePlacer::new(HexCoordinates::ORIGIN, 2, 2);
        let mut g1: Grid = Grid::new(5).unwrap();
        let mut g2: Grid = Grid::new(5).unwrap();
        let o1: Objectives = placer.place(&mut g1, &mut StdRng::seed_from_u64(99));
        let o2: Objectives = placer.place(&mut g2, &mut StdRng::seed_from_u64(99));
        assert_eq!(o1, o2);
        assert_eq!(g1, g2);
    }
}
