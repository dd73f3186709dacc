/*
map_generator.rs

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

//! Generate a complete map.
//!
//! [`MapGenerator`] owns the settings and the random generator. Each call to
//! [`MapGenerator::generate`] builds the grid, places the objectives, buries the mines, and returns
//! a [`GameMap`] object.

use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::cell::Cell;
use super::grid::Grid;
use super::hazards::{HazardError, HazardPlacer, HazardStats};
use super::hex_coordinates::HexCoordinates;
use super::objectives::{ObjectivePlacer, Objectives};
use super::search;
use crate::config::{ConfigError, MapSettings};
use crate::draw;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The settings are not valid. Nothing has been generated.
    Config(ConfigError),

    /// No valid mine field could be built. The caller may try again with other settings.
    Hazards(HazardError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::Config(e) => write!(f, "invalid settings: {e}"),
            GenerationError::Hazards(e) => write!(f, "map generation failed: {e}"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerationError::Config(e) => Some(e),
            GenerationError::Hazards(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(e: ConfigError) -> Self {
        GenerationError::Config(e)
    }
}

impl From<HazardError> for GenerationError {
    fn from(e: HazardError) -> Self {
        GenerationError::Hazards(e)
    }
}

/// Receive the cells as they are created, so that a front end can build their visual.
///
/// Both methods do nothing by default.
pub trait CellSpawner {
    /// Called once for each cell of the grid, with the position of its center.
    fn spawn_cell(&mut self, _cell: &Cell, _position: (f32, f32)) {}

    /// Called once for each placed objective, with the position of the cell center.
    fn spawn_objective(&mut self, _cell: &Cell, _position: (f32, f32)) {}
}

/// [`CellSpawner`] that ignores everything.
pub struct NoSpawner;

impl CellSpawner for NoSpawner {}

/// Statistics about the generation of a map.
#[derive(Serialize, Debug, Clone, Default)]
pub struct GenerationStats {
    /// What happened while burying the mines.
    pub hazards: HazardStats,

    /// Duration in seconds it took to bury the mines.
    pub hazard_duration: f32,

    /// Duration in seconds it took to generate the whole map.
    pub duration: f32,
}

/// Generated map, ready to be played.
#[derive(Serialize, Debug, Clone)]
pub struct GameMap {
    /// Seed that reproduces this map with the same settings.
    seed: u64,

    /// Starting cell of the player.
    start: HexCoordinates,

    /// Cells of the map.
    grid: Grid,

    /// Location of the objectives.
    objectives: Objectives,

    /// Generation statistics.
    stats: GenerationStats,
}

impl GameMap {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn start(&self) -> HexCoordinates {
        self.start
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The game updates the cell flags while the player explores the map.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn objectives(&self) -> &Objectives {
        &self.objectives
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Location of the helipad, revealed when the player finds the radio.
    pub fn helipad(&self) -> Option<HexCoordinates> {
        self.objectives.helipad()
    }

    /// Return the cells without a mine that cannot be reached from the starting cell.
    ///
    /// The list is empty for a freshly generated map.
    pub fn isolated_cells(&self) -> Vec<HexCoordinates> {
        let reachable = search::reachable(&self.grid, self.start);
        self.grid
            .iter()
            .filter(|c| !c.has_hazard && !reachable.contains(&c.coordinates))
            .map(|c| c.coordinates)
            .collect()
    }

    /// Return the cells without a mine that are surrounded by mines.
    ///
    /// The list is empty for a freshly generated map.
    pub fn encircled_cells(&self) -> Vec<HexCoordinates> {
        self.grid
            .iter()
            .filter(|c| !c.has_hazard)
            .map(|c| c.coordinates)
            .filter(|c| {
                let neighbors: Vec<HexCoordinates> = self.grid.neighbors(*c);
                !neighbors.is_empty() && neighbors.iter().all(|n| self.grid.has_hazard(*n))
            })
            .collect()
    }
}

/// [`MapGenerator`] object.
pub struct MapGenerator {
    /// Generation parameters.
    settings: MapSettings,

    /// Seed for the next map.
    seed: u64,
}

impl MapGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the settings are not valid.
    pub fn new(settings: MapSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let seed: u64 = settings.seed.unwrap_or_else(|| rand::rng().random());
        debug!("Settings: {settings:?}  Seed = {seed}");
        Ok(Self { settings, seed })
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Seed that the next call to [`MapGenerator::generate`] uses.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate and return a map.
    ///
    /// The random generator is seeded once per map. A new seed for the next map is then drawn
    /// from it, so that successive calls produce different maps.
    ///
    /// # Errors
    ///
    /// The method returns an error if no valid mine field could be built. No partial map is ever
    /// returned.
    pub fn generate(&mut self, spawner: &mut dyn CellSpawner) -> Result<GameMap, GenerationError> {
        let started: Instant = Instant::now();
        let seed: u64 = self.seed;
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let start: HexCoordinates = HexCoordinates::ORIGIN;
        let cell_size: f32 = self.settings.cell_size();

        let mut grid: Grid = Grid::new(self.settings.radius)?;
        for cell in grid.iter() {
            spawner.spawn_cell(cell, cell.coordinates.to_position(cell_size));
        }

        let objectives: Objectives =
            ObjectivePlacer::new(start, self.settings.mask_count, self.settings.detector_count)
                .place(&mut grid, &mut rng);
        for coords in objectives.locations() {
            if let Some(cell) = grid.get(*coords) {
                spawner.spawn_objective(cell, coords.to_position(cell_size));
            }
        }

        let mut placer: HazardPlacer = HazardPlacer::new(
            start,
            objectives.locations(),
            self.settings.hazard_count,
            self.settings.max_attempts,
        );
        let result: Result<Grid, HazardError> = placer.generate(&grid, &mut rng);
        self.seed = rng.random();
        let grid: Grid = result?;

        let stats: GenerationStats = GenerationStats {
            hazards: placer.stats.clone(),
            hazard_duration: placer.duration,
            duration: started.elapsed().as_secs_f32(),
        };
        let map: GameMap = GameMap {
            seed,
            start,
            grid,
            objectives,
            stats,
        };

        if log_enabled!(Level::Debug) {
            debug!("Map generated with seed {seed}:");
            for line in draw::render(&map) {
                debug!("{line}");
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cell::ObjectiveKind;

    /// Count the spawned cells and objectives.
    #[derive(Default)]
    struct Counter {
        cells: usize,
        objectives: Vec<ObjectiveKind>,
    }

    impl CellSpawner for Counter {
        fn spawn_cell(&mut self, _cell: &Cell, _position: (f32, f32)) {
            self.cells += 1;
        }

        fn spawn_objective(&mut self, cell: &Cell, _position: (f32, f32)) {
            self.objectives.push(cell.objective);
        }
    }

    fn settings(seed: u64) -> MapSettings {
        MapSettings {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn invalid_settings_rejected() {
        let s: MapSettings = MapSettings {
            radius: -3,
            ..Default::default()
        };
        assert_eq!(
            MapGenerator::new(s).err(),
            Some(ConfigError::NegativeRadius(-3))
        );
    }

    #[test]
    fn spawner_called() {
        let mut generator: MapGenerator = MapGenerator::new(settings(12)).unwrap();
        let mut counter: Counter = Counter::default();
        let map: GameMap = generator.generate(&mut counter).unwrap();

        assert_eq!(counter.cells, 91);
        assert_eq!(counter.objectives.len(), 9);
        assert_eq!(counter.objectives[0], ObjectiveKind::Helipad);
        assert_eq!(counter.objectives[1], ObjectiveKind::Radio);
        assert_eq!(map.objectives().len(), 9);
    }

    #[test]
    fn successive_maps_differ() {
        let mut generator: MapGenerator = MapGenerator::new(settings(3)).unwrap();
        let first: GameMap = generator.generate(&mut NoSpawner).unwrap();
        assert_eq!(first.seed(), 3);
        let next_seed: u64 = generator.seed();
        let second: GameMap = generator.generate(&mut NoSpawner).unwrap();
        assert_eq!(second.seed(), next_seed);

        // The seed of a map reproduces it
        let mut again: MapGenerator = MapGenerator::new(settings(next_seed)).unwrap();
        let third: GameMap = again.generate(&mut NoSpawner).unwrap();
        assert_eq!(second.grid(), third.grid());
        assert_eq!(second.objectives(), third.objectives());
    }

    #[test]
    fn generated_map_is_valid() {
        let mut generator: MapGenerator = MapGenerator::new(settings(77)).unwrap();
        let map: GameMap = generator.generate(&mut NoSpawner).unwrap();
        assert!(map.isolated_cells().is_empty());
        assert!(map.encircled_cells().is_empty());
        assert_eq!(map.helipad(), map.objectives().helipad());
        assert_eq!(map.stats().hazards.attempt, 1);
    }

    #[test]
    fn error_chain() {
        let e: GenerationError = HazardError::AttemptsExhausted(10).into();
        assert!(e.source().is_some());
        assert_eq!(
            e.to_string(),
            "map generation failed: cannot build a valid mine field after 10 attempts"
        );
    }
}
