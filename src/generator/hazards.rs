/*
hazards.rs

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

//! Bury the mines.
//!
//! An attempt works on a copy of the grid:
//!
//! 1. A safe zone is computed: the starting cell, one of its neighbors, the objectives, and the
//!    shortest path from the starting cell to each objective. No mine is buried there.
//! 2. The mines are randomly buried in the other cells.
//! 3. [`ensure_connectivity`] removes mines until every cell without a mine can be reached from
//!    the starting cell.
//! 4. [`fix_encircled`] removes a mine next to each cell that is completely surrounded by mines.
//!
//! The copy is returned only if all the steps succeed. Otherwise a new attempt starts from
//! scratch, up to [`HazardPlacer::max_attempts`] times.

use log::{Level, debug, error, log_enabled, warn};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::Grid;
use super::hex_coordinates::HexCoordinates;
use super::path::Path;
use super::search;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum HazardError {
    /// No way out of an isolated pocket, even through mines. Only happens if the map is broken.
    NoBridge(HexCoordinates),

    /// All the attempts failed.
    AttemptsExhausted(usize),
}

impl fmt::Display for HazardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HazardError::NoBridge(c) => {
                write!(f, "cannot connect the cell {c} to the starting area")
            }
            HazardError::AttemptsExhausted(n) => {
                write!(f, "cannot build a valid mine field after {n} attempts")
            }
        }
    }
}

impl Error for HazardError {}

/// What happened during the successful attempt.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct HazardStats {
    /// Number of the successful attempt, starting at 1.
    pub attempt: usize,

    /// Number of cells in the safe zone.
    pub safe_zone: usize,

    /// Number of mines buried before the repairs.
    pub placed: usize,

    /// Number of paths dug to reconnect isolated pockets.
    pub bridges: usize,

    /// Number of mines removed while digging these paths.
    pub bridge_clears: usize,

    /// Number of mines removed around encircled cells.
    pub rescues: usize,
}

/// [`HazardPlacer`] object.
pub struct HazardPlacer<'a> {
    /// Starting cell of the player.
    start: HexCoordinates,

    /// Coordinates of the objectives.
    objectives: &'a [HexCoordinates],

    /// Number of mines to bury.
    hazard_count: usize,

    /// Number of attempts before giving up.
    pub max_attempts: usize,

    /// Statistics of the last successful generation.
    pub stats: HazardStats,

    /// Duration in seconds it took to generate the last mine field.
    pub duration: f32,

    /// Safe zone of the last successful attempt.
    safe_zone: HashSet<HexCoordinates>,
}

impl<'a> HazardPlacer<'a> {
    /// Create the object.
    pub fn new(
        start: HexCoordinates,
        objectives: &'a [HexCoordinates],
        hazard_count: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            start,
            objectives,
            hazard_count,
            max_attempts,
            stats: HazardStats::default(),
            duration: 0.0,
            safe_zone: HashSet::new(),
        }
    }

    /// Safe zone of the last successful attempt.
    pub fn safe_zone(&self) -> &HashSet<HexCoordinates> {
        &self.safe_zone
    }

    /// Generate and return a copy of the grid with the mines.
    ///
    /// The mines already present in `grid` are ignored.
    ///
    /// # Errors
    ///
    /// The method returns an error if no attempt produced a valid mine field. The provided grid
    /// is left untouched.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Grid, HazardError> {
        let started: Instant = Instant::now();
        self.duration = 0.0;

        for attempt in 1..=self.max_attempts {
            debug!("Mine field attempt {attempt}/{}", self.max_attempts);
            let mut stats: HazardStats = HazardStats {
                attempt,
                ..Default::default()
            };
            match self.try_place(grid, rng, &mut stats) {
                Ok((snapshot, safe_zone)) => {
                    self.duration = started.elapsed().as_secs_f32();
                    debug!("Mine field done: {stats:?}  Duration = {}", self.duration);
                    self.stats = stats;
                    self.safe_zone = safe_zone;
                    return Ok(snapshot);
                }
                Err(e) => debug!("    Attempt {attempt} abandoned: {e}"),
            }
        }

        self.duration = started.elapsed().as_secs_f32();
        error!("Failed to generate a valid mine field");
        Err(HazardError::AttemptsExhausted(self.max_attempts))
    }

    /// Run one attempt on a copy of the grid.
    fn try_place<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        rng: &mut R,
        stats: &mut HazardStats,
    ) -> Result<(Grid, HashSet<HexCoordinates>), HazardError> {
        let mut snapshot: Grid = grid.clone();
        snapshot.clear_hazards();

        let safe_zone: HashSet<HexCoordinates> =
            compute_safe_zone(&snapshot, self.start, self.objectives, rng);
        stats.safe_zone = safe_zone.len();
        debug!("    Safe zone: {} cells", safe_zone.len());

        let mut available: Vec<HexCoordinates> = snapshot
            .coordinates()
            .copied()
            .filter(|c| !safe_zone.contains(c))
            .collect();
        while stats.placed < self.hazard_count && !available.is_empty() {
            let idx: usize = rng.random_range(0..available.len());
            snapshot.set_hazard(available.remove(idx), true);
            stats.placed += 1;
        }
        if stats.placed < self.hazard_count {
            warn!(
                "Not enough room for the mines: {} buried out of {}",
                stats.placed, self.hazard_count
            );
        }

        let before: usize = snapshot.hazard_count();
        stats.bridges = ensure_connectivity(&mut snapshot, self.start)?;
        stats.bridge_clears = before - snapshot.hazard_count();
        stats.rescues = fix_encircled(&mut snapshot, rng);

        Ok((snapshot, safe_zone))
    }
}

/// Return the cells where no mine can be buried.
///
/// The safe zone includes the starting cell, a random neighbor of the starting cell, the
/// objectives, and the shortest path from the starting cell to each objective.
pub fn compute_safe_zone<R: Rng + ?Sized>(
    grid: &Grid,
    start: HexCoordinates,
    objectives: &[HexCoordinates],
    rng: &mut R,
) -> HashSet<HexCoordinates> {
    let mut safe_zone: HashSet<HexCoordinates> = HashSet::new();
    safe_zone.insert(start);

    let neighbors: Vec<HexCoordinates> = grid.neighbors(start);
    if !neighbors.is_empty() {
        safe_zone.insert(neighbors[rng.random_range(0..neighbors.len())]);
    }

    for objective in objectives {
        safe_zone.insert(*objective);
        if let Some(path) = search::find_path(grid, start, *objective) {
            safe_zone.extend(path.get().iter().copied());
        }
    }
    safe_zone
}

/// Remove mines until every cell without a mine can be reached from `start`.
///
/// For each isolated cell, the shortest path to the reachable area is searched through the mines,
/// and the mines along that path are removed. The reachable area is then computed again, because
/// a path only reconnects one pocket.
///
/// Return the number of paths that have been dug.
///
/// # Errors
///
/// The function returns an error if an isolated cell cannot be connected at all.
pub fn ensure_connectivity(grid: &mut Grid, start: HexCoordinates) -> Result<usize, HazardError> {
    let mut bridges: usize = 0;

    loop {
        let reachable: HashSet<HexCoordinates> = search::reachable(grid, start);
        let Some(isolated) = grid
            .iter()
            .find(|c| !c.has_hazard && !reachable.contains(&c.coordinates))
            .map(|c| c.coordinates)
        else {
            return Ok(bridges);
        };

        let bridge: Path = search::find_path_to_any(grid, isolated, &reachable)
            .ok_or(HazardError::NoBridge(isolated))?;
        if log_enabled!(Level::Debug) {
            let steps: Vec<String> = bridge.get().iter().map(|c| c.to_string()).collect();
            debug!("    Isolated cell {isolated}: bridge {}", steps.join(" "));
        }
        for step in bridge.get() {
            if grid.has_hazard(*step) {
                grid.set_hazard(*step, false);
            }
        }
        bridges += 1;
    }
}

/// Remove a random mine around each cell that is surrounded by mines.
///
/// This is a single pass, and the connectivity is not verified again afterward.
///
/// Return the number of removed mines.
pub fn fix_encircled<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let coordinates: Vec<HexCoordinates> = grid.coordinates().copied().collect();
    let mut rescues: usize = 0;

    for coords in coordinates {
        if grid.has_hazard(coords) {
            continue;
        }
        let neighbors: Vec<HexCoordinates> = grid.neighbors(coords);
        if neighbors.is_empty() || !neighbors.iter().all(|n| grid.has_hazard(*n)) {
            continue;
        }
        let rescue: HexCoordinates = neighbors[rng.random_range(0..neighbors.len())];
        debug!("    Cell {coords} encircled: removing the mine at {rescue}");
        grid.set_hazard(rescue, false);
        rescues += 1;
    }
    rescues
}
