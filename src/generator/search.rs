/*
search.rs

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

//! Breadth-first search in the map.
//!
//! All the searches share [`breadth_first`]. The frontier is a FIFO queue and the neighbors are
//! visited in the order returned by [`HexCoordinates::neighbors`], so for a given map the result is
//! always the same.
//!
//! Three searches are built on top of it:
//!
//! * [`find_path`] returns the shortest path between two cells, mines ignored.
//! * [`reachable`] returns all the cells that can be reached from a cell without stepping on a
//!   mine.
//! * [`find_path_to_any`] returns the shortest path from a cell to the nearest cell of a set,
//!   mines ignored. The generator uses it to dig a way out of an isolated pocket.

use std::collections::{HashMap, HashSet, VecDeque};

use super::cell::Cell;
use super::grid::Grid;
use super::hex_coordinates::HexCoordinates;
use super::path::Path;

/// Result of a [`breadth_first`] search.
#[derive(Debug, Default)]
pub struct Search {
    /// Starting cell.
    start: HexCoordinates,

    /// For each visited cell, the cell it was discovered from.
    came_from: HashMap<HexCoordinates, HexCoordinates>,

    /// Visited cells, in discovery order.
    visited: Vec<HexCoordinates>,

    /// First dequeued cell that matched the goal, if any.
    pub goal: Option<HexCoordinates>,
}

impl Search {
    /// Whether the cell has been visited.
    pub fn is_visited(&self, coords: HexCoordinates) -> bool {
        (coords == self.start && !self.visited.is_empty()) || self.came_from.contains_key(&coords)
    }

    /// Rebuild the path from the starting cell to the given cell.
    ///
    /// Return `None` if the cell has not been visited.
    pub fn path_to(&self, end: HexCoordinates) -> Option<Path> {
        if !self.is_visited(end) {
            return None;
        }

        let mut steps: Vec<HexCoordinates> = Vec::new();
        let mut current: HexCoordinates = end;
        while current != self.start {
            steps.push(current);
            current = *self.came_from.get(&current)?;
        }
        steps.push(self.start);
        steps.reverse();
        Some(Path::from_vec(steps))
    }
}

/// Search the map from `start`.
///
/// The search stops when a dequeued cell matches `is_goal`.
/// A cell is only entered if `can_enter` accepts it. The starting cell is also tested: the search
/// is empty if it is rejected or if it is outside the map.
pub fn breadth_first<G, F>(
    grid: &Grid,
    start: HexCoordinates,
    mut is_goal: G,
    mut can_enter: F,
) -> Search
where
    G: FnMut(HexCoordinates) -> bool,
    F: FnMut(&Cell) -> bool,
{
    let mut search: Search = Search {
        start,
        ..Default::default()
    };

    match grid.get(start) {
        Some(cell) if can_enter(cell) => (),
        _ => return search,
    }

    let mut frontier: VecDeque<HexCoordinates> = VecDeque::with_capacity(grid.len());
    frontier.push_back(start);
    search.visited.push(start);

    while let Some(current) = frontier.pop_front() {
        if is_goal(current) {
            search.goal = Some(current);
            return search;
        }

        for next in current.neighbors() {
            if next == start || search.came_from.contains_key(&next) {
                continue;
            }
            let Some(cell) = grid.get(next) else {
                continue;
            };
            if !can_enter(cell) {
                continue;
            }
            search.came_from.insert(next, current);
            search.visited.push(next);
            frontier.push_back(next);
        }
    }
    search
}

/// Return the shortest path between two cells, mines ignored.
///
/// Return `None` if `end` cannot be reached, which only happens when a cell is outside the map.
pub fn find_path(grid: &Grid, start: HexCoordinates, end: HexCoordinates) -> Option<Path> {
    let search: Search = breadth_first(grid, start, |c| c == end, |_| true);
    search.path_to(search.goal?)
}

/// Return the cells that can be reached from `start` without stepping on a mine.
///
/// The set is empty if `start` has a mine or is outside the map.
pub fn reachable(grid: &Grid, start: HexCoordinates) -> HashSet<HexCoordinates> {
    breadth_first(grid, start, |_| false, |cell| !cell.has_hazard)
        .visited
        .into_iter()
        .collect()
}

/// Return the shortest path from `start` to the nearest cell in `targets`, mines ignored.
///
/// Return `None` if no cell of `targets` can be reached.
pub fn find_path_to_any(
    grid: &Grid,
    start: HexCoordinates,
    targets: &HashSet<HexCoordinates>,
) -> Option<Path> {
    let search: Search = breadth_first(grid, start, |c| targets.contains(&c), |_| true);
    search.path_to(search.goal?)
}
