/*
cell.rs

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

//! Cells of the hexagonal map.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

use super::hex_coordinates::HexCoordinates;

/// Objective hosted by a cell.
///
/// - `Helipad` is the extraction point. The player wins by reaching it with the radio.
/// - `Radio` reveals the location of the helipad when picked up.
/// - `Mask` and `Detector` are consumable items.
/// - `Tower` is a capture point.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ObjectiveKind {
    #[default]
    None,
    Helipad,
    Radio,
    Mask,
    Detector,
    Tower,
}

impl ObjectiveKind {
    /// Character used to represent the objective in text output.
    pub fn symbol(&self) -> char {
        match self {
            ObjectiveKind::None => '.',
            ObjectiveKind::Helipad => 'H',
            ObjectiveKind::Radio => 'R',
            ObjectiveKind::Mask => 'M',
            ObjectiveKind::Detector => 'D',
            ObjectiveKind::Tower => 'T',
        }
    }
}

/// State of a cell.
///
/// Only [`Cell::has_hazard`] and [`Cell::objective`] matter to the generator. The other flags are
/// updated by the game while the player explores the map.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Coordinates of the cell in the map.
    pub coordinates: HexCoordinates,

    /// Whether a mine is buried in the cell.
    pub has_hazard: bool,

    /// Objective hosted by the cell, if any.
    pub objective: ObjectiveKind,

    /// Whether the cell is visible to the player.
    pub revealed: bool,

    /// Whether the mine of the cell has been spotted by a detector.
    pub hazard_revealed: bool,

    /// Whether the tower of the cell has been captured.
    pub captured: bool,
}

impl Cell {
    /// Create a [`Cell`] object with no mine and no objective.
    pub fn new(coordinates: HexCoordinates) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    /// Whether the cell hosts an objective.
    pub fn has_objective(&self) -> bool {
        self.objective != ObjectiveKind::None
    }

    /// Make the cell visible.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Mark the mine as spotted. Nothing happens if the cell has no mine.
    pub fn reveal_hazard(&mut self) {
        if self.has_hazard {
            self.hazard_revealed = true;
        }
    }

    /// The player steps on the cell.
    ///
    /// Return `true` if a mine exploded. The mine is then removed from the cell.
    pub fn trigger_hazard(&mut self) -> bool {
        if self.has_hazard {
            debug!("Mine triggered at {}", self.coordinates);
            self.has_hazard = false;
            self.hazard_revealed = false;
            return true;
        }
        false
    }

    /// Capture the tower of the cell.
    ///
    /// Return `true` if the tower has just been captured, `false` if the cell has no tower or if it
    /// was already captured.
    pub fn capture(&mut self) -> bool {
        if self.objective == ObjectiveKind::Tower && !self.captured {
            debug!("Tower at {} captured", self.coordinates);
            self.captured = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let c: Cell = Cell::new(HexCoordinates::new(1, -1));
        assert!(!c.has_hazard);
        assert!(!c.has_objective());
        assert!(!c.revealed);
    }

    #[test]
    fn trigger_clears_the_mine() {
        let mut c: Cell = Cell::new(HexCoordinates::ORIGIN);
        assert!(!c.trigger_hazard());
        c.has_hazard = true;
        c.reveal_hazard();
        assert!(c.hazard_revealed);
        assert!(c.trigger_hazard());
        assert!(!c.has_hazard);
        assert!(!c.hazard_revealed);
    }

    #[test]
    fn capture_only_towers_once() {
        let mut c: Cell = Cell::new(HexCoordinates::ORIGIN);
        assert!(!c.capture());
        c.objective = ObjectiveKind::Tower;
        assert!(c.capture());
        assert!(!c.capture());
    }

    #[test]
    fn objective_names() {
        assert_eq!(ObjectiveKind::Helipad.to_string(), "helipad");
        assert_eq!(ObjectiveKind::from_repr(5), Some(ObjectiveKind::Tower));
        assert_eq!(ObjectiveKind::Detector.symbol(), 'D');
    }
}
