/*
lib.rs

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

pub mod config;
pub mod draw;
pub mod generator;

pub use config::{ConfigError, MapSettings};
pub use generator::cell::{Cell, ObjectiveKind};
pub use generator::grid::Grid;
pub use generator::hex_coordinates::HexCoordinates;
pub use generator::map_generator::{
    CellSpawner, GameMap, GenerationError, MapGenerator, NoSpawner,
};
