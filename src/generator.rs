/*
generator.rs

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

//! Generate random mine fields.
//!
//! The map is an hexagon of cells addressed by [`hex_coordinates::HexCoordinates`].
//! The [`grid::Grid`] object owns the [`cell::Cell`] objects.
//!
//! A map is generated in three steps, all driven by [`map_generator::MapGenerator`]:
//!
//! * The grid is built for the requested radius.
//!
//! * The objectives (helipad, radio, masks, detectors, and towers) are placed by an
//!   [`objectives::ObjectivePlacer`] object, at least three steps away from the starting cell.
//!
//! * The mines are buried by an [`hazards::HazardPlacer`] object.
//!   A safe path to each objective is kept free of mines, and the mine field is then repaired so
//!   that every cell without a mine can be reached from the starting cell.
//!   If the repair fails, the mines are buried again from scratch.
//!   If it fails too many times, then the method returns an error.
//!
//! The breadth-first searches used during the generation are in [`search`].

pub mod cell;
pub mod grid;
pub mod hazards;
pub mod hex_coordinates;
pub mod map_generator;
pub mod objectives;
pub mod path;
pub mod search;
