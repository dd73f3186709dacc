/*
draw.rs

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

//! Draw the map as text.
//!
//! The cell positions are computed with [`HexCoordinates::to_position`], and then snapped to a
//! character grid where two adjacent cells on the same row are two characters apart:
//!
//! ```text
//!  . .
//! . @ .
//!  . .
//! ```

use crate::generator::cell::{Cell, ObjectiveKind};
use crate::generator::hex_coordinates::HexCoordinates;
use crate::generator::map_generator::GameMap;

/// Horizontal distance between a cell center and the border of the cell, for a size of 1.
const HALF_WIDTH: f32 = 0.866_025_4;

/// Vertical distance between two rows, for a size of 1.
const ROW_HEIGHT: f32 = 1.5;

/// Character for the starting cell.
const START_SYMBOL: char = '@';

/// Character for the mines.
const HAZARD_SYMBOL: char = '*';

/// Return the character that represents the cell.
fn symbol(cell: &Cell, start: HexCoordinates) -> char {
    if cell.coordinates == start {
        START_SYMBOL
    } else if cell.has_hazard {
        HAZARD_SYMBOL
    } else {
        cell.objective.symbol()
    }
}

/// Return the map as lines of text.
pub fn render(map: &GameMap) -> Vec<String> {
    let placed: Vec<(i32, i32, char)> = map
        .grid()
        .iter()
        .map(|cell| {
            let (x, y) = cell.coordinates.to_position(1.0);
            (
                (x / HALF_WIDTH).round() as i32,
                (y / ROW_HEIGHT).round() as i32,
                symbol(cell, map.start()),
            )
        })
        .collect();

    let (Some(min_col), Some(max_col), Some(min_row), Some(max_row)) = (
        placed.iter().map(|p| p.0).min(),
        placed.iter().map(|p| p.0).max(),
        placed.iter().map(|p| p.1).min(),
        placed.iter().map(|p| p.1).max(),
    ) else {
        return Vec::new();
    };

    let width: usize = (max_col - min_col + 1) as usize;
    let height: usize = (max_row - min_row + 1) as usize;
    let mut canvas: Vec<Vec<char>> = vec![vec![' '; width]; height];
    for (col, row, c) in placed {
        canvas[(row - min_row) as usize][(col - min_col) as usize] = c;
    }

    canvas
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Return the description of the symbols used by [`render`].
pub fn legend() -> String {
    let mut s: String = format!("{START_SYMBOL} start  {HAZARD_SYMBOL} mine");
    for kind in (1..=5).filter_map(ObjectiveKind::from_repr) {
        s.push_str(&format!("  {} {kind}", kind.symbol()));
    }
    s
}
