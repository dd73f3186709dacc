/*
config.rs

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

//! Map generation settings.
//!
//! The settings can be read from a JSON file. Missing fields get their default value:
//!
//! ```json
//! {
//!     "radius": 6,
//!     "hazard_count": 30,
//!     "seed": 1234
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain

License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of towers on every map.
pub const TOWER_COUNT: usize = 3;

/// Minimum distance between the starting cell and any objective.
pub const OBJECTIVE_MIN_DISTANCE: u32 = 3;

/// Accepted range for [`MapSettings::spacing`].
pub const SPACING_RANGE: std::ops::RangeInclusive<f32> = 0.8..=2.0;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The map radius is negative.
    NegativeRadius(i32),

    /// The cell size is zero, negative, or not a number.
    InvalidHexSize(f32),

    /// The spacing factor is outside [`SPACING_RANGE`].
    InvalidSpacing(f32),

    /// At least one generation attempt is required.
    NoAttempt,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NegativeRadius(r) => write!(f, "the map radius cannot be negative ({r})"),
            ConfigError::InvalidHexSize(s) => {
                write!(f, "the cell size must be a positive number ({s})")
            }
            ConfigError::InvalidSpacing(s) => write!(
                f,
                "the spacing must be between {} and {} ({s})",
                SPACING_RANGE.start(),
                SPACING_RANGE.end()
            ),
            ConfigError::NoAttempt => write!(f, "the number of attempts must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Parameters of the map generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    /// Number of cells between the center of the map and its border.
    pub radius: i32,

    /// Size of a cell, used to compute the cell positions.
    pub hex_size: f32,

    /// Factor applied to [`MapSettings::hex_size`] to leave some room between cells.
    pub spacing: f32,

    /// Number of mines to bury.
    pub hazard_count: usize,

    /// Number of oxygen masks.
    pub mask_count: usize,

    /// Number of mine detectors.
    pub detector_count: usize,

    /// Number of times the mines are placed again from scratch before giving up.
    pub max_attempts: usize,

    /// Seed for the random generator. A random seed is drawn if not set.
    pub seed: Option<u64>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            radius: 5,
            hex_size: 1.0,
            spacing: 1.0,
            hazard_count: 20,
            mask_count: 2,
            detector_count: 2,
            max_attempts: 10,
            seed: None,
        }
    }
}

impl MapSettings {
    /// Verify the settings.
    ///
    /// # Errors
    ///
    /// Return the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius < 0 {
            return Err(ConfigError::NegativeRadius(self.radius));
        }
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            return Err(ConfigError::InvalidHexSize(self.hex_size));
        }
        if !SPACING_RANGE.contains(&self.spacing) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempt);
        }
        Ok(())
    }

    /// Cell size used to compute the position of the cells on screen.
    pub fn cell_size(&self) -> f32 {
        self.hex_size * self.spacing
    }

    /// Read the settings from a JSON file.
    ///
    /// Return `None` if the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<MapSettings>, Box<dyn Error>> {
        debug!("Settings file: {path:?}");
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: MapSettings = serde_json::from_reader(reader)?;
        Ok(Some(settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MapSettings::default().validate(), Ok(()));
    }

    #[test]
    fn invalid_settings() {
        let mut s: MapSettings = MapSettings {
            radius: -2,
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ConfigError::NegativeRadius(-2)));

        s.radius = 0;
        s.hex_size = 0.0;
        assert_eq!(s.validate(), Err(ConfigError::InvalidHexSize(0.0)));

        s.hex_size = 1.0;
        s.spacing = 2.5;
        assert_eq!(s.validate(), Err(ConfigError::InvalidSpacing(2.5)));

        s.spacing = 0.8;
        s.max_attempts = 0;
        assert_eq!(s.validate(), Err(ConfigError::NoAttempt));
    }

    #[test]
    fn partial_json() {
        let s: MapSettings = serde_json::from_str(r#"{"radius": 7, "seed": 42}"#).unwrap();
        assert_eq!(s.radius, 7);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.hazard_count, 20);
        assert_eq!(s.max_attempts, 10);
    }

    #[test]
    fn missing_file() {
        let r = MapSettings::from_file(Path::new("/nonexistent/hexmines/settings.json"));
        assert!(matches!(r, Ok(None)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NegativeRadius(-1).to_string(),
            "the map radius cannot be negative (-1)"
        );
    }
}
