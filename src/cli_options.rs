/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a small map with a fixed seed:
//!
//! ```
//! $ hexmines -r 3 -n 6 --seed 42
//! Seed: 42
//!    * . . .
//!   . . . * .
//!  * . . . . T
//! . . . @ . * .
//!  M . . . . H
//!   . * . . R
//!    D . * T
//! @ start  * mine  H helipad  R radio  M mask  D detector  T tower
//! ```
//!
//! Generate 100 maps and print some statistics:
//!
//! ```
//! $ hexmines -c 100 --summary > /dev/null
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use hexmines::config::{COPYRIGHT_NOTICE, MapSettings};
use hexmines::draw;
use hexmines::generator::map_generator::{GameMap, MapGenerator, NoSpawner};

/// Generate random hexagonal mine fields.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// JSON file with the generation settings
    #[arg(short = 'S', long)]
    settings: Option<PathBuf>,

    /// Number of cells between the center and the border of the map
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<i32>,

    /// Number of mines
    #[arg(short = 'n', long)]
    hazards: Option<usize>,

    /// Number of oxygen masks
    #[arg(short, long)]
    masks: Option<usize>,

    /// Number of mine detectors
    #[arg(short = 'D', long)]
    detectors: Option<usize>,

    /// Space between cells, from 0.8 to 2.0
    #[arg(long)]
    spacing: Option<f32>,

    /// Number of attempts to bury the mines before giving up
    #[arg(short, long)]
    attempts: Option<usize>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of maps to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the maps in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the maps
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the settings from the settings file and the command-line options.
    fn map_settings(&self) -> Result<MapSettings, String> {
        let mut settings: MapSettings = match &self.settings {
            Some(path) => match MapSettings::from_file(path) {
                Ok(Some(s)) => s,
                Ok(None) => return Err(format!("{}: no such file", path.display())),
                Err(e) => return Err(format!("{}: {e}", path.display())),
            },
            None => MapSettings::default(),
        };

        if let Some(v) = self.radius {
            settings.radius = v;
        }
        if let Some(v) = self.hazards {
            settings.hazard_count = v;
        }
        if let Some(v) = self.masks {
            settings.mask_count = v;
        }
        if let Some(v) = self.detectors {
            settings.detector_count = v;
        }
        if let Some(v) = self.spacing {
            settings.spacing = v;
        }
        if let Some(v) = self.attempts {
            settings.max_attempts = v;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        Ok(settings)
    }
}

/// Print the map as text.
fn print_map(map: &GameMap) {
    println!("Seed: {}", map.seed());
    for line in draw::render(map) {
        println!("{line}");
    }
    println!("{}", draw::legend());
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: MapSettings = match args.map_settings() {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };

    let mut generator: MapGenerator = match MapGenerator::new(settings) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut bridges: usize = 0;
    let mut rescues: usize = 0;
    let mut errors: usize = 0;
    let mut generated: usize = 0;

    for i in 0..args.count {
        debug!("Map {i}");

        let map: GameMap = match generator.generate(&mut NoSpawner) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: {e}");
                errors += 1;
                continue;
            }
        };

        // Verify that the map is playable
        let isolated = map.isolated_cells();
        if !isolated.is_empty() {
            eprintln!("Seed {}: isolated cells: {isolated:?}", map.seed());
            panic!("Bug: some cells cannot be reached");
        }
        let encircled = map.encircled_cells();
        if !encircled.is_empty() {
            eprintln!("Seed {}: encircled cells: {encircled:?}", map.seed());
            panic!("Bug: some cells are surrounded by mines");
        }

        let stats = map.stats();
        total += stats.duration;
        if stats.duration > max {
            max = stats.duration;
        }
        attempts += stats.hazards.attempt;
        bridges += stats.hazards.bridges;
        rescues += stats.hazards.rescues;
        generated += 1;

        if args.json {
            match serde_json::to_string_pretty(&map) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Error: cannot serialize the map: {e}");
                    return 1;
                }
            }
        } else {
            print_map(&map);
        }
    }

    // Print some stats
    if args.summary && generated > 0 {
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
           bridges = {}
           rescues = {}
            errors = {}",
            total,
            total / generated as f32,
            max,
            attempts as f32 / generated as f32,
            bridges,
            rescues,
            errors
        );
    }

    if errors > 0 { 2 } else { 0 }
}
