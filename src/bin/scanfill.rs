// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! scanfill command line entry point
//!
//! Renders a scene file (or the built-in demo scene) with the software
//! rasterizer and writes the result as a PNG image.

use std::path::PathBuf;

use clap::Parser;
use scanfill::scene::{write_png, Scene};

/// Render 2D lines and triangles to a PNG without a GPU
#[derive(Debug, Parser)]
#[command(name = "scanfill", version, about)]
struct Args {
    /// Scene file (.toml or .json); the built-in demo is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "scanfill.png")]
    output: PathBuf,

    /// Override the scene width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Override the scene height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Override the background color (0xRRGGBB)
    #[arg(long, value_parser = parse_color)]
    background: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_color(text: &str) -> Result<u32, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix('#'))
        .unwrap_or(text);
    let value = u32::from_str_radix(digits, 16).map_err(|e| format!("invalid color: {e}"))?;
    if value > 0xFF_FFFF {
        return Err(format!("color {text} does not fit in 24 bits"));
    }
    Ok(value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            Scene::demo()
        }
    };

    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    if let Some(background) = args.background {
        scene.background = background;
    }

    let (framebuffer, stats) = scene.rasterize()?;
    write_png(&framebuffer, &args.output)?;

    if stats.failed > 0 {
        log::warn!("{} of {} shapes were not drawn", stats.failed, scene.shapes.len());
    }

    Ok(())
}
