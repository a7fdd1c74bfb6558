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

//! Scene description and rendering
//!
//! A scene is a target size, a background color and an ordered list of
//! shapes. Scenes are read from TOML or JSON and rendered front to back into a
//! [`Framebuffer`], so later shapes overdraw earlier ones.
//!
//! # Format
//!
//! ```toml
//! width = 320
//! height = 240
//! background = 0x000000
//!
//! [[shapes]]
//! kind = "triangle"
//! points = [{ x = 10, y = 10 }, { x = 300, y = 40 }, { x = 120, y = 220 }]
//! color = 0x3366FF
//!
//! [[shapes]]
//! kind = "line"
//! from = { x = 0, y = 0 }
//! to = { x = 319, y = 239 }
//! color = 0xFFFFFF
//! ```
//!
//! Shape kinds: `line`, `polyline`, `triangle`, `wire_triangle`,
//! `gradient_triangle`. Colors are packed `0xRRGGBB` integers.

use std::fs;
use std::path::Path;

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::error::{RasterError, Result};
use crate::core::geometry::{Point, Vertex};
use crate::core::render::{
    draw_line, draw_polyline, draw_wire_triangle, fill_gradient_triangle, fill_triangle,
};
use crate::core::target::{Framebuffer, PixelSink};

const DEFAULT_WIDTH: usize = 1366;
const DEFAULT_HEIGHT: usize = 768;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

/// A point with its own color, for gradient triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredPoint {
    pub x: i32,
    pub y: i32,
    pub color: u32,
}

impl From<ColoredPoint> for Vertex {
    fn from(p: ColoredPoint) -> Self {
        Vertex::new(Point::new(p.x, p.y), Color::from_u32(p.color))
    }
}

/// One drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line { from: Point, to: Point, color: u32 },
    Polyline { points: Vec<Point>, color: u32 },
    Triangle { points: [Point; 3], color: u32 },
    WireTriangle { points: [Point; 3], color: u32 },
    GradientTriangle { vertices: [ColoredPoint; 3] },
}

impl Shape {
    /// Rasterize this shape into a target
    pub fn draw<S: PixelSink + ?Sized>(&self, target: &mut S) -> Result<()> {
        match self {
            Shape::Line { from, to, color } => draw_line(target, *from, *to, *color),
            Shape::Polyline { points, color } => draw_polyline(target, points, *color),
            Shape::Triangle { points, color } => {
                let [a, b, c] = *points;
                fill_triangle(target, a, b, c, *color)
            }
            Shape::WireTriangle { points, color } => {
                let [a, b, c] = *points;
                draw_wire_triangle(target, a, b, c, *color)
            }
            Shape::GradientTriangle { vertices } => {
                let [a, b, c] = *vertices;
                fill_gradient_triangle(target, a.into(), b.into(), c.into())
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Polyline { .. } => "polyline",
            Shape::Triangle { .. } => "triangle",
            Shape::WireTriangle { .. } => "wire_triangle",
            Shape::GradientTriangle { .. } => "gradient_triangle",
        }
    }
}

/// Outcome of rendering a scene
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Shapes drawn completely
    pub drawn: usize,
    /// Shapes aborted by an error
    pub failed: usize,
}

/// A renderable scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub background: u32,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: 0,
            shapes: Vec::new(),
        }
    }
}

impl Scene {
    /// The built-in demo: an RGB gradient triangle outlined in black
    pub fn demo() -> Self {
        let w = DEFAULT_WIDTH as i32;
        let h = DEFAULT_HEIGHT as i32;
        let left = ColoredPoint {
            x: 200,
            y: h - 100,
            color: Color::RED.to_u32(),
        };
        let top = ColoredPoint {
            x: w / 2,
            y: 100,
            color: Color::GREEN.to_u32(),
        };
        let right = ColoredPoint {
            x: w - 200,
            y: h - 100,
            color: Color::BLUE.to_u32(),
        };
        let corner = |p: ColoredPoint| Point::new(p.x, p.y);

        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Color::WHITE.to_u32(),
            shapes: vec![
                Shape::GradientTriangle {
                    vertices: [left, top, right],
                },
                Shape::WireTriangle {
                    points: [corner(left), corner(top), corner(right)],
                    color: Color::BLACK.to_u32(),
                },
            ],
        }
    }

    /// Load a scene file, choosing the format by extension
    ///
    /// `.json` files are parsed as JSON; anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let scene = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::info!(
            "Loaded scene {} ({}x{}, {} shapes)",
            path.display(),
            scene.width,
            scene.height,
            scene.shapes.len()
        );
        Ok(scene)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Draw every shape in order
    ///
    /// A shape that fails is logged and skipped; the rest are still drawn.
    pub fn render_into<S: PixelSink + ?Sized>(&self, target: &mut S) -> RenderStats {
        let mut stats = RenderStats::default();
        for (index, shape) in self.shapes.iter().enumerate() {
            match shape.draw(target) {
                Ok(()) => stats.drawn += 1,
                Err(err) => {
                    log::warn!("Shape #{} ({}) not drawn: {}", index, shape.name(), err);
                    stats.failed += 1;
                }
            }
        }
        stats
    }

    /// Render into a new framebuffer cleared to the background color
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Allocation`] if the framebuffer for the scene's
    /// dimensions cannot be allocated. Failed shapes are counted in
    /// [`RenderStats`] instead.
    pub fn rasterize(&self) -> Result<(Framebuffer, RenderStats)> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background);
        let stats = self.render_into(&mut fb);
        log::info!(
            "Rendered {} shapes ({} failed) into {}x{}",
            stats.drawn,
            stats.failed,
            self.width,
            self.height
        );
        Ok((fb, stats))
    }
}

/// Write a framebuffer as an 8-bit RGB PNG
pub fn write_png(fb: &Framebuffer, path: &Path) -> Result<()> {
    let dimension = |n: usize| {
        u32::try_from(n).map_err(|_| {
            RasterError::Image(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })
    };
    let (width, height) = (dimension(fb.width())?, dimension(fb.height())?);

    image::save_buffer(
        path,
        &fb.to_rgb_bytes(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    log::info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}
