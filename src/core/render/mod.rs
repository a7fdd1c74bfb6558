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

//! Primitive rasterization
//!
//! Lines and triangles are rasterized by walking interpolated boundaries:
//!
//! - Lines step one pixel per unit along their major axis and interpolate the
//!   minor coordinate ([`line`]).
//! - Triangles sort their vertices by Y, build a left and a right wall from
//!   three edge interpolations, and fill each scanline between the walls
//!   ([`triangle`]).
//! - Gradient triangles reuse the same walls and color every covered pixel by
//!   barycentric blending of the vertex colors ([`gradient`]).
//!
//! Every draw call runs to completion or returns an error; there is no global
//! state and the target is always passed in explicitly.
//!
//! # References
//!
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)
//! - [Scratchapixel: Rasterization](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation)

pub mod gradient;
pub mod line;
pub mod triangle;
#[cfg(test)]
mod tests;

pub use gradient::{barycentric, fill_gradient_triangle, Barycentric, BarycentricBasis};
pub use line::{draw_line, draw_polyline};
pub use triangle::{draw_wire_triangle, fill_triangle, Scanline, TriangleWalls};

use super::error::{RasterError, Result};
use super::target::PixelSink;

/// Hand one pixel to the target, turning a refusal into an error
#[inline(always)]
fn put_pixel<S: PixelSink + ?Sized>(target: &mut S, x: i32, y: i32, color: u32) -> Result<()> {
    if target.set_pixel(x, y, color) {
        Ok(())
    } else {
        Err(RasterError::PixelRejected { x, y })
    }
}
