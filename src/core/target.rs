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

//! Render targets
//!
//! The rasterizer never owns pixels. Every draw call takes the target it
//! writes to as an explicit `&mut impl PixelSink`, calls
//! [`PixelSink::set_pixel`] at most once per covered pixel, and has no other
//! side effect. Pixels arrive in scanline order: top to bottom, left to right
//! within a scanline.

use super::color::{unpack_b, unpack_g, unpack_r};
use super::error::{RasterError, Result};

/// Destination for rasterized pixels
pub trait PixelSink {
    /// Set the pixel at (x, y) to a packed 24-bit color
    ///
    /// Returns `false` if the target refuses the write. The rasterizer then
    /// aborts the current primitive with
    /// [`RasterError::PixelRejected`](super::error::RasterError::PixelRejected).
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool {
        (**self).set_pixel(x, y, color)
    }
}

/// An in-memory framebuffer of packed 24-bit pixels
///
/// Stored row-major (left-to-right, top-to-bottom). Writes outside the buffer
/// are discarded and still reported as accepted, so shapes that leave the
/// screen are drawn partially instead of failing.
///
/// # Examples
///
/// ```
/// use scanfill::core::{Framebuffer, PixelSink};
///
/// let mut fb = Framebuffer::new(320, 240).unwrap();
/// fb.set_pixel(10, 20, 0xFFFFFF);
/// assert_eq!(fb.get_pixel(10, 20), Some(0xFFFFFF));
/// assert_eq!(fb.get_pixel(320, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a black framebuffer
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Allocation`] if `width * height` pixels cannot
    /// be allocated, including when the product overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width.checked_mul(height).unwrap_or(usize::MAX);
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|source| RasterError::Allocation {
                requested: len,
                source,
            })?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Read a pixel, or `None` outside the buffer
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw packed pixels in row-major order
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Expand to 8-bit RGB triples in row-major order
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&c| [unpack_r(c), unpack_g(c), unpack_b(c)])
            .collect()
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl PixelSink for Framebuffer {
    #[inline(always)]
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
        true
    }
}

/// One recorded pixel write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: u32,
}

/// A sink that records every write in call order
///
/// Useful for inspecting exactly which pixels a primitive covers, including
/// those outside any screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelTrace {
    pixels: Vec<Pixel>,
}

impl PixelTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Recorded coordinates in call order
    pub fn coords(&self) -> Vec<(i32, i32)> {
        self.pixels.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Color of the first write to (x, y)
    pub fn color_at(&self, x: i32, y: i32) -> Option<u32> {
        self.pixels
            .iter()
            .find(|p| p.x == x && p.y == y)
            .map(|p| p.color)
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
    }
}

impl PixelSink for PixelTrace {
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool {
        self.pixels.push(Pixel { x, y, color });
        true
    }
}
