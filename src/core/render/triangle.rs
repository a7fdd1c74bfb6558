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

//! Flat-color triangle scan conversion
//!
//! # Algorithm
//!
//! 1. Sort vertices by Y coordinate (P0.y <= P1.y <= P2.y)
//! 2. Interpolate X along the three edges with Y as the independent axis:
//!    `x01`, `x02` (the long edge) and `x12`
//! 3. Join `x01` and `x12` into the bent wall `x012`, dropping the repeated
//!    row of P1 so it has one entry per scanline, like `x02`
//! 4. Compare the two walls at the middle scanline to decide which is left
//! 5. Fill every scanline strictly between the walls
//!
//! # Coverage rules
//!
//! - Scanlines run from `P0.y` up to but excluding `P2.y`; the bottom row of a
//!   triangle is never filled.
//! - On each scanline the fill starts at `trunc(left + 1)` and stops before
//!   `right`, so neither wall pixel is written.
//!
//! Adjacent triangles sharing an edge therefore never write the same pixel on
//! that edge. An outline drawn with [`draw_wire_triangle`] rounds to the
//! nearest pixel instead, so on fractional walls it can overlap the first or
//! last filled pixel of a row.

use super::super::error::Result;
use super::super::geometry::{doubled_signed_area, sort3_by_y, Point};
use super::super::interpolate::{concat, interpolate, Span};
use super::super::target::PixelSink;
use super::line::draw_line;
use super::put_pixel;

/// The covered interval of one scanline
///
/// `x_start..x_end` is half-open and empty when `x_start >= x_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanline {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Scanline {
    pub fn xs(&self) -> std::ops::Range<i32> {
        self.x_start..self.x_end
    }
}

/// Left and right boundaries of a Y-sorted triangle
///
/// Both walls hold one X per scanline from the top vertex to the bottom
/// vertex inclusive, indexed by `y - top`.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleWalls {
    top: i32,
    bottom: i32,
    left: Span,
    right: Span,
}

impl TriangleWalls {
    /// Build the walls of a triangle
    ///
    /// The vertices may be given in any order; they are sorted by Y first.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Allocation`](crate::core::RasterError::Allocation)
    /// if any edge span cannot be allocated. Spans built before the failure
    /// are released on return.
    pub fn new(p0: Point, p1: Point, p2: Point) -> Result<Self> {
        let (p0, p1, p2) = sort3_by_y(p0, p1, p2, |p| p.y);

        let x01 = interpolate(p0.y, p0.x, p1.y, p1.x)?;
        let x02 = interpolate(p0.y, p0.x, p2.y, p2.x)?;
        let x12 = interpolate(p1.y, p1.x, p2.y, p2.x)?;
        let x012 = concat(&x01, &x12, true)?;
        debug_assert_eq!(x012.len(), x02.len());

        // The walls can only touch on the first or last row, so any row in
        // between decides the order for the whole triangle. A two-row
        // triangle has no such row; compare its top row instead.
        let m = (x012.len() / 2).min(x012.len().saturating_sub(2));
        let (left, right) = if x02[m] < x012[m] {
            (x02, x012)
        } else {
            (x012, x02)
        };

        Ok(Self {
            top: p0.y,
            bottom: p2.y,
            left,
            right,
        })
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn left(&self) -> &Span {
        &self.left
    }

    pub fn right(&self) -> &Span {
        &self.right
    }

    /// Covered interval of every filled scanline, top to bottom
    ///
    /// Yields rows `top..bottom`; the bottom row is excluded.
    pub fn scanlines(&self) -> impl Iterator<Item = Scanline> + '_ {
        (self.top..self.bottom)
            .zip(self.left.iter().zip(self.right.iter()))
            .map(|(y, (left, right))| Scanline {
                y,
                // `as` truncates toward zero and saturates
                x_start: (left + 1.0) as i32,
                x_end: right.ceil() as i32,
            })
    }
}

/// Fill a triangle with a single color
///
/// Pixels are emitted scanline by scanline, left to right. Zero-area
/// triangles (including zero-height ones) draw nothing.
///
/// # Errors
///
/// Returns an error if a wall span cannot be allocated or the target rejects
/// a pixel. Scanlines filled before the failure stay drawn.
///
/// # Examples
///
/// ```
/// use scanfill::core::{fill_triangle, PixelTrace, Point};
///
/// let mut trace = PixelTrace::new();
/// fill_triangle(
///     &mut trace,
///     Point::new(0, 0),
///     Point::new(4, 0),
///     Point::new(0, 4),
///     0x0000FF,
/// )
/// .unwrap();
/// assert_eq!(trace.coords(), vec![(1, 0), (2, 0), (3, 0), (1, 1), (2, 1), (1, 2)]);
/// ```
pub fn fill_triangle<S: PixelSink + ?Sized>(
    target: &mut S,
    p0: Point,
    p1: Point,
    p2: Point,
    color: u32,
) -> Result<()> {
    log::trace!(
        "Rendering triangle: ({}, {}), ({}, {}), ({}, {}) color={:06X}",
        p0.x,
        p0.y,
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        color
    );

    let (p0, p1, p2) = sort3_by_y(p0, p1, p2, |p| p.y);

    if doubled_signed_area(p0, p1, p2) == 0 {
        log::debug!("Skipping degenerate triangle {:?} {:?} {:?}", p0, p1, p2);
        return Ok(());
    }

    let walls = TriangleWalls::new(p0, p1, p2)?;
    for line in walls.scanlines() {
        for x in line.xs() {
            put_pixel(target, x, line.y, color)?;
        }
    }

    Ok(())
}

/// Draw the outline of a triangle as three lines P0→P1→P2→P0
pub fn draw_wire_triangle<S: PixelSink + ?Sized>(
    target: &mut S,
    p0: Point,
    p1: Point,
    p2: Point,
    color: u32,
) -> Result<()> {
    draw_line(target, p0, p1, color)?;
    draw_line(target, p1, p2, color)?;
    draw_line(target, p2, p0, color)
}
