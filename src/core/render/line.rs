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

//! Line rendering implementation
//!
//! Lines are drawn by stepping one pixel at a time along the major axis and
//! interpolating the minor coordinate, rounded to the nearest pixel. Both
//! endpoints are included and no pixel is visited twice.

use super::super::error::Result;
use super::super::geometry::Point;
use super::super::interpolate::interpolate;
use super::super::target::PixelSink;
use super::put_pixel;

/// Rasterize a line between two points
///
/// When `|dx| > |dy|` the line is horizontal-major: points are ordered left to
/// right and one pixel is emitted per X. Otherwise (including `|dx| == |dy|`)
/// it is vertical-major: points are ordered top to bottom and one pixel is
/// emitted per Y. Emits `max(|dx|, |dy|) + 1` pixels.
///
/// # Errors
///
/// Returns an error if the coordinate span cannot be allocated or the target
/// rejects a pixel. Pixels emitted before the failure stay drawn.
///
/// # Examples
///
/// ```
/// use scanfill::core::{draw_line, PixelTrace, Point};
///
/// let mut trace = PixelTrace::new();
/// draw_line(&mut trace, Point::new(0, 0), Point::new(4, 0), 0xFFFFFF).unwrap();
/// assert_eq!(trace.coords(), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
/// ```
pub fn draw_line<S: PixelSink + ?Sized>(
    target: &mut S,
    p0: Point,
    p1: Point,
    color: u32,
) -> Result<()> {
    log::trace!(
        "Rendering line: ({}, {}) -> ({}, {}) color={:06X}",
        p0.x,
        p0.y,
        p1.x,
        p1.y,
        color
    );

    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();

    if dx > dy {
        // Horizontal-major: y as a function of x
        let (a, b) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        let ys = interpolate(a.x, a.y, b.x, b.y)?;
        for (x, y) in (a.x..=b.x).zip(ys.iter()) {
            put_pixel(target, x, y.round() as i32, color)?;
        }
    } else {
        // Vertical-major: x as a function of y
        let (a, b) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        let xs = interpolate(a.y, a.x, b.y, b.x)?;
        for (y, x) in (a.y..=b.y).zip(xs.iter()) {
            put_pixel(target, x.round() as i32, y, color)?;
        }
    }

    Ok(())
}

/// Draw connected line segments between consecutive points
///
/// Each segment is an independent line, so a joint shared by two segments is
/// emitted once for each. Fewer than two points draws nothing.
pub fn draw_polyline<S: PixelSink + ?Sized>(
    target: &mut S,
    points: &[Point],
    color: u32,
) -> Result<()> {
    if points.len() < 2 {
        return Ok(());
    }

    log::trace!(
        "Rendering polyline with {} vertices, color={:06X}",
        points.len(),
        color
    );

    for pair in points.windows(2) {
        draw_line(target, pair[0], pair[1], color)?;
    }
    Ok(())
}
