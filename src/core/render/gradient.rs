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

//! Gradient (Gouraud-shaded) triangle rendering
//!
//! Covered pixels are found with the same walls as flat triangles; each pixel
//! is then colored by blending the three vertex colors with its barycentric
//! weights.
//!
//! # Weights
//!
//! For a Y-sorted triangle (V0, V1, V2) with edge vectors `e0 = V1 - V0` and
//! `e1 = V2 - V0`, a pixel at offset `p = P - V0` satisfies
//! `p = beta * e0 + gamma * e1`, where
//!
//! ```text
//! beta  = (p.x * e1.y - p.y * e1.x) / (e0.x * e1.y - e1.x * e0.y)
//! gamma = (p.y * e0.x - p.x * e0.y) / (e0.x * e1.y - e1.x * e0.y)
//! alpha = 1 - beta - gamma
//! ```
//!
//! `alpha`, `beta` and `gamma` weight V0, V1 and V2. The denominator is twice
//! the signed area; its reciprocal is computed once per triangle.

use super::super::color::{channel_from_f32, Color};
use super::super::error::{RasterError, Result};
use super::super::geometry::{doubled_signed_area, sort3_by_y, Point, Vertex};
use super::super::target::PixelSink;
use super::put_pixel;
use super::triangle::TriangleWalls;

/// Barycentric weights of a point
///
/// `alpha` weights the first vertex, `beta` the second; the third weight is
/// implied by [`Barycentric::gamma`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
}

impl Barycentric {
    pub fn gamma(&self) -> f32 {
        1.0 - self.alpha - self.beta
    }

    /// True when all three weights lie in `[-epsilon, 1 + epsilon]`
    pub fn is_inside(&self, epsilon: f32) -> bool {
        let range = -epsilon..=1.0 + epsilon;
        range.contains(&self.alpha) && range.contains(&self.beta) && range.contains(&self.gamma())
    }

    /// Blend three colors channel by channel
    ///
    /// Each channel is rounded to nearest and clamped to 0-255.
    pub fn blend(&self, c0: Color, c1: Color, c2: Color) -> Color {
        let (a, b, g) = (self.alpha, self.beta, self.gamma());
        let mix = |x0: u8, x1: u8, x2: u8| {
            channel_from_f32(a * f32::from(x0) + b * f32::from(x1) + g * f32::from(x2))
        };
        Color::new(mix(c0.r, c1.r, c2.r), mix(c0.g, c1.g, c2.g), mix(c0.b, c1.b, c2.b))
    }
}

/// Per-triangle constants for computing barycentric weights
///
/// Holds the edge vectors and the reciprocal of twice the signed area, so
/// [`BarycentricBasis::weights`] does no division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarycentricBasis {
    origin: Point,
    e0: (f32, f32),
    e1: (f32, f32),
    inv_area: f32,
}

impl BarycentricBasis {
    /// Precompute the basis of triangle (v0, v1, v2)
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::DegenerateTriangle`] if the vertices are
    /// collinear.
    pub fn new(v0: Point, v1: Point, v2: Point) -> Result<Self> {
        let area = doubled_signed_area(v0, v1, v2);
        if area == 0 {
            return Err(RasterError::DegenerateTriangle { area });
        }

        Ok(Self {
            origin: v0,
            e0: offset(v0, v1),
            e1: offset(v0, v2),
            inv_area: 1.0 / area as f32,
        })
    }

    /// Weights of pixel (x, y)
    #[inline(always)]
    pub fn weights(&self, x: i32, y: i32) -> Barycentric {
        let (px, py) = offset(self.origin, Point::new(x, y));
        let beta = (px * self.e1.1 - py * self.e1.0) * self.inv_area;
        let gamma = (py * self.e0.0 - px * self.e0.1) * self.inv_area;
        Barycentric {
            alpha: 1.0 - beta - gamma,
            beta,
        }
    }
}

#[inline(always)]
fn offset(from: Point, to: Point) -> (f32, f32) {
    (
        (i64::from(to.x) - i64::from(from.x)) as f32,
        (i64::from(to.y) - i64::from(from.y)) as f32,
    )
}

/// Barycentric weights of `p` in triangle (a, b, c) from area ratios
///
/// `alpha = area(p, b, c) / area(a, b, c)` and
/// `beta = area(p, c, a) / area(a, b, c)`. This divides on every call; use
/// [`BarycentricBasis`] when evaluating many points of one triangle.
///
/// # Errors
///
/// Returns [`RasterError::DegenerateTriangle`] if a, b and c are collinear.
///
/// # Examples
///
/// ```
/// use scanfill::core::{barycentric, Point};
///
/// let w = barycentric(
///     Point::new(2, 2),
///     Point::new(0, 0),
///     Point::new(6, 0),
///     Point::new(0, 6),
/// )
/// .unwrap();
/// assert!((w.alpha - 1.0 / 3.0).abs() < 1e-6);
/// assert!((w.beta - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn barycentric(p: Point, a: Point, b: Point, c: Point) -> Result<Barycentric> {
    let area = doubled_signed_area(a, b, c);
    if area == 0 {
        return Err(RasterError::DegenerateTriangle { area });
    }

    let area = area as f32;
    Ok(Barycentric {
        alpha: doubled_signed_area(p, b, c) as f32 / area,
        beta: doubled_signed_area(p, c, a) as f32 / area,
    })
}

/// Fill a triangle with colors interpolated from its vertices
///
/// Covers exactly the pixels [`fill_triangle`](super::fill_triangle) covers
/// for the same positions, in the same order.
///
/// # Errors
///
/// Returns [`RasterError::DegenerateTriangle`] without drawing anything if
/// the vertices are collinear. Otherwise fails like `fill_triangle`.
///
/// # Examples
///
/// ```
/// use scanfill::core::{fill_gradient_triangle, Color, Framebuffer, Point, Vertex};
///
/// let mut fb = Framebuffer::new(64, 64).unwrap();
/// fill_gradient_triangle(
///     &mut fb,
///     Vertex::new(Point::new(0, 0), Color::RED),
///     Vertex::new(Point::new(60, 0), Color::GREEN),
///     Vertex::new(Point::new(0, 60), Color::BLUE),
/// )
/// .unwrap();
///
/// // The centroid is an even mix
/// assert_eq!(fb.get_pixel(20, 20), Some(Color::new(85, 85, 85).to_u32()));
/// ```
pub fn fill_gradient_triangle<S: PixelSink + ?Sized>(
    target: &mut S,
    v0: Vertex,
    v1: Vertex,
    v2: Vertex,
) -> Result<()> {
    log::trace!(
        "Rendering gradient triangle: ({}, {}), ({}, {}), ({}, {}) colors={:06X}, {:06X}, {:06X}",
        v0.pos.x,
        v0.pos.y,
        v1.pos.x,
        v1.pos.y,
        v2.pos.x,
        v2.pos.y,
        v0.color.to_u32(),
        v1.color.to_u32(),
        v2.color.to_u32()
    );

    let (v0, v1, v2) = sort3_by_y(v0, v1, v2, |v| v.pos.y);

    let basis = BarycentricBasis::new(v0.pos, v1.pos, v2.pos)?;
    let walls = TriangleWalls::new(v0.pos, v1.pos, v2.pos)?;

    for line in walls.scanlines() {
        for x in line.xs() {
            let color = basis
                .weights(x, line.y)
                .blend(v0.color, v1.color, v2.color);
            put_pixel(target, x, line.y, color.to_u32())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::{Framebuffer, PixelTrace};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_barycentric_coordinates() {
        let v0 = Point::new(0, 0);
        let v1 = Point::new(100, 0);
        let v2 = Point::new(50, 100);

        // Test point at v0
        let w = barycentric(v0, v0, v1, v2).unwrap();
        assert!(approx(w.alpha, 1.0));
        assert!(approx(w.beta, 0.0));
        assert!(approx(w.gamma(), 0.0));

        // Test point at v1
        let w = barycentric(v1, v0, v1, v2).unwrap();
        assert!(approx(w.alpha, 0.0));
        assert!(approx(w.beta, 1.0));
        assert!(approx(w.gamma(), 0.0));

        // Test point at centroid (approximately)
        let w = barycentric(Point::new(50, 33), v0, v1, v2).unwrap();
        assert!((w.alpha - 0.33).abs() < 0.1);
        assert!((w.beta - 0.33).abs() < 0.1);
        assert!((w.gamma() - 0.33).abs() < 0.1);
    }

    #[test]
    fn test_basis_matches_area_ratios() {
        let (a, b, c) = (Point::new(3, 1), Point::new(40, 9), Point::new(12, 35));
        let basis = BarycentricBasis::new(a, b, c).unwrap();

        for (x, y) in [(3, 1), (40, 9), (12, 35), (18, 15), (25, 20), (-4, 50)] {
            let fast = basis.weights(x, y);
            let slow = barycentric(Point::new(x, y), a, b, c).unwrap();
            assert!((fast.alpha - slow.alpha).abs() < 1e-4, "alpha at ({x}, {y})");
            assert!((fast.beta - slow.beta).abs() < 1e-4, "beta at ({x}, {y})");
        }
    }

    #[test]
    fn test_basis_either_winding() {
        // Same triangle, opposite winding: weights follow the vertices
        let cw = BarycentricBasis::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10))
            .unwrap()
            .weights(2, 3);
        let ccw = BarycentricBasis::new(Point::new(0, 0), Point::new(0, 10), Point::new(10, 0))
            .unwrap()
            .weights(2, 3);

        assert!(approx(cw.alpha, ccw.alpha));
        assert!(approx(cw.beta, ccw.gamma()));
        assert!(approx(cw.gamma(), ccw.beta));
    }

    #[test]
    fn test_degenerate_basis() {
        let err = BarycentricBasis::new(Point::new(0, 0), Point::new(2, 0), Point::new(4, 0))
            .unwrap_err();
        assert!(matches!(err, RasterError::DegenerateTriangle { area: 0 }));

        let err = barycentric(
            Point::new(1, 1),
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
        )
        .unwrap_err();
        assert!(matches!(err, RasterError::DegenerateTriangle { .. }));
    }

    #[test]
    fn test_is_inside() {
        let basis =
            BarycentricBasis::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)).unwrap();
        assert!(basis.weights(2, 2).is_inside(0.0));
        assert!(!basis.weights(9, 9).is_inside(1e-3));
    }

    #[test]
    fn test_blend_pure_weights() {
        let w = Barycentric {
            alpha: 0.0,
            beta: 1.0,
        };
        assert_eq!(w.blend(Color::RED, Color::GREEN, Color::BLUE), Color::GREEN);
    }

    #[test]
    fn test_gradient_triangle() {
        let mut fb = Framebuffer::new(256, 256).unwrap();

        // Draw a gradient triangle (red -> green -> blue)
        fill_gradient_triangle(
            &mut fb,
            Vertex::new(Point::new(100, 100), Color::RED),
            Vertex::new(Point::new(200, 100), Color::GREEN),
            Vertex::new(Point::new(150, 150), Color::BLUE),
        )
        .unwrap();

        // Check that center has interpolated color
        let center = Color::from_u32(fb.get_pixel(150, 125).unwrap());
        assert_ne!(center, Color::BLACK);
        assert!(center.r > 0 && center.g > 0 && center.b > 0);
    }

    #[test]
    fn test_gradient_black_to_white() {
        let mut fb = Framebuffer::new(256, 256).unwrap();

        fill_gradient_triangle(
            &mut fb,
            Vertex::new(Point::new(100, 100), Color::BLACK),
            Vertex::new(Point::new(200, 100), Color::WHITE),
            Vertex::new(Point::new(150, 200), Color::WHITE),
        )
        .unwrap();

        // Brightness grows away from the black vertex; channels stay gray
        let near = Color::from_u32(fb.get_pixel(110, 102).unwrap());
        let far = Color::from_u32(fb.get_pixel(150, 180).unwrap());
        assert!(near.r < far.r);
        assert_eq!(near.r, near.g);
        assert_eq!(far.g, far.b);
    }

    #[test]
    fn test_gradient_covers_same_pixels_as_flat() {
        let (a, b, c) = (Point::new(5, 2), Point::new(31, 11), Point::new(14, 27));

        let mut flat = PixelTrace::new();
        super::super::fill_triangle(&mut flat, a, b, c, 0).unwrap();

        let mut shaded = PixelTrace::new();
        fill_gradient_triangle(
            &mut shaded,
            Vertex::new(a, Color::RED),
            Vertex::new(b, Color::GREEN),
            Vertex::new(c, Color::BLUE),
        )
        .unwrap();

        assert_eq!(flat.coords(), shaded.coords());
    }

    #[test]
    fn test_degenerate_gradient_draws_nothing() {
        let mut trace = PixelTrace::new();
        let err = fill_gradient_triangle(
            &mut trace,
            Vertex::new(Point::new(0, 0), Color::RED),
            Vertex::new(Point::new(2, 0), Color::GREEN),
            Vertex::new(Point::new(4, 0), Color::BLUE),
        )
        .unwrap_err();

        assert!(matches!(err, RasterError::DegenerateTriangle { .. }));
        assert!(trace.is_empty());
    }
}
