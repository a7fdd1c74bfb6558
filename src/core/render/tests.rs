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

//! Coverage and ordering tests across the rasterization pipeline

use std::collections::HashSet;

use proptest::prelude::*;

use super::{draw_line, fill_gradient_triangle, fill_triangle, BarycentricBasis};
use crate::core::color::{pack, unpack_b, unpack_g, unpack_r, Color};
use crate::core::geometry::{Point, Vertex};
use crate::core::interpolate::{concat, interpolate};
use crate::core::target::PixelTrace;

#[test]
fn test_horizontal_line_pixels() {
    let mut trace = PixelTrace::new();
    draw_line(&mut trace, Point::new(0, 0), Point::new(4, 0), 0xABCDEF).unwrap();

    assert_eq!(trace.coords(), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    assert!(trace.pixels().iter().all(|p| p.color == 0xABCDEF));
}

#[test]
fn test_vertical_line_pixels() {
    let mut trace = PixelTrace::new();
    draw_line(&mut trace, Point::new(0, 0), Point::new(0, 4), 0x123456).unwrap();

    assert_eq!(trace.coords(), vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
}

#[test]
fn test_right_triangle_exact_coverage() {
    let mut trace = PixelTrace::new();
    fill_triangle(
        &mut trace,
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(0, 4),
        0x0000FF,
    )
    .unwrap();

    // Left wall (x = 0) and the bottom row are excluded, and the fill stops
    // before the hypotenuse.
    assert_eq!(
        trace.coords(),
        vec![(1, 0), (2, 0), (3, 0), (1, 1), (2, 1), (1, 2)]
    );
}

#[test]
fn test_gradient_weights_at_centroid() {
    let mut trace = PixelTrace::new();
    fill_gradient_triangle(
        &mut trace,
        Vertex::new(Point::new(0, 0), Color::RED),
        Vertex::new(Point::new(60, 0), Color::GREEN),
        Vertex::new(Point::new(0, 60), Color::BLUE),
    )
    .unwrap();

    let basis =
        BarycentricBasis::new(Point::new(0, 0), Point::new(60, 0), Point::new(0, 60)).unwrap();
    let w = basis.weights(20, 20);
    assert!((w.alpha - 1.0 / 3.0).abs() < 1e-5);
    assert!((w.beta - 1.0 / 3.0).abs() < 1e-5);
    assert!((w.gamma() - 1.0 / 3.0).abs() < 1e-5);

    assert_eq!(trace.color_at(20, 20), Some(pack(85, 85, 85)));
}

#[test]
fn test_gradient_near_first_vertex() {
    let mut trace = PixelTrace::new();
    fill_gradient_triangle(
        &mut trace,
        Vertex::new(Point::new(0, 0), Color::RED),
        Vertex::new(Point::new(60, 0), Color::GREEN),
        Vertex::new(Point::new(0, 60), Color::BLUE),
    )
    .unwrap();

    let w = BarycentricBasis::new(Point::new(0, 0), Point::new(60, 0), Point::new(0, 60))
        .unwrap()
        .weights(1, 1);
    assert!(w.alpha > 0.95);

    let color = trace.color_at(1, 1).unwrap();
    assert!(unpack_r(color) > 240);
    assert!(unpack_g(color) < 10);
    assert!(unpack_b(color) < 10);
}

#[test]
fn test_small_gradient_triangle() {
    let mut trace = PixelTrace::new();
    fill_gradient_triangle(
        &mut trace,
        Vertex::new(Point::new(0, 0), Color::RED),
        Vertex::new(Point::new(4, 0), Color::GREEN),
        Vertex::new(Point::new(0, 4), Color::BLUE),
    )
    .unwrap();

    // Same coverage as the flat fill
    assert_eq!(
        trace.coords(),
        vec![(1, 0), (2, 0), (3, 0), (1, 1), (2, 1), (1, 2)]
    );

    // (1, 1): alpha = 0.5, beta = gamma = 0.25
    assert_eq!(trace.color_at(1, 1), Some(pack(128, 64, 64)));
    // (1, 0) leans toward the red corner
    let c = Color::from_u32(trace.color_at(1, 0).unwrap());
    assert!(c.r > c.g && c.b == 0);
}

#[test]
fn test_degenerate_triangles() {
    let mut trace = PixelTrace::new();
    let (a, b, c) = (Point::new(0, 0), Point::new(2, 0), Point::new(4, 0));

    fill_triangle(&mut trace, a, b, c, 1).unwrap();
    let shaded = fill_gradient_triangle(
        &mut trace,
        Vertex::new(a, Color::RED),
        Vertex::new(b, Color::GREEN),
        Vertex::new(c, Color::BLUE),
    );

    assert!(shaded.is_err());
    assert!(trace.is_empty());
}

#[test]
fn test_scanline_order() {
    let mut trace = PixelTrace::new();
    fill_triangle(
        &mut trace,
        Point::new(20, 30),
        Point::new(2, 3),
        Point::new(35, 12),
        1,
    )
    .unwrap();

    let coords = trace.coords();
    assert!(!coords.is_empty());
    for pair in coords.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        assert!(y1 > y0 || (y1 == y0 && x1 > x0), "{:?} before {:?}", pair[0], pair[1]);
    }
}

fn coord() -> impl Strategy<Value = i32> {
    -200..200i32
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_interpolate_length(i0 in coord(), d0 in coord(), i1 in coord(), d1 in coord()) {
        let span = interpolate(i0, d0, i1, d1).unwrap();
        prop_assert_eq!(span.len(), (i1 - i0).unsigned_abs() as usize + 1);
    }

    #[test]
    fn prop_interpolate_endpoints(i0 in coord(), d0 in coord(), i1 in coord(), d1 in coord()) {
        prop_assume!(i0 != i1);
        let span = interpolate(i0, d0, i1, d1).unwrap();
        prop_assert!((span.first().unwrap() - d0 as f32).abs() < 1e-3);
        prop_assert!((span.last().unwrap() - d1 as f32).abs() < 1e-3);
    }

    #[test]
    fn prop_pack_unpack_identity(c in 0u32..=0xFF_FFFF) {
        prop_assert_eq!(pack(unpack_r(c), unpack_g(c), unpack_b(c)), c);
    }

    #[test]
    fn prop_concat_layout(
        a in prop::collection::vec(-1000.0f32..1000.0, 1..20),
        b in prop::collection::vec(-1000.0f32..1000.0, 1..20),
    ) {
        let (first, second) = (a.clone().into(), b.clone().into());

        let joined = concat(&first, &second, false).unwrap();
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(&joined.as_slice()[..a.len()], a.as_slice());
        prop_assert_eq!(&joined.as_slice()[a.len()..], b.as_slice());

        let seamless = concat(&first, &second, true).unwrap();
        prop_assert_eq!(seamless.len(), a.len() + b.len() - 1);
        prop_assert_eq!(&seamless.as_slice()[a.len() - 1..], b.as_slice());
    }

    #[test]
    fn prop_line_visits_each_step_once(p0 in point(), p1 in point()) {
        let mut trace = PixelTrace::new();
        draw_line(&mut trace, p0, p1, 1).unwrap();

        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        prop_assert_eq!(trace.len(), dx.max(dy) as usize + 1);

        let unique: HashSet<_> = trace.coords().into_iter().collect();
        prop_assert_eq!(unique.len(), trace.len());
        prop_assert!(unique.contains(&(p0.x, p0.y)));
        prop_assert!(unique.contains(&(p1.x, p1.y)));
    }

    #[test]
    fn prop_triangle_pixels_unique_and_inside(a in point(), b in point(), c in point()) {
        let mut trace = PixelTrace::new();
        fill_triangle(&mut trace, a, b, c, 1).unwrap();

        let unique: HashSet<_> = trace.coords().into_iter().collect();
        prop_assert_eq!(unique.len(), trace.len());

        if let Ok(basis) = BarycentricBasis::new(a, b, c) {
            for &(x, y) in &unique {
                prop_assert!(basis.weights(x, y).is_inside(1e-3), "({}, {}) outside", x, y);
            }
        } else {
            prop_assert!(trace.is_empty());
        }
    }
}
