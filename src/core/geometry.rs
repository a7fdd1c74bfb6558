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

//! Screen-space geometry
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the top-left
//! - X increases to the right
//! - Y increases downward
//!
//! Coordinates are already projected; nothing here knows about depth.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// An integer screen coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A point carrying a color, used by gradient triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub pos: Point,
    pub color: Color,
}

impl Vertex {
    pub const fn new(pos: Point, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Twice the signed area of triangle (a, b, c)
///
/// Positive when the vertices wind clockwise on screen (y down), negative when
/// counter-clockwise, zero when collinear. Computed in `i64` so any pair of
/// `i32` coordinates is exact.
pub fn doubled_signed_area(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Signed area of triangle (a, b, c)
pub fn signed_area(a: Point, b: Point, c: Point) -> f32 {
    doubled_signed_area(a, b, c) as f32 / 2.0
}

/// Sort three items by their y coordinate
///
/// Uses exactly three conditional swaps, (1,0), (2,0), (2,1), which sorts any
/// permutation of three. The sort is not stable: items with equal y may come
/// out in a different relative order.
pub fn sort3_by_y<T, F>(mut a: T, mut b: T, mut c: T, y: F) -> (T, T, T)
where
    F: Fn(&T) -> i32,
{
    if y(&b) < y(&a) {
        std::mem::swap(&mut a, &mut b);
    }
    if y(&c) < y(&a) {
        std::mem::swap(&mut a, &mut c);
    }
    if y(&c) < y(&b) {
        std::mem::swap(&mut b, &mut c);
    }
    (a, b, c)
}
