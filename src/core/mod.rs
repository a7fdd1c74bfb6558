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

//! Rasterization core
//!
//! This module turns 2D screen-space primitives into pixel writes:
//!
//! - [`color`]: 24-bit RGB packing and the [`Color`] type
//! - [`geometry`]: [`Point`], [`Vertex`], signed area and Y sorting
//! - [`interpolate`](mod@interpolate): per-step linear interpolation into owned [`Span`]s
//! - [`target`]: the [`PixelSink`] trait and in-memory targets
//! - [`render`]: line, triangle and gradient-triangle rasterization
//!
//! Nothing here opens windows or owns global state. Every draw function
//! takes its target as an explicit argument.

pub mod color;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod render;
pub mod target;

// Public re-exports
pub use color::{Argb, Color};
pub use error::{RasterError, Result};
pub use geometry::{Point, Vertex};
pub use interpolate::{concat, interpolate, Span};
pub use render::{
    barycentric, draw_line, draw_polyline, draw_wire_triangle, fill_gradient_triangle,
    fill_triangle, Barycentric, BarycentricBasis, Scanline, TriangleWalls,
};
pub use target::{Framebuffer, Pixel, PixelSink, PixelTrace};
