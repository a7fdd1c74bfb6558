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

//! scanfill: a minimal software rasterizer
//!
//! Given 2D screen-space points, this crate works out which pixels a line or
//! triangle covers and what color each of them gets, without a GPU.
//!
//! # Architecture
//!
//! - [`core`]: the rasterization core (color codec, interpolation, line and
//!   triangle scan conversion, barycentric shading, render targets)
//! - [`scene`]: a serializable list of shapes that can be rendered into a
//!   [`core::Framebuffer`] and written out as PNG
//!
//! # Example
//!
//! ```
//! use scanfill::core::{draw_line, fill_triangle, Framebuffer, Point};
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fill_triangle(&mut fb, Point::new(4, 4), Point::new(60, 10), Point::new(20, 58), 0x3366FF)?;
//! draw_line(&mut fb, Point::new(0, 0), Point::new(63, 63), 0xFFFFFF)?;
//! # Ok::<(), scanfill::RasterError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`] which is an alias for
//! `Result<T, RasterError>`.

pub mod core;
pub mod scene;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
