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

//! Error types for the rasterizer
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias for
//! `std::result::Result<T, RasterError>`.
//!
//! Rasterization errors abort only the primitive being drawn. Pixels that were
//! already handed to the target stay where they are; nothing is rolled back.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced while rasterizing or while loading and exporting scenes
#[derive(Debug, Error)]
pub enum RasterError {
    /// An interpolation span could not be allocated
    ///
    /// Raised when the allocator refuses the request or the requested length
    /// does not fit in memory at all.
    #[error("failed to allocate a span of {requested} samples")]
    Allocation {
        /// Number of samples that were requested
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The triangle's vertices are collinear
    ///
    /// Barycentric weights are undefined for a zero-area triangle.
    #[error("degenerate triangle (doubled signed area {area})")]
    DegenerateTriangle {
        /// Doubled signed area of the triangle
        area: i64,
    },

    /// The pixel sink refused a write
    #[error("pixel sink rejected pixel ({x}, {y})")]
    PixelRejected { x: i32, y: i32 },

    /// I/O error while reading a scene or writing an image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML scene file could not be parsed
    #[error("invalid TOML scene: {0}")]
    SceneToml(#[from] toml::de::Error),

    /// JSON scene file could not be parsed
    #[error("invalid JSON scene: {0}")]
    SceneJson(#[from] serde_json::Error),

    /// Image encoding failed
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, RasterError>;
