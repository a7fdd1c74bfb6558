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

//! Linear interpolation along an independent axis
//!
//! Both the line rasterizer and the triangle walls are built from the same
//! primitive: given two samples `(i0, d0)` and `(i1, d1)`, produce the
//! dependent value at every integer step of the independent axis, inclusive
//! of both ends.
//!
//! # Precision
//!
//! Sample `k` is evaluated in closed form as `d0 + k * (d1 - d0) / |i1 - i0|`
//! in `f64` and stored as `f32`. Nothing is accumulated between samples, so
//! long spans do not drift and the last sample is exactly `d1`.

use std::ops::Index;

use super::error::{RasterError, Result};

/// An owned, length-known sequence of interpolated dependent values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    values: Vec<f32>,
}

impl Span {
    /// Create an empty span with room for `len` samples
    fn with_capacity(len: usize) -> Result<Self> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|source| RasterError::Allocation {
                requested: len,
                source,
            })?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn first(&self) -> Option<f32> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f32> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f32>> {
        self.values.iter().copied()
    }
}

impl Index<usize> for Span {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl From<Vec<f32>> for Span {
    fn from(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl<'a> IntoIterator for &'a Span {
    type Item = f32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Interpolate the dependent axis over every integer step from `i0` to `i1`
///
/// The result has `|i1 - i0| + 1` samples. Sample `k` belongs to the
/// independent value `i0 + k` when `i0 <= i1`, or `i0 - k` otherwise, so the
/// first sample is always `d0` and the last is always `d1`.
///
/// When `i0 == i1` the segment is constant along the independent axis and the
/// single sample is `d0`, whatever `d1` is.
///
/// # Errors
///
/// Returns [`RasterError::Allocation`] if the samples cannot be allocated.
///
/// # Examples
///
/// ```
/// use scanfill::core::interpolate;
///
/// let span = interpolate(0, 0, 4, 2).unwrap();
/// assert_eq!(span.as_slice(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
pub fn interpolate(i0: i32, d0: i32, i1: i32, d1: i32) -> Result<Span> {
    let steps = (i64::from(i1) - i64::from(i0)).unsigned_abs();
    // Capacity overflow on narrow targets surfaces as an allocation error
    let len = usize::try_from(steps + 1).unwrap_or(usize::MAX);
    let mut span = Span::with_capacity(len)?;

    if steps == 0 {
        span.values.push(d0 as f32);
        return Ok(span);
    }

    let start = f64::from(d0);
    let delta = f64::from(d1) - f64::from(d0);
    let steps = steps as f64;
    span.values
        .extend((0..len).map(|k| (start + (k as f64 * delta) / steps) as f32));

    Ok(span)
}

/// Join two spans end to end
///
/// With `drop_shared_boundary` the last sample of `first` is skipped, so the
/// seam sample comes from `second`. This is how two edges that meet at a
/// vertex are joined into one continuous wall without repeating the row of
/// the shared vertex. If `first` is empty there is nothing to drop.
///
/// # Errors
///
/// Returns [`RasterError::Allocation`] if the joined span cannot be allocated.
pub fn concat(first: &Span, second: &Span, drop_shared_boundary: bool) -> Result<Span> {
    let head = if drop_shared_boundary {
        &first.values[..first.len().saturating_sub(1)]
    } else {
        first.as_slice()
    };

    let mut span = Span::with_capacity(head.len() + second.len())?;
    span.values.extend_from_slice(head);
    span.values.extend_from_slice(second.as_slice());
    Ok(span)
}
