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

//! Color codec
//!
//! Pixels are handed to the target as packed 24-bit RGB values:
//! - Bits 16-23: Red
//! - Bits 8-15: Green
//! - Bits 0-7: Blue
//!
//! Channels are `u8`, so out-of-range values cannot reach [`pack`]; callers
//! that compute channels in floating point clamp before converting.

/// Pack three 8-bit channels into a 24-bit color
///
/// # Examples
///
/// ```
/// use scanfill::core::color::pack;
///
/// assert_eq!(pack(255, 0, 0), 0xFF0000);
/// assert_eq!(pack(0x12, 0x34, 0x56), 0x123456);
/// ```
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Extract the red channel of a packed color
#[inline]
pub const fn unpack_r(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Extract the green channel of a packed color
#[inline]
pub const fn unpack_g(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Extract the blue channel of a packed color
#[inline]
pub const fn unpack_b(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Convert a floating-point channel value to 8 bits
///
/// Rounds to nearest and clamps to 0-255. NaN maps to 0.
#[inline]
pub fn channel_from_f32(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    value.round().clamp(0.0, 255.0) as u8
}

/// A 24-bit RGB color
///
/// # Examples
///
/// ```
/// use scanfill::core::Color;
///
/// let color = Color::from_u32(0xFF8040);
/// assert_eq!(color.r, 0xFF);
/// assert_eq!(color.g, 0x80);
/// assert_eq!(color.b, 0x40);
/// assert_eq!(color.to_u32(), 0xFF8040);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a Color from a packed value
    ///
    /// Bits above 23 are ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: unpack_r(value),
            g: unpack_g(value),
            b: unpack_b(value),
        }
    }

    /// Pack this color into a 24-bit value
    pub const fn to_u32(self) -> u32 {
        pack(self.r, self.g, self.b)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

/// A 32-bit color with an alpha channel
///
/// Packed layout is `0xAARRGGBB`. The rasterizer never reads alpha; this form
/// exists for targets that store ARGB words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// Attach an alpha value to a 24-bit color
    pub const fn from_rgb(color: Color, alpha: u8) -> Self {
        Self {
            a: alpha,
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: unpack_r(value),
            g: unpack_g(value),
            b: unpack_b(value),
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | pack(self.r, self.g, self.b)
    }

    /// Drop the alpha channel
    pub const fn to_rgb(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}
