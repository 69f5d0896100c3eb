//! Per-pixel color channels and the brightness scaling law.
//!
//! Colors are carried as logical [`Rgbw`] records. Brightness is a separate
//! [`Brightness`] scalar in `1..=255`; the value sent to the LED for a channel is
//! `round(raw * brightness / 255)`.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use smart_leds::RGB8;

use crate::{Error, Result};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// Logical red, green, blue and white channels of one pixel.
///
/// The white channel is ignored by 3-byte (RGB) devices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// White.
    pub w: u8,
}

impl Rgbw {
    /// All channels zero.
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Create a color with the white channel off.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0)
    }

    /// Channels in logical order `[r, g, b, w]`.
    #[must_use]
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.w]
    }

    /// Build a color from channels in logical order `[r, g, b, w]`.
    #[must_use]
    pub const fn from_channels([r, g, b, w]: [u8; 4]) -> Self {
        Self::new(r, g, b, w)
    }

    /// True when every channel a `bytes_per_pixel` device transmits is zero.
    #[must_use]
    pub const fn is_dark(self, bytes_per_pixel: usize) -> bool {
        let rgb_dark = self.r == 0 && self.g == 0 && self.b == 0;
        rgb_dark && (bytes_per_pixel < 4 || self.w == 0)
    }

    /// Apply the brightness scaling law to every channel.
    #[must_use]
    pub const fn scale(self, brightness: Brightness) -> Self {
        let level = brightness.get();
        Self::new(
            scale_channel(self.r, level),
            scale_channel(self.g, level),
            scale_channel(self.b, level),
            scale_channel(self.w, level),
        )
    }
}

/// `round(raw * brightness / 255)` in integer arithmetic.
///
/// `2 * raw * brightness` is even and `255` is odd, so the exact quotient is never a half
/// and round-half-up agrees with any other rounding rule.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "2 * 255 * 255 + 255 fits in u32 and the quotient is at most 255"
)]
pub const fn scale_channel(raw: u8, brightness: u8) -> u8 {
    let product = raw as u32 * brightness as u32;
    ((product * 2 + 255) / 510) as u8
}

impl From<RGB8> for Rgbw {
    fn from(color: RGB8) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

impl From<Rgb888> for Rgbw {
    fn from(color: Rgb888) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }
}

impl From<[u8; 3]> for Rgbw {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgbw {
    fn from(channels: [u8; 4]) -> Self {
        Self::from_channels(channels)
    }
}

impl From<Rgbw> for RGB8 {
    fn from(color: Rgbw) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

impl TryFrom<&[u8]> for Rgbw {
    type Error = Error;

    /// Accept a 3-entry (white padded to zero) or 4-entry channel vector.
    fn try_from(channels: &[u8]) -> Result<Self> {
        match *channels {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, w] => Ok(Self::new(r, g, b, w)),
            _ => Err(Error::InvalidArgument {
                reason: "color needs 3 or 4 channels",
            }),
        }
    }
}

/// Brightness scalar in `1..=255`.
///
/// Zero is not a brightness: an unlit pixel has no brightness at all (see
/// [`Pixel`](crate::pixel_buffer::Pixel)), so `0` clamps up to `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest valid brightness.
    pub const MIN: Self = Self(1);
    /// Full brightness; channels are transmitted unchanged.
    pub const MAX: Self = Self(u8::MAX);

    /// Create a brightness, clamping `0` to `1`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value == 0 { Self::MIN } else { Self(value) }
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}
