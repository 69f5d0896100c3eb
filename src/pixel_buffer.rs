//! Fixed-length pixel model addressed by serial (wiring-order) index.
//!
//! A [`PixelBuffer`] owns every pixel of one device. Drawing operations only touch the
//! buffer; [`PixelBuffer::serialize`] turns it into the wire byte order, and the devices'
//! `show` methods hand those bytes to a [`Transmit`](crate::transmit::Transmit) sink.

use crate::color::{Brightness, Rgbw};
use crate::config::ChannelOrder;
use crate::{Error, Result};

/// State of one LED.
///
/// The raw (unscaled) color is kept alongside the brightness it is shown at, so
/// changing brightness never loses color precision. An unlit pixel has no brightness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel {
    raw: Rgbw,
    brightness: Option<Brightness>,
}

impl Pixel {
    /// An unlit pixel.
    pub const OFF: Self = Self {
        raw: Rgbw::OFF,
        brightness: None,
    };

    /// A lit pixel showing `raw` at `brightness`.
    #[must_use]
    pub const fn lit(raw: Rgbw, brightness: Brightness) -> Self {
        Self {
            raw,
            brightness: Some(brightness),
        }
    }

    /// Channels as transmitted, with brightness applied.
    #[must_use]
    pub const fn channels(&self) -> Rgbw {
        match self.brightness {
            Some(brightness) => self.raw.scale(brightness),
            None => Rgbw::OFF,
        }
    }

    /// Color as written, before brightness.
    #[must_use]
    pub const fn raw(&self) -> Rgbw {
        self.raw
    }

    /// Brightness the pixel is shown at; `None` when unlit.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// True for an unlit pixel.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.brightness.is_none()
    }
}

/// Ordered, fixed-length sequence of `N` pixels plus the byte layout used to send them.
///
/// `BPP` is the number of bytes sent per pixel: 3 for RGB parts, 4 for RGBW parts.
///
/// ```
/// use pixel_led::color::Rgbw;
/// use pixel_led::config::ChannelOrder;
/// use pixel_led::pixel_buffer::PixelBuffer;
///
/// let mut buffer: PixelBuffer<4> = PixelBuffer::new(ChannelOrder::GRBW, 255);
/// buffer.set_serial(1, [255, 0, 0], None)?;
/// let bytes = buffer.serialize();
/// assert_eq!(bytes[1], [0, 255, 0]);
/// # Ok::<(), pixel_led::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct PixelBuffer<const N: usize, const BPP: usize = 3> {
    pixels: [Pixel; N],
    channel_order: ChannelOrder,
    default_brightness: Brightness,
}

impl<const N: usize, const BPP: usize> PixelBuffer<N, BPP> {
    const BYTES_PER_PIXEL_CHECK: () =
        assert!(BPP == 3 || BPP == 4, "BPP must be 3 (RGB) or 4 (RGBW)");

    /// Number of pixels.
    pub const LEN: usize = N;
    /// Bytes sent per pixel.
    pub const BYTES_PER_PIXEL: usize = BPP;

    /// Create an all-off buffer.
    #[must_use]
    pub const fn new(channel_order: ChannelOrder, default_brightness: u8) -> Self {
        let () = Self::BYTES_PER_PIXEL_CHECK;
        Self {
            pixels: [Pixel::OFF; N],
            channel_order,
            default_brightness: Brightness::new(default_brightness),
        }
    }

    /// Number of pixels.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-length buffer.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Wire channel order.
    #[must_use]
    pub const fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    /// All pixels in serial order.
    #[must_use]
    pub const fn pixels(&self) -> &[Pixel; N] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel; N] {
        &mut self.pixels
    }

    /// Brightness used by writes that do not name one.
    #[must_use]
    pub const fn default_brightness(&self) -> Brightness {
        self.default_brightness
    }

    /// Change the default brightness (clamped to `1..=255`).
    ///
    /// Only later writes without an explicit brightness are affected.
    pub fn set_default_brightness(&mut self, brightness: u8) {
        self.default_brightness = Brightness::new(brightness);
    }

    /// Write one pixel by serial index.
    ///
    /// An all-zero color turns the pixel off whatever `brightness` says. Otherwise the
    /// pixel is lit at `brightness`, or at the default brightness when `None`.
    pub fn set_serial(
        &mut self,
        index: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let pixel = self.pixel_for(color.into(), brightness);
        *self.pixels.get_mut(index).ok_or(Self::out_of_range(index))? = pixel;
        Ok(())
    }

    /// Read one pixel by serial index.
    pub fn get_serial(&self, index: usize) -> Result<Pixel> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(Self::out_of_range(index))
    }

    /// Change the brightness of one lit pixel (clamped to `1..=255`).
    ///
    /// Unlit pixels are left alone.
    pub fn set_brightness_serial(&mut self, index: usize, brightness: u8) -> Result<()> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(Self::out_of_range(index))?;
        Self::rebrighten(pixel, Brightness::new(brightness));
        Ok(())
    }

    /// Change the brightness of every lit pixel (clamped to `1..=255`).
    pub fn set_brightness(&mut self, brightness: u8) {
        let brightness = Brightness::new(brightness);
        for pixel in &mut self.pixels {
            Self::rebrighten(pixel, brightness);
        }
    }

    /// Write the same color to every pixel.
    pub fn fill(&mut self, color: impl Into<Rgbw>, brightness: Option<u8>) {
        let pixel = self.pixel_for(color.into(), brightness);
        self.pixels = [pixel; N];
    }

    /// Turn every pixel off. Nothing is transmitted.
    pub fn clear(&mut self) {
        self.pixels = [Pixel::OFF; N];
    }

    /// Bytes to send, one `[u8; BPP]` per pixel in serial order and wire channel order.
    ///
    /// Use `as_flattened()` for the contiguous `N * BPP` byte stream.
    #[must_use]
    pub fn serialize(&self) -> [[u8; BPP]; N] {
        let mut bytes = [[0_u8; BPP]; N];
        for (pixel_bytes, pixel) in bytes.iter_mut().zip(self.pixels.iter()) {
            let wire = self.channel_order.apply(pixel.channels());
            for (byte, value) in pixel_bytes.iter_mut().zip(wire) {
                *byte = value;
            }
        }
        bytes
    }

    /// Write one pixel; an index past the end is ignored.
    pub(crate) fn write(&mut self, index: usize, color: Rgbw, brightness: Option<u8>) {
        let pixel = self.pixel_for(color, brightness);
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = pixel;
        }
    }

    fn pixel_for(&self, color: Rgbw, brightness: Option<u8>) -> Pixel {
        if color.is_dark(BPP) {
            Pixel::OFF
        } else {
            let brightness = brightness.map_or(self.default_brightness, Brightness::new);
            Pixel::lit(color, brightness)
        }
    }

    fn rebrighten(pixel: &mut Pixel, brightness: Brightness) {
        if !pixel.is_off() {
            *pixel = Pixel::lit(pixel.raw(), brightness);
        }
    }

    const fn out_of_range(index: usize) -> Error {
        Error::IndexOutOfRange { index, len: N }
    }
}

impl<const N: usize, const BPP: usize> Default for PixelBuffer<N, BPP> {
    fn default() -> Self {
        Self::new(
            crate::config::CHANNEL_ORDER_DEFAULT,
            crate::config::BRIGHTNESS_DEFAULT.get(),
        )
    }
}
