//! A device abstraction for 2D WS2812 LED panels.
//!
//! [`LightMatrix`] addresses a `W`×`H` panel in `(x, y)` space (origin top-left, `x` to the
//! right, `y` downward) and resolves every coordinate through its serpentine
//! [`LedLayout`] to the serial index the strip is wired in. It owns its
//! [`PixelBuffer`](crate::pixel_buffer::PixelBuffer) and derefs to it, like
//! [`LightStrip`](crate::led_strip::LightStrip).
//!
//! Besides its own lines, rectangles, transforms and the built-in [`font`](crate::font),
//! a matrix is an [`embedded_graphics`] [`DrawTarget`], so embedded-graphics shapes,
//! images and fonts can be drawn on it too. Graphics pixels outside the panel are
//! clipped and graphics colors are shown at the default brightness.
//!
//! # Example: text on an 8×32 panel
//!
//! ```
//! use core::convert::Infallible;
//! use embedded_graphics::Drawable;
//! use embedded_graphics::pixelcolor::Rgb888;
//! use embedded_graphics::prelude::{Point, Primitive, RgbColor};
//! use embedded_graphics::primitives::{Line, PrimitiveStyle};
//! use pixel_led::config::{LedConfig, TimingProfile};
//! use pixel_led::led2d::LightMatrix;
//! use pixel_led::led_strip::colors;
//! use pixel_led::transmit::Transmit;
//!
//! struct Wire;
//!
//! impl Transmit for Wire {
//!     type Error = Infallible;
//!
//!     fn transmit(&mut self, _pin: u8, _timing: &TimingProfile, _bytes: &[u8]) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//! }
//!
//! let mut matrix: LightMatrix<Wire, 256, 32, 8> =
//!     LightMatrix::new(LedConfig::new(0).with_default_brightness(32), Wire);
//! let end_x = matrix.set_text(1, 0, "Hi 42", colors::ORANGE, None)?;
//! assert_eq!(end_x, 1 + 6 + 4 + 4 + 6 + 6);
//!
//! Line::new(Point::new(0, 7), Point::new(31, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::BLUE, 1))
//!     .draw(&mut matrix)
//!     .unwrap_or_else(|never| match never {});
//!
//! matrix.rotate_left(1);
//! matrix.show()?;
//! # Ok::<(), pixel_led::Error>(())
//! ```

pub mod layout;

#[doc(inline)]
pub use layout::LedLayout;

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut},
};

use embassy_time::Duration;
use embedded_graphics::{
    Pixel as GraphicsPixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
};
use embedded_hal::delay::DelayNs;

use crate::color::Rgbw;
use crate::config::LedConfig;
use crate::font::{self, GLYPH_HEIGHT};
use crate::gradient::build_gradient;
use crate::pixel_buffer::{Pixel, PixelBuffer};
use crate::transform;
use crate::transmit::{Output, Transmit};
use crate::{Error, Result};

/// A `W`×`H` panel of `N` serpentine-wired LEDs sending `BPP` bytes per pixel through `S`.
///
/// `N` must equal `W * H` (checked at compile time).
///
/// See the [module documentation](mod@crate::led2d) for usage examples.
#[derive(Debug)]
pub struct LightMatrix<S, const N: usize, const W: usize, const H: usize, const BPP: usize = 3> {
    buffer: PixelBuffer<N, BPP>,
    layout: LedLayout<N, W, H>,
    output: Output<S>,
}

impl<S: Transmit, const N: usize, const W: usize, const H: usize, const BPP: usize>
    LightMatrix<S, N, W, H, BPP>
{
    /// Panel width in LEDs.
    pub const WIDTH: usize = W;
    /// Panel height in LEDs.
    pub const HEIGHT: usize = H;
    /// Total LEDs.
    pub const LEN: usize = N;

    const LAYOUT: LedLayout<N, W, H> = LedLayout::serpentine();

    /// Create an all-off panel wired in the serpentine pattern.
    #[must_use]
    pub const fn new(config: LedConfig, sink: S) -> Self {
        Self {
            buffer: PixelBuffer::new(config.channel_order, config.default_brightness.get()),
            layout: Self::LAYOUT,
            output: Output::new(config, sink),
        }
    }

    /// Coordinate-to-serial wiring table.
    #[must_use]
    pub const fn layout(&self) -> &LedLayout<N, W, H> {
        &self.layout
    }

    /// Configuration the panel was built with.
    #[must_use]
    pub const fn config(&self) -> &LedConfig {
        self.output.config()
    }

    /// The transmission sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        self.output.sink()
    }

    /// Give the sink back, dropping the panel.
    pub fn into_sink(self) -> S {
        self.output.into_sink()
    }

    /// Serialize the buffer and hand it to the sink.
    pub fn show(&mut self) -> Result<()> {
        self.output.show(&self.buffer)
    }

    /// Serial index of `(x, y)`, or [`Error::CoordinateOutOfRange`].
    pub const fn index(&self, x: usize, y: usize) -> Result<usize> {
        match self.layout.index(x, y) {
            Some(index) => Ok(index),
            None => Err(Self::out_of_range(x, y)),
        }
    }

    const fn out_of_range(x: usize, y: usize) -> Error {
        Error::CoordinateOutOfRange {
            x,
            y,
            width: W,
            height: H,
        }
    }

    /// `(x + dx, y + dy)`; a sum past `usize::MAX` is off every panel.
    const fn offset(x: usize, dx: usize, y: usize, dy: usize) -> Result<(usize, usize)> {
        match (x.checked_add(dx), y.checked_add(dy)) {
            (Some(x_index), Some(y_index)) => Ok((x_index, y_index)),
            _ => Err(Self::out_of_range(x.saturating_add(dx), y.saturating_add(dy))),
        }
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    /// Write the pixel at `(x, y)`. See [`PixelBuffer::set_serial`].
    pub fn set_pixel(
        &mut self,
        x: usize,
        y: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let index = self.index(x, y)?;
        self.buffer.write(index, color.into(), brightness);
        Ok(())
    }

    /// Read the pixel at `(x, y)`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel> {
        self.buffer.get_serial(self.index(x, y)?)
    }

    /// Change the brightness of the pixel at `(x, y)` if it is lit.
    pub fn set_pixel_brightness(&mut self, x: usize, y: usize, brightness: u8) -> Result<()> {
        let index = self.index(x, y)?;
        self.buffer.set_brightness_serial(index, brightness)
    }

    /// Paint `len` pixels to the right of and including `(x, y)`.
    ///
    /// Stops with [`Error::CoordinateOutOfRange`] at the first pixel past the edge; the
    /// pixels before it stay painted.
    pub fn set_pixel_line_horizontal(
        &mut self,
        x: usize,
        y: usize,
        len: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let color = color.into();
        for offset in 0..len {
            let (x_index, y_index) = Self::offset(x, offset, y, 0)?;
            self.set_pixel(x_index, y_index, color, brightness)?;
        }
        Ok(())
    }

    /// Paint `len` pixels downward from and including `(x, y)`.
    pub fn set_pixel_line_vertical(
        &mut self,
        x: usize,
        y: usize,
        len: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let color = color.into();
        for offset in 0..len {
            let (x_index, y_index) = Self::offset(x, 0, y, offset)?;
            self.set_pixel(x_index, y_index, color, brightness)?;
        }
        Ok(())
    }

    /// Paint a `len`-pixel gradient rightward from `(x, y)`, `color_a` first.
    pub fn set_pixel_line_gradient_horizontal(
        &mut self,
        x: usize,
        y: usize,
        len: usize,
        color_a: impl Into<Rgbw>,
        color_b: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let gradient = build_gradient::<W>(color_a, color_b, len)?;
        for (offset, &color) in gradient.iter().enumerate() {
            let (x_index, y_index) = Self::offset(x, offset, y, 0)?;
            self.set_pixel(x_index, y_index, color, brightness)?;
        }
        Ok(())
    }

    /// Paint a `len`-pixel gradient downward from `(x, y)`, `color_a` first.
    pub fn set_pixel_line_gradient_vertical(
        &mut self,
        x: usize,
        y: usize,
        len: usize,
        color_a: impl Into<Rgbw>,
        color_b: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let gradient = build_gradient::<H>(color_a, color_b, len)?;
        for (offset, &color) in gradient.iter().enumerate() {
            let (x_index, y_index) = Self::offset(x, 0, y, offset)?;
            self.set_pixel(x_index, y_index, color, brightness)?;
        }
        Ok(())
    }

    /// Paint the rectangle with opposite corners `(x0, y0)` and `(x1, y1)`, both included.
    ///
    /// With `fill` false only the border is painted.
    #[expect(clippy::too_many_arguments, reason = "mirrors the other drawing calls")]
    pub fn set_pixel_rectangle(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        color: impl Into<Rgbw>,
        fill: bool,
        brightness: Option<u8>,
    ) -> Result<()> {
        let color = color.into();
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for y in top..=bottom {
            if fill || y == top || y == bottom {
                for x in left..=right {
                    self.set_pixel(x, y, color, brightness)?;
                }
            } else {
                self.set_pixel(left, y, color, brightness)?;
                self.set_pixel(right, y, color, brightness)?;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Reverse the whole serial order, flipping the picture left to right.
    ///
    /// With an odd width the columns also land upside down.
    pub fn mirror_x(&mut self) {
        self.buffer.pixels_mut().reverse();
    }

    /// Reverse each wired column, flipping the picture top to bottom.
    pub fn mirror_y(&mut self) {
        transform::mirror_blocks(self.buffer.pixels_mut(), H);
    }

    /// Move every column `steps` places right, wrapping around.
    ///
    /// Works on whole wired columns: the column blocks rotate along the strip and every
    /// odd step reverses each block to undo the serpentine direction change. With an odd
    /// width, the column that wraps around lands upside down.
    pub fn rotate_right(&mut self, steps: usize) {
        let pixels = self.buffer.pixels_mut();
        transform::rotate_right(pixels, Self::column_pixels(steps.checked_rem(W).unwrap_or(0)));
        if steps % 2 == 1 {
            transform::mirror_blocks(pixels, H);
        }
    }

    /// Move every column `steps` places left, wrapping around.
    pub fn rotate_left(&mut self, steps: usize) {
        let pixels = self.buffer.pixels_mut();
        transform::rotate_left(pixels, Self::column_pixels(steps.checked_rem(W).unwrap_or(0)));
        if steps % 2 == 1 {
            transform::mirror_blocks(pixels, H);
        }
    }

    /// Move every column `steps` places right; columns pushed off are lost.
    pub fn shift_right(&mut self, steps: usize) {
        let steps = steps.min(W);
        let pixels = self.buffer.pixels_mut();
        transform::shift_right(pixels, Self::column_pixels(steps));
        if steps % 2 == 1 {
            transform::mirror_blocks(pixels, H);
        }
    }

    /// Move every column `steps` places left; columns pushed off are lost.
    pub fn shift_left(&mut self, steps: usize) {
        let steps = steps.min(W);
        let pixels = self.buffer.pixels_mut();
        transform::shift_left(pixels, Self::column_pixels(steps));
        if steps % 2 == 1 {
            transform::mirror_blocks(pixels, H);
        }
    }

    /// Move every row `steps` places up, wrapping the top rows to the bottom.
    pub fn rotate_up(&mut self, steps: usize) {
        self.for_each_column(|column| transform::rotate_left(column, steps));
    }

    /// Move every row `steps` places down, wrapping the bottom rows to the top.
    pub fn rotate_down(&mut self, steps: usize) {
        self.for_each_column(|column| transform::rotate_right(column, steps));
    }

    /// Move every row `steps` places up; rows pushed off are lost.
    pub fn shift_up(&mut self, steps: usize) {
        self.for_each_column(|column| transform::shift_left(column, steps));
    }

    /// Move every row `steps` places down; rows pushed off are lost.
    pub fn shift_down(&mut self, steps: usize) {
        self.for_each_column(|column| transform::shift_right(column, steps));
    }

    /// Pixels in `columns` whole columns; `columns` never exceeds `W`.
    const fn column_pixels(columns: usize) -> usize {
        columns.saturating_mul(H)
    }

    fn for_each_column(&mut self, mut apply: impl FnMut(&mut [Pixel])) {
        for x in 0..W {
            let Some(path) = self.layout.column(x) else {
                continue;
            };
            let pixels = self.buffer.pixels_mut();
            let mut column = transform::gather(pixels, &path);
            apply(&mut column);
            transform::scatter(pixels, &path, &column);
        }
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Draw one character of the built-in [`font`] with its top-left corner at `(x, y)`.
    ///
    /// Only the glyph's lit dots are painted; everything under its blank dots keeps its
    /// color. Fails with [`Error::UnsupportedCharacter`] for characters the font lacks
    /// and with [`Error::CoordinateOutOfRange`] if a lit dot falls off the panel.
    pub fn set_char(
        &mut self,
        x: usize,
        y: usize,
        character: char,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        self.draw_char(x, y, character, color.into(), brightness)
            .map(|_| ())
    }

    /// Draw `text` left to right starting at `(x, y)` and return the x position after
    /// the last character.
    ///
    /// Narrow glyphs advance the cursor 4 columns and the rest 6. Nothing is sent to the
    /// LEDs; call [`show`](Self::show) afterwards.
    pub fn set_text(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<usize> {
        let color = color.into();
        let mut cursor = x;
        for character in text.chars() {
            let advance = self.draw_char(cursor, y, character, color, brightness)?;
            (cursor, _) = Self::offset(cursor, advance, y, 0)?;
        }
        Ok(cursor)
    }

    /// Like [`set_text`](Self::set_text), but shows the panel and waits `interval` after
    /// each character, for a typing effect.
    #[expect(clippy::too_many_arguments, reason = "set_text plus pacing")]
    pub fn set_text_animated(
        &mut self,
        x: usize,
        y: usize,
        text: &str,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
        delay: &mut impl DelayNs,
        interval: Duration,
    ) -> Result<usize> {
        let color = color.into();
        let interval_us = u32::try_from(interval.as_micros()).unwrap_or(u32::MAX);
        let mut cursor = x;
        for character in text.chars() {
            let advance = self.draw_char(cursor, y, character, color, brightness)?;
            (cursor, _) = Self::offset(cursor, advance, y, 0)?;
            self.show()?;
            log::trace!("text: drew {character:?}, waiting {interval_us} us");
            delay.delay_us(interval_us);
        }
        Ok(cursor)
    }

    fn draw_char(
        &mut self,
        x: usize,
        y: usize,
        character: char,
        color: Rgbw,
        brightness: Option<u8>,
    ) -> Result<usize> {
        let glyph = font::glyph(character)?;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..glyph.width() {
                if glyph.is_set(col, row) {
                    let (x_index, y_index) = Self::offset(x, col, y, row)?;
                    self.set_pixel(x_index, y_index, color, brightness)?;
                }
            }
        }
        Ok(glyph.advance())
    }
}

impl<S, const N: usize, const W: usize, const H: usize, const BPP: usize> Deref
    for LightMatrix<S, N, W, H, BPP>
{
    type Target = PixelBuffer<N, BPP>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<S, const N: usize, const W: usize, const H: usize, const BPP: usize> DerefMut
    for LightMatrix<S, N, W, H, BPP>
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl<S, const N: usize, const W: usize, const H: usize, const BPP: usize> OriginDimensions
    for LightMatrix<S, N, W, H, BPP>
{
    fn size(&self) -> Size {
        Size::new(
            u32::try_from(W).unwrap_or(u32::MAX),
            u32::try_from(H).unwrap_or(u32::MAX),
        )
    }
}

impl<S, const N: usize, const W: usize, const H: usize, const BPP: usize> DrawTarget
    for LightMatrix<S, N, W, H, BPP>
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = GraphicsPixel<Self::Color>>,
    {
        for GraphicsPixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(index) = self.layout.index(x_index, y_index) {
                self.buffer.write(index, color.into(), None);
            }
        }
        Ok(())
    }
}
