//! A device abstraction for WS2812 and SK6812 LED strips.
//!
//! [`LightStrip`] owns the [`PixelBuffer`] of one strip, the strip's [`LedConfig`] and
//! the [`Transmit`] sink that physically sends frames. Drawing calls only touch the
//! buffer; nothing reaches the LEDs until [`LightStrip::show`].
//!
//! See the [`led2d`](mod@crate::led2d) module for 2D panel usage.
//!
//! # Example: lines, gradients and a moving section
//!
//! ```
//! use core::convert::Infallible;
//! use pixel_led::config::{LedConfig, TimingProfile};
//! use pixel_led::led_strip::{LightStrip, colors};
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
//! let mut strip: LightStrip<Wire, 30> = LightStrip::new(LedConfig::new(2), Wire);
//! strip.set_pixel_line(0, 4, colors::BLUE, Some(64))?;
//! strip.set_pixel_line_gradient(10, 19, colors::RED, colors::GREEN, None)?;
//!
//! let section = strip.set_section(0, 4, None)?;
//! strip.shift_section_right(section, 3)?;
//! assert_eq!(strip.section(section)?.start(), 3);
//! strip.show()?;
//! # Ok::<(), pixel_led::Error>(())
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};

use crate::color::Rgbw;
use crate::config::LedConfig;
use crate::gradient::build_gradient;
use crate::pixel_buffer::{Pixel, PixelBuffer};
use crate::transform;
use crate::transmit::{Output, Transmit};
use crate::{Error, Result};

// ============================================================================
// Submodules
// ============================================================================

pub mod section;

use section::{Section, SectionId, SectionMap};

// ============================================================================
// LightStrip
// ============================================================================

/// One strip of `N` LEDs sending `BPP` bytes per pixel through the sink `S`.
///
/// Derefs to its [`PixelBuffer`], so serial-index operations such as
/// [`fill`](PixelBuffer::fill), [`set_brightness`](PixelBuffer::set_brightness) and
/// [`serialize`](PixelBuffer::serialize) are available directly.
///
/// See the [module documentation](mod@crate::led_strip) for usage examples.
#[derive(Debug)]
pub struct LightStrip<S, const N: usize, const BPP: usize = 3> {
    buffer: PixelBuffer<N, BPP>,
    sections: SectionMap,
    output: Output<S>,
}

impl<S: Transmit, const N: usize, const BPP: usize> LightStrip<S, N, BPP> {
    /// Number of LEDs on this strip.
    pub const LEN: usize = N;

    /// Create an all-off strip.
    #[must_use]
    pub const fn new(config: LedConfig, sink: S) -> Self {
        Self {
            buffer: PixelBuffer::new(config.channel_order, config.default_brightness.get()),
            sections: SectionMap::new(),
            output: Output::new(config, sink),
        }
    }

    /// Configuration the strip was built with.
    #[must_use]
    pub const fn config(&self) -> &LedConfig {
        self.output.config()
    }

    /// The transmission sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        self.output.sink()
    }

    /// Give the sink back, dropping the strip.
    pub fn into_sink(self) -> S {
        self.output.into_sink()
    }

    /// Serialize the buffer and hand it to the sink.
    pub fn show(&mut self) -> Result<()> {
        self.output.show(&self.buffer)
    }

    /// Write one pixel. See [`PixelBuffer::set_serial`].
    pub fn set_pixel(
        &mut self,
        index: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        self.buffer.set_serial(index, color, brightness)
    }

    /// Read one pixel.
    pub fn get_pixel(&self, index: usize) -> Result<Pixel> {
        self.buffer.get_serial(index)
    }

    /// Change the brightness of one lit pixel; unlit pixels are left alone.
    pub fn set_pixel_brightness(&mut self, index: usize, brightness: u8) -> Result<()> {
        self.buffer.set_brightness_serial(index, brightness)
    }

    /// Paint every pixel from `a` through `b` (both included, either order).
    pub fn set_pixel_line(
        &mut self,
        a: usize,
        b: usize,
        color: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let (low, high) = Self::inclusive_bounds(a, b)?;
        let color = color.into();
        for index in low..=high {
            self.buffer.write(index, color, brightness);
        }
        Ok(())
    }

    /// Paint a gradient from `a` through `b` (both included).
    ///
    /// The gradient always starts at `a` with `color_a` and ends at `b` with `color_b`,
    /// whichever of the two indices is larger. A line of one pixel has no gradient and
    /// fails with [`Error::InvalidArgument`].
    pub fn set_pixel_line_gradient(
        &mut self,
        a: usize,
        b: usize,
        color_a: impl Into<Rgbw>,
        color_b: impl Into<Rgbw>,
        brightness: Option<u8>,
    ) -> Result<()> {
        let (low, high) = Self::inclusive_bounds(a, b)?;
        let steps = high.saturating_sub(low).saturating_add(1);
        let gradient = build_gradient::<N>(color_a, color_b, steps)?;
        if a <= b {
            for (index, &color) in (low..=high).zip(&gradient) {
                self.buffer.write(index, color, brightness);
            }
        } else {
            for (index, &color) in (low..=high).rev().zip(&gradient) {
                self.buffer.write(index, color, brightness);
            }
        }
        Ok(())
    }

    /// Move every pixel `steps` places toward the end, wrapping around.
    pub fn rotate_right(&mut self, steps: usize) {
        transform::rotate_right(self.buffer.pixels_mut(), steps);
    }

    /// Move every pixel `steps` places toward the start, wrapping around.
    pub fn rotate_left(&mut self, steps: usize) {
        transform::rotate_left(self.buffer.pixels_mut(), steps);
    }

    /// Move every pixel `steps` places toward the end; pixels pushed off are lost.
    pub fn shift_right(&mut self, steps: usize) {
        transform::shift_right(self.buffer.pixels_mut(), steps);
    }

    /// Move every pixel `steps` places toward the start; pixels pushed off are lost.
    pub fn shift_left(&mut self, steps: usize) {
        transform::shift_left(self.buffer.pixels_mut(), steps);
    }

    // ------------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------------

    /// Register the range `a` through `b` (both included, either order) as a section.
    ///
    /// Without an explicit `id` the next counter value is used. Returns the id.
    pub fn set_section(&mut self, a: usize, b: usize, id: Option<SectionId>) -> Result<SectionId> {
        Self::inclusive_bounds(a, b)?;
        self.sections.insert(Section::inclusive(a, b), id)
    }

    /// Remove a section; see [`SectionMap::remove`].
    pub fn unset_section(&mut self, id: Option<SectionId>) -> Result<Section> {
        self.sections.remove(id)
    }

    /// Current range of a section.
    pub fn section(&self, id: SectionId) -> Result<Section> {
        self.sections.get(id)
    }

    /// All registered sections.
    #[must_use]
    pub const fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Forget every section and reset the id counter. Pixels are untouched.
    pub fn clear_section_map(&mut self) {
        self.sections.clear();
    }

    /// Shift the pixels of a section `steps` places right and move the section with them.
    ///
    /// Pixels between the section's old start and new start turn off; pixels pushed past
    /// the end of the strip are lost. Pixels outside `start..end + steps` are untouched.
    pub fn shift_section_right(&mut self, id: SectionId, steps: usize) -> Result<Section> {
        let section = self.sections.get(id)?;
        transform::shift_window_right(
            self.buffer.pixels_mut(),
            section.start(),
            section.end(),
            steps,
        );
        self.sections.move_right(id, steps)
    }

    /// Shift the pixels of a section `steps` places left and move the section with them.
    ///
    /// The section's bounds stop at 0. The rewritten window is `start - steps..end`, so
    /// when `steps` is larger than `start` the pixels in `0..start` are overwritten too:
    /// by the moved section where it lands, and turned off past its new end.
    pub fn shift_section_left(&mut self, id: SectionId, steps: usize) -> Result<Section> {
        let section = self.sections.get(id)?;
        transform::shift_window_left(
            self.buffer.pixels_mut(),
            section.start(),
            section.end(),
            steps,
        );
        self.sections.move_left(id, steps)
    }

    /// Shift the pixels of the unregistered range `min(a, b)..max(a, b)` right.
    pub fn shift_range_right(&mut self, a: usize, b: usize, steps: usize) -> Result<()> {
        let (start, end) = Self::half_open_bounds(a, b)?;
        transform::shift_window_right(self.buffer.pixels_mut(), start, end, steps);
        Ok(())
    }

    /// Shift the pixels of the unregistered range `min(a, b)..max(a, b)` left.
    pub fn shift_range_left(&mut self, a: usize, b: usize, steps: usize) -> Result<()> {
        let (start, end) = Self::half_open_bounds(a, b)?;
        transform::shift_window_left(self.buffer.pixels_mut(), start, end, steps);
        Ok(())
    }

    const fn inclusive_bounds(a: usize, b: usize) -> Result<(usize, usize)> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if high < N {
            Ok((low, high))
        } else {
            Err(Error::IndexOutOfRange { index: high, len: N })
        }
    }

    const fn half_open_bounds(a: usize, b: usize) -> Result<(usize, usize)> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if high <= N {
            Ok((low, high))
        } else {
            Err(Error::IndexOutOfRange { index: high, len: N })
        }
    }
}

impl<S, const N: usize, const BPP: usize> Deref for LightStrip<S, N, BPP> {
    type Target = PixelBuffer<N, BPP>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<S, const N: usize, const BPP: usize> DerefMut for LightStrip<S, N, BPP> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}
