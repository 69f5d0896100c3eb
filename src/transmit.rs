//! Boundary to the hardware that clocks serialized pixel bytes out of a data pin.
//!
//! This crate never touches hardware. A device's `show` method serializes its
//! [`PixelBuffer`] and passes the bytes, pin and [`TimingProfile`] to a [`Transmit`]
//! implementation supplied by the caller (a PIO program, an RMT channel, SPI tricks,
//! or a recorder in tests).

use core::fmt::Debug;

use crate::config::{LedConfig, TimingProfile};
use crate::pixel_buffer::PixelBuffer;
use crate::{Error, Result};

/// Sink that physically sends a frame of bytes as a single-wire timed bit stream.
///
/// `transmit` returns once the bytes are latched out.
///
/// ```
/// use pixel_led::config::TimingProfile;
/// use pixel_led::transmit::Transmit;
///
/// struct ByteCounter(usize);
///
/// impl Transmit for ByteCounter {
///     type Error = core::convert::Infallible;
///
///     fn transmit(&mut self, _pin: u8, _timing: &TimingProfile, bytes: &[u8]) -> Result<(), Self::Error> {
///         self.0 += bytes.len();
///         Ok(())
///     }
/// }
/// ```
pub trait Transmit {
    /// Hardware-specific failure.
    type Error: Debug;

    /// Send `bytes` on `pin` with the given bit timing.
    fn transmit(
        &mut self,
        pin: u8,
        timing: &TimingProfile,
        bytes: &[u8],
    ) -> core::result::Result<(), Self::Error>;
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    type Error = T::Error;

    fn transmit(
        &mut self,
        pin: u8,
        timing: &TimingProfile,
        bytes: &[u8],
    ) -> core::result::Result<(), Self::Error> {
        (**self).transmit(pin, timing, bytes)
    }
}

/// Device configuration paired with the sink it transmits through.
#[derive(Debug)]
pub(crate) struct Output<S> {
    config: LedConfig,
    sink: S,
}

impl<S: Transmit> Output<S> {
    pub(crate) const fn new(config: LedConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub(crate) const fn config(&self) -> &LedConfig {
        &self.config
    }

    pub(crate) const fn sink(&self) -> &S {
        &self.sink
    }

    pub(crate) fn into_sink(self) -> S {
        self.sink
    }

    pub(crate) fn show<const N: usize, const BPP: usize>(
        &mut self,
        buffer: &PixelBuffer<N, BPP>,
    ) -> Result<()> {
        let bytes = buffer.serialize();
        let bytes = bytes.as_flattened();
        let pin = self.config.pin;
        log::debug!("show: sending {} bytes on pin {}", bytes.len(), pin);
        self.sink
            .transmit(pin, &self.config.timing, bytes)
            .map_err(|err| {
                log::warn!("show: transmission on pin {pin} failed: {err:?}");
                Error::Transmit
            })
    }
}
