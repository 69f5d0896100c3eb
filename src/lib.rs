//! Pixel buffers, drawing, transforms and bitmap text for WS2812 and SK6812 LED strips
//! and serpentine-wired LED matrices.
//!
//! The crate keeps one device's pixels in memory, draws into them, and serializes them
//! into the byte stream the LEDs expect. Sending the bytes is left to a
//! [`Transmit`](transmit::Transmit) implementation supplied by the caller, so the crate
//! itself runs anywhere, `no_std` included.
//!
//! # Glossary
//!
//! - **Serial index:** position of an LED along the data wire, starting at 0.
//! - **Serpentine (boustrophedon) wiring:** a matrix whose strip runs down one column and
//!   back up the next. See [`LedLayout`](led2d::LedLayout).
//! - **Channel order:** the order the color bytes of a pixel travel on the wire (GRB for
//!   WS2812). See [`ChannelOrder`](config::ChannelOrder).
//! - **Brightness:** `1..=255`, applied to every channel as `round(raw * brightness / 255)`.
//!   An unlit pixel has no brightness.
//!
//! # Example: a 32×8 matrix
//!
//! ```
//! use core::convert::Infallible;
//! use pixel_led::config::{LedConfig, TimingProfile};
//! use pixel_led::led2d::LightMatrix;
//! use pixel_led::transmit::Transmit;
//!
//! /// Keeps the last frame instead of driving a pin.
//! struct LastFrame([u8; 256 * 3]);
//!
//! impl Transmit for LastFrame {
//!     type Error = Infallible;
//!
//!     fn transmit(&mut self, _pin: u8, _timing: &TimingProfile, bytes: &[u8]) -> Result<(), Infallible> {
//!         self.0.copy_from_slice(bytes);
//!         Ok(())
//!     }
//! }
//!
//! let mut matrix: LightMatrix<LastFrame, 256, 32, 8> =
//!     LightMatrix::new(LedConfig::new(0), LastFrame([0; 256 * 3]));
//! matrix.set_pixel(0, 0, [255, 0, 0], None)?;
//! matrix.show()?;
//!
//! // Red goes out second: the wire order is green, red, blue.
//! assert_eq!(matrix.sink().0[..3], [0, 255, 0]);
//! # Ok::<(), pixel_led::Error>(())
//! ```
#![no_std]

pub mod color;
pub mod config;
mod error;
pub mod font;
pub mod gradient;
pub mod led2d;
pub mod led_strip;
pub mod pixel_buffer;
pub(crate) mod transform;
pub mod transmit;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
