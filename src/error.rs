//! Error and result types shared by every device in the crate.

use derive_more::{Display, Error};

use crate::led_strip::section::SectionId;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by pixel, drawing, section and text operations.
///
/// All errors are local and synchronous: the offending call stops where it failed and
/// anything it already wrote stays written.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A serial pixel index (or section bound) lies outside `0..len`.
    #[display("index {index} is out of range for {len} pixels")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of pixels in the buffer.
        len: usize,
    },
    /// A matrix coordinate lies outside the panel.
    #[display("coordinate ({x}, {y}) is outside the {width}x{height} panel")]
    CoordinateOutOfRange {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Panel width in pixels.
        width: usize,
        /// Panel height in pixels.
        height: usize,
    },
    /// An argument was structurally invalid (too few gradient steps, wrong channel count).
    #[display("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong.
        reason: &'static str,
    },
    /// The font has no glyph for this character.
    #[display("no glyph for character {character:?}")]
    UnsupportedCharacter {
        /// Character after uppercasing.
        character: char,
    },
    /// No section is registered under this id.
    #[display("section {id} is not registered")]
    SectionNotFound {
        /// Requested id.
        id: SectionId,
    },
    /// The section map is full.
    #[display("section map is full ({capacity} sections)")]
    SectionsFull {
        /// Maximum number of sections.
        capacity: usize,
    },
    /// The transmission sink reported a failure.
    #[display("transmission failed")]
    Transmit,
}
