//! Built-in 7-row bitmap font for matrix text.
//!
//! Each glyph is a 5×7 or (for narrow glyphs) 3×7 dot matrix packed into an integer,
//! row-major with the most significant bit first: bit `row * width + col`, counted from
//! the top of a `7 * width` bit field, is the dot at `(col, row)`. Text advances by the
//! glyph width plus one blank column, so 6 columns for normal glyphs and 4 for narrow
//! ones.
//!
//! Supported: `A`-`Z` (lowercase is drawn uppercase), `0`-`9`, space and
//! `. , : ; ! ? - + = ' / ( ) * # |`.
//!
//! ```
//! use pixel_led::font::glyph;
//!
//! let i = glyph('i')?;
//! assert!(i.is_narrow());
//! assert_eq!(i.bits(), 0b111_010_010_010_010_010_111);
//! assert_eq!(i.advance(), 4);
//! # Ok::<(), pixel_led::Error>(())
//! ```

use crate::{Error, Result};

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 7;

/// Columns in a normal glyph.
pub const GLYPH_WIDTH: usize = 5;

/// Columns in a narrow glyph.
pub const NARROW_GLYPH_WIDTH: usize = 3;

/// One packed dot-matrix character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    bits: u64,
    width: u8,
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "dot positions are bounded by GLYPH_HEIGHT and a width of at most 5"
)]
impl Glyph {
    /// Pack a glyph from one string per row, `#` for a lit dot and anything else blank.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for the built-in table) unless every row has the same
    /// length, either 3 or 5.
    #[must_use]
    pub const fn from_rows(rows: [&str; GLYPH_HEIGHT]) -> Self {
        let width = rows[0].len();
        assert!(
            width == GLYPH_WIDTH || width == NARROW_GLYPH_WIDTH,
            "glyph rows must be 3 or 5 columns wide"
        );

        let mut bits = 0_u64;
        let mut row = 0;
        while row < GLYPH_HEIGHT {
            let dots = rows[row].as_bytes();
            assert!(dots.len() == width, "glyph rows must all be the same width");
            let mut col = 0;
            while col < width {
                bits = (bits << 1) | (dots[col] == b'#') as u64;
                col += 1;
            }
            row += 1;
        }
        Self {
            bits,
            width: width as u8,
        }
    }

    /// Packed dots, row-major, most significant bit first.
    #[must_use]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Columns in this glyph.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// True for the 3-column glyphs.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.width() == NARROW_GLYPH_WIDTH
    }

    /// Columns the text cursor moves after drawing this glyph.
    #[must_use]
    pub const fn advance(&self) -> usize {
        self.width() + 1
    }

    /// True when the dot at `(col, row)` is lit. Out-of-range positions are blank.
    #[must_use]
    pub const fn is_set(&self, col: usize, row: usize) -> bool {
        let width = self.width();
        if col >= width || row >= GLYPH_HEIGHT {
            return false;
        }
        let from_top = row * width + col;
        let shift = GLYPH_HEIGHT * width - 1 - from_top;
        (self.bits >> shift) & 1 == 1
    }
}

/// Look up the glyph for `character`, drawing lowercase letters as uppercase.
///
/// Fails with [`Error::UnsupportedCharacter`] for characters the font does not have.
pub fn glyph(character: char) -> Result<Glyph> {
    let character = character.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(candidate, _)| *candidate == character)
        .map(|&(_, glyph)| glyph)
        .ok_or(Error::UnsupportedCharacter { character })
}

#[rustfmt::skip]
static GLYPHS: [(char, Glyph); 53] = [
    ('A', Glyph::from_rows([".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"])),
    ('B', Glyph::from_rows(["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."])),
    ('C', Glyph::from_rows([".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."])),
    ('D', Glyph::from_rows(["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."])),
    ('E', Glyph::from_rows(["#####", "#....", "#....", "####.", "#....", "#....", "#####"])),
    ('F', Glyph::from_rows(["#####", "#....", "#....", "####.", "#....", "#....", "#...."])),
    ('G', Glyph::from_rows([".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"])),
    ('H', Glyph::from_rows(["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"])),
    ('I', Glyph::from_rows(["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"])),
    ('J', Glyph::from_rows(["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."])),
    ('K', Glyph::from_rows(["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"])),
    ('L', Glyph::from_rows(["#....", "#....", "#....", "#....", "#....", "#....", "#####"])),
    ('M', Glyph::from_rows(["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"])),
    ('N', Glyph::from_rows(["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"])),
    ('O', Glyph::from_rows([".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."])),
    ('P', Glyph::from_rows(["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."])),
    ('Q', Glyph::from_rows([".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"])),
    ('R', Glyph::from_rows(["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"])),
    ('S', Glyph::from_rows([".####", "#....", "#....", ".###.", "....#", "....#", "####."])),
    ('T', Glyph::from_rows(["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."])),
    ('U', Glyph::from_rows(["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."])),
    ('V', Glyph::from_rows(["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."])),
    ('W', Glyph::from_rows(["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."])),
    ('X', Glyph::from_rows(["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"])),
    ('Y', Glyph::from_rows(["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."])),
    ('Z', Glyph::from_rows(["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"])),
    ('0', Glyph::from_rows([".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."])),
    ('1', Glyph::from_rows([".#.", "##.", ".#.", ".#.", ".#.", ".#.", "###"])),
    ('2', Glyph::from_rows([".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"])),
    ('3', Glyph::from_rows(["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."])),
    ('4', Glyph::from_rows(["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."])),
    ('5', Glyph::from_rows(["#####", "#....", "####.", "....#", "....#", "#...#", ".###."])),
    ('6', Glyph::from_rows(["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."])),
    ('7', Glyph::from_rows(["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."])),
    ('8', Glyph::from_rows([".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."])),
    ('9', Glyph::from_rows([".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."])),
    (' ', Glyph::from_rows(["...", "...", "...", "...", "...", "...", "..."])),
    ('.', Glyph::from_rows(["...", "...", "...", "...", "...", "...", ".#."])),
    (',', Glyph::from_rows(["...", "...", "...", "...", "...", ".#.", "#.."])),
    (':', Glyph::from_rows(["...", ".#.", "...", "...", "...", ".#.", "..."])),
    (';', Glyph::from_rows(["...", ".#.", "...", "...", ".#.", ".#.", "#.."])),
    ('!', Glyph::from_rows([".#.", ".#.", ".#.", ".#.", ".#.", "...", ".#."])),
    ('\'', Glyph::from_rows([".#.", ".#.", "#..", "...", "...", "...", "..."])),
    ('(', Glyph::from_rows(["..#", ".#.", "#..", "#..", "#..", ".#.", "..#"])),
    (')', Glyph::from_rows(["#..", ".#.", "..#", "..#", "..#", ".#.", "#.."])),
    ('|', Glyph::from_rows([".#.", ".#.", ".#.", ".#.", ".#.", ".#.", ".#."])),
    ('?', Glyph::from_rows([".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."])),
    ('-', Glyph::from_rows([".....", ".....", ".....", "#####", ".....", ".....", "....."])),
    ('+', Glyph::from_rows([".....", "..#..", "..#..", "#####", "..#..", "..#..", "....."])),
    ('=', Glyph::from_rows([".....", ".....", "#####", ".....", "#####", ".....", "....."])),
    ('/', Glyph::from_rows(["....#", "....#", "...#.", "..#..", ".#...", "#....", "#...."])),
    ('*', Glyph::from_rows([".....", "#.#.#", ".###.", "#####", ".###.", "#.#.#", "....."])),
    ('#', Glyph::from_rows([".#.#.", ".#.#.", "#####", ".#.#.", "#####", ".#.#.", ".#.#."])),
];
