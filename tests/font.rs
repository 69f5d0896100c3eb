#![allow(missing_docs)]
//! Host-level tests for the built-in font and matrix text.

use core::convert::Infallible;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use pixel_led::color::Rgbw;
use pixel_led::config::{LedConfig, TimingProfile};
use pixel_led::font::{GLYPH_HEIGHT, glyph};
use pixel_led::led2d::LightMatrix;
use pixel_led::transmit::Transmit;
use pixel_led::{Error, Result};

#[derive(Debug, Default)]
struct RecordingSink {
    frames: Vec<Vec<u8>>,
}

impl Transmit for RecordingSink {
    type Error = Infallible;

    fn transmit(
        &mut self,
        _pin: u8,
        _timing: &TimingProfile,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        self.frames.push(bytes.to_vec());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordingDelay {
    total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

type Panel = LightMatrix<RecordingSink, 256, 32, 8>;

fn panel() -> Panel {
    LightMatrix::new(LedConfig::new(0), RecordingSink::default())
}

fn lit(panel: &Panel, x: usize, y: usize) -> bool {
    !panel.get_pixel(x, y).expect("coordinate is on the panel").is_off()
}

const NARROW: &str = "1I.,:;!'()| ";

#[test]
fn narrow_i_paints_exactly_its_bit_pattern() -> Result<()> {
    let mut panel = panel();
    panel.set_char(0, 0, 'I', [255, 0, 0], None)?;

    let expected = ["###", ".#.", ".#.", ".#.", ".#.", ".#.", "###"];
    for (y, row) in expected.iter().enumerate() {
        for (x, dot) in row.chars().enumerate() {
            assert_eq!(lit(&panel, x, y), dot == '#', "({x}, {y})");
        }
        assert!(!lit(&panel, 3, y), "column 3 row {y} is outside the glyph");
    }
    assert_eq!(
        panel.pixels().iter().filter(|pixel| !pixel.is_off()).count(),
        11
    );

    assert_eq!(panel.set_text(0, 0, "I", [255, 0, 0], None)?, 4);
    Ok(())
}

#[test]
fn glyph_bits_are_row_major_msb_first() -> Result<()> {
    let i = glyph('I')?;
    assert_eq!(i.bits(), 0b111_010_010_010_010_010_111);
    assert!(i.is_set(0, 0));
    assert!(!i.is_set(0, 1));
    assert!(i.is_set(1, 3));

    let t = glyph('T')?;
    assert_eq!(t.bits() >> 30, 0b11111);
    assert!(t.bits() < 1 << 35);
    Ok(())
}

#[test]
fn narrow_set_advances_four_and_the_rest_six() -> Result<()> {
    for character in NARROW.chars() {
        let glyph = glyph(character)?;
        assert!(glyph.is_narrow(), "{character:?}");
        assert_eq!(glyph.advance(), 4);
    }
    for character in ('A'..='Z').chain('0'..='9').chain("?-+=/*#".chars()) {
        if NARROW.contains(character) {
            continue;
        }
        let glyph = glyph(character)?;
        assert_eq!(glyph.width(), 5, "{character:?}");
        assert_eq!(glyph.advance(), 6);
    }
    Ok(())
}

#[test]
fn every_glyph_fits_seven_rows() -> Result<()> {
    for character in ('A'..='Z').chain('0'..='9').chain(NARROW.chars()) {
        let glyph = glyph(character)?;
        assert!(glyph.bits() < 1 << (GLYPH_HEIGHT * glyph.width()));
    }
    Ok(())
}

#[test]
fn lowercase_is_drawn_uppercase() {
    for (lower, upper) in ('a'..='z').zip('A'..='Z') {
        assert_eq!(glyph(lower), glyph(upper));
    }
}

#[test]
fn unsupported_character_is_rejected() {
    assert_eq!(
        glyph('~'),
        Err(Error::UnsupportedCharacter { character: '~' })
    );
    let mut panel = panel();
    assert_eq!(
        panel.set_char(0, 0, 'é', [1, 1, 1], None),
        Err(Error::UnsupportedCharacter { character: 'é' })
    );
    assert!(panel.pixels().iter().all(|pixel| pixel.is_off()));
}

#[test]
fn glyphs_overlay_without_clearing_background() -> Result<()> {
    let mut panel = panel();
    panel.set_pixel(0, 1, [0, 9, 0], None)?;
    panel.set_char(0, 0, 'I', [255, 0, 0], None)?;

    assert_eq!(panel.get_pixel(0, 1)?.raw(), Rgbw::rgb(0, 9, 0));
    assert_eq!(panel.get_pixel(1, 1)?.raw(), Rgbw::rgb(255, 0, 0));
    Ok(())
}

#[test]
fn text_cursor_advances_per_glyph() -> Result<()> {
    let mut panel = panel();
    assert_eq!(panel.set_text(0, 0, "AB", [1, 1, 1], None)?, 12);
    assert_eq!(panel.set_text(2, 0, "1.A", [1, 1, 1], None)?, 2 + 4 + 4 + 6);
    assert_eq!(panel.set_text(5, 0, "", [1, 1, 1], None)?, 5);
    assert!(panel.sink().frames.is_empty());
    Ok(())
}

#[test]
fn text_uses_requested_brightness() -> Result<()> {
    let mut panel = panel();
    panel.set_text(0, 0, "T", [200, 0, 0], Some(128))?;
    let pixel = panel.get_pixel(2, 6)?;
    assert_eq!(pixel.raw(), Rgbw::rgb(200, 0, 0));
    assert_eq!(pixel.channels(), Rgbw::rgb(100, 0, 0));
    Ok(())
}

#[test]
fn lit_dot_off_the_panel_is_rejected() {
    let mut panel = panel();
    assert_eq!(
        panel.set_char(30, 0, 'A', [1, 1, 1], None),
        Err(Error::CoordinateOutOfRange {
            x: 32,
            y: 0,
            width: 32,
            height: 8
        })
    );
    assert!(lit(&panel, 31, 0));
}

#[test]
fn glyph_dots_past_usize_max_are_rejected_without_wrapping() {
    let mut panel = panel();
    assert_eq!(
        panel.set_char(usize::MAX, 0, 'A', [255, 0, 0], None),
        Err(Error::CoordinateOutOfRange {
            x: usize::MAX,
            y: 0,
            width: 32,
            height: 8
        })
    );
    assert_eq!(
        panel.set_char(0, usize::MAX, '.', [255, 0, 0], None),
        Err(Error::CoordinateOutOfRange {
            x: 1,
            y: usize::MAX,
            width: 32,
            height: 8
        })
    );
    assert!(panel.pixels().iter().all(|pixel| pixel.is_off()));
}

#[test]
fn text_cursor_past_usize_max_is_rejected() {
    let mut panel = panel();
    assert_eq!(
        panel.set_text(usize::MAX - 1, 0, "  ", [255, 0, 0], None),
        Err(Error::CoordinateOutOfRange {
            x: usize::MAX,
            y: 0,
            width: 32,
            height: 8
        })
    );

    let mut delay = RecordingDelay::default();
    assert!(matches!(
        panel.set_text_animated(
            usize::MAX - 2,
            3,
            " ",
            [255, 0, 0],
            None,
            &mut delay,
            Duration::from_millis(50),
        ),
        Err(Error::CoordinateOutOfRange { x: usize::MAX, y: 3, .. })
    ));
    assert!(panel.sink().frames.is_empty());
    assert_eq!(delay.total_ns, 0);
    assert!(panel.pixels().iter().all(|pixel| pixel.is_off()));
}

#[test]
fn animated_text_shows_and_waits_after_each_character() -> Result<()> {
    let mut panel = panel();
    let mut delay = RecordingDelay::default();

    let end = panel
        .set_text_animated(
            0,
            0,
            "HI!",
            [0, 0, 255],
            None,
            &mut delay,
            Duration::from_millis(50),
        )?;

    assert_eq!(end, 6 + 4 + 4);
    assert_eq!(delay.total_ns, 3 * 50_000_000);

    let frames = &panel.sink().frames;
    assert_eq!(frames.len(), 3);
    let lit_bytes = |frame: &Vec<u8>| frame.iter().filter(|&&byte| byte != 0).count();
    assert!(lit_bytes(&frames[0]) < lit_bytes(&frames[1]));
    assert!(lit_bytes(&frames[1]) < lit_bytes(&frames[2]));
    Ok(())
}
