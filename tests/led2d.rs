#![allow(missing_docs)]
//! Host-level tests for matrices: coordinate drawing, transforms and graphics.

use core::convert::Infallible;

use embedded_graphics::Drawable;
use embedded_graphics::Pixel as GraphicsPixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::Primitive;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use pixel_led::{Error, Result};
use pixel_led::color::{Brightness, Rgbw};
use pixel_led::config::{LedConfig, TimingProfile};
use pixel_led::led2d::LightMatrix;
use pixel_led::pixel_buffer::Pixel;
use pixel_led::transmit::Transmit;

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

type Matrix4 = LightMatrix<RecordingSink, 16, 4, 4>;
type Matrix32x8 = LightMatrix<RecordingSink, 256, 32, 8>;

fn matrix4() -> Matrix4 {
    LightMatrix::new(LedConfig::new(0), RecordingSink::default())
}

/// 4×4 matrix whose pixel `(x, y)` is red `10 * x + y + 1`.
fn numbered_matrix4() -> Matrix4 {
    let mut matrix = matrix4();
    for y in 0..4 {
        for x in 0..4 {
            matrix
                .set_pixel(x, y, [marker(x, y), 0, 0], None)
                .expect("coordinate is on the panel");
        }
    }
    matrix
}

fn marker(x: usize, y: usize) -> u8 {
    (10 * x + y + 1) as u8
}

/// Red channel at `(x, y)`, 0 for off.
fn red_at(matrix: &Matrix4, x: usize, y: usize) -> u8 {
    matrix.get_pixel(x, y).expect("coordinate is on the panel").raw().r
}

#[test]
fn first_pixel_of_32x8_panel_is_sent_green_red_blue() -> Result<()> {
    let mut matrix: Matrix32x8 = LightMatrix::new(LedConfig::new(0), RecordingSink::default());
    matrix.set_pixel(0, 0, [255, 0, 0], None)?;
    matrix.show()?;

    let frame = &matrix.sink().frames[0];
    assert_eq!(frame.len(), 256 * 3);
    assert_eq!(frame[..3], [0, 255, 0]);
    assert!(frame[3..].iter().all(|&byte| byte == 0));
    Ok(())
}

#[test]
fn coordinates_resolve_through_serpentine_wiring() -> Result<()> {
    let mut matrix: Matrix32x8 = LightMatrix::new(LedConfig::new(0), RecordingSink::default());
    matrix.set_pixel(1, 0, [9, 9, 9], None)?;
    assert_eq!(matrix.index(1, 0), Ok(15));
    assert!(!matrix.get_serial(15)?.is_off());
    assert_eq!(matrix.index(2, 7), Ok(23));
    Ok(())
}

#[test]
fn out_of_panel_coordinates_are_rejected() {
    let mut matrix = matrix4();
    let expected = Error::CoordinateOutOfRange {
        x: 4,
        y: 0,
        width: 4,
        height: 4,
    };
    assert_eq!(matrix.set_pixel(4, 0, [1, 1, 1], None), Err(expected));
    assert_eq!(matrix.get_pixel(4, 0), Err(expected));
    assert_eq!(matrix.set_pixel_brightness(4, 0, 7), Err(expected));
}

#[test]
fn pixel_brightness_by_coordinate() -> Result<()> {
    let mut matrix = matrix4();
    matrix.set_pixel(2, 3, [255, 0, 0], None)?;
    matrix.set_pixel_brightness(2, 3, 51)?;
    assert_eq!(matrix.get_pixel(2, 3)?.channels(), Rgbw::rgb(51, 0, 0));

    matrix.set_pixel_brightness(0, 0, 51)?;
    assert_eq!(matrix.get_pixel(0, 0)?, Pixel::OFF);
    Ok(())
}

#[test]
fn horizontal_and_vertical_lines() -> Result<()> {
    let mut matrix = matrix4();
    matrix.set_pixel_line_horizontal(1, 2, 3, [5, 0, 0], None)?;
    matrix.set_pixel_line_vertical(0, 0, 4, [7, 0, 0], None)?;

    for x in 1..4 {
        assert_eq!(red_at(&matrix, x, 2), 5);
    }
    for y in 0..4 {
        assert_eq!(red_at(&matrix, 0, y), 7);
    }
    assert_eq!(red_at(&matrix, 1, 1), 0);
    Ok(())
}

#[test]
fn line_past_the_edge_stops_at_the_edge() {
    let mut matrix = matrix4();
    assert_eq!(
        matrix.set_pixel_line_horizontal(2, 0, 3, [5, 0, 0], None),
        Err(Error::CoordinateOutOfRange {
            x: 4,
            y: 0,
            width: 4,
            height: 4
        })
    );
    assert_eq!(red_at(&matrix, 2, 0), 5);
    assert_eq!(red_at(&matrix, 3, 0), 5);
}

#[test]
fn lines_starting_near_usize_max_are_rejected() {
    let mut matrix = matrix4();
    let far_below = Error::CoordinateOutOfRange {
        x: 0,
        y: usize::MAX,
        width: 4,
        height: 4,
    };
    assert_eq!(
        matrix.set_pixel_line_vertical(0, usize::MAX, 3, [5, 0, 0], None),
        Err(far_below)
    );
    assert_eq!(
        matrix.set_pixel_line_gradient_vertical(0, usize::MAX, 3, [5, 0, 0], [0, 5, 0], None),
        Err(far_below)
    );
    assert!(matches!(
        matrix.set_pixel_line_horizontal(usize::MAX, 1, 2, [5, 0, 0], None),
        Err(Error::CoordinateOutOfRange { x: usize::MAX, y: 1, .. })
    ));
    assert!(matrix.pixels().iter().all(|pixel| pixel.is_off()));
}

#[test]
fn gradient_lines_run_from_first_color() -> Result<()> {
    let mut matrix = matrix4();
    matrix.set_pixel_line_gradient_horizontal(0, 1, 4, [255, 0, 0], [0, 0, 255], None)?;
    assert_eq!(matrix.get_pixel(0, 1)?.raw(), Rgbw::rgb(255, 0, 0));
    assert_eq!(matrix.get_pixel(3, 1)?.raw(), Rgbw::rgb(0, 0, 255));

    matrix.set_pixel_line_gradient_vertical(3, 0, 3, [0, 200, 0], [0, 0, 0], None)?;
    assert_eq!(matrix.get_pixel(3, 0)?.raw(), Rgbw::rgb(0, 200, 0));
    assert_eq!(matrix.get_pixel(3, 1)?.raw(), Rgbw::rgb(0, 100, 0));
    assert!(matrix.get_pixel(3, 2)?.is_off());

    assert!(matches!(
        matrix.set_pixel_line_gradient_vertical(0, 0, 5, [1, 1, 1], [2, 2, 2], None),
        Err(Error::InvalidArgument { .. })
    ));
    Ok(())
}

#[test]
fn rectangle_outline_and_fill() -> Result<()> {
    let mut matrix = matrix4();
    matrix.set_pixel_rectangle(3, 3, 0, 0, [1, 1, 1], false, None)?;
    let lit = matrix.pixels().iter().filter(|pixel| !pixel.is_off()).count();
    assert_eq!(lit, 12);
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert_eq!(red_at(&matrix, x, y), 0, "({x}, {y}) is inside the outline");
    }

    matrix.set_pixel_rectangle(1, 1, 2, 2, [2, 2, 2], true, None)?;
    assert!(matrix.pixels().iter().all(|pixel| !pixel.is_off()));
    assert_eq!(red_at(&matrix, 2, 2), 2);
    Ok(())
}

#[test]
fn mirror_x_flips_left_to_right() {
    let mut matrix = numbered_matrix4();
    matrix.mirror_x();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(red_at(&matrix, x, y), marker(3 - x, y));
        }
    }
}

#[test]
fn mirror_y_flips_top_to_bottom() {
    let mut matrix = numbered_matrix4();
    matrix.mirror_y();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(red_at(&matrix, x, y), marker(x, 3 - y));
        }
    }
}

#[test]
fn mirrors_applied_twice_restore() {
    let mut matrix = numbered_matrix4();
    let before = *matrix.pixels();
    matrix.mirror_x();
    matrix.mirror_x();
    assert_eq!(*matrix.pixels(), before);
    matrix.mirror_y();
    matrix.mirror_y();
    assert_eq!(*matrix.pixels(), before);
}

#[test]
fn rotate_right_moves_columns_and_wraps() {
    let mut matrix = numbered_matrix4();
    matrix.rotate_right(1);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(red_at(&matrix, (x + 1) % 4, y), marker(x, y));
        }
    }
}

#[test]
fn rotate_left_moves_columns_and_wraps() {
    let mut matrix = numbered_matrix4();
    matrix.rotate_left(3);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(red_at(&matrix, (x + 1) % 4, y), marker(x, y));
        }
    }
}

#[test]
fn rotate_right_then_left_restores() {
    for steps in [0, 1, 2, 3, 4, 5, 9] {
        let mut matrix = numbered_matrix4();
        let before = *matrix.pixels();
        matrix.rotate_right(steps);
        matrix.rotate_left(steps);
        assert_eq!(*matrix.pixels(), before, "steps {steps}");
    }
}

#[test]
fn shift_right_drops_last_columns() {
    let mut matrix = numbered_matrix4();
    matrix.shift_right(1);
    for y in 0..4 {
        assert_eq!(red_at(&matrix, 0, y), 0);
        for x in 1..4 {
            assert_eq!(red_at(&matrix, x, y), marker(x - 1, y));
        }
    }

    matrix.shift_right(10);
    assert!(matrix.pixels().iter().all(Pixel::is_off));
}

#[test]
fn shift_left_drops_first_columns() {
    let mut matrix = numbered_matrix4();
    matrix.shift_left(2);
    for y in 0..4 {
        assert_eq!(red_at(&matrix, 0, y), marker(2, y));
        assert_eq!(red_at(&matrix, 1, y), marker(3, y));
        assert_eq!(red_at(&matrix, 2, y), 0);
        assert_eq!(red_at(&matrix, 3, y), 0);
    }
}

#[test]
fn rotate_up_and_down_wrap_rows() {
    let mut matrix = numbered_matrix4();
    matrix.rotate_up(1);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(red_at(&matrix, x, (y + 3) % 4), marker(x, y));
        }
    }

    matrix.rotate_down(1);
    let mut expected = numbered_matrix4();
    assert_eq!(matrix.pixels(), expected.pixels());

    matrix.rotate_down(6);
    expected.rotate_down(2);
    assert_eq!(matrix.pixels(), expected.pixels());
}

#[test]
fn shift_up_and_down_drop_rows() {
    let mut matrix = numbered_matrix4();
    matrix.shift_up(1);
    for x in 0..4 {
        assert_eq!(red_at(&matrix, x, 0), marker(x, 1));
        assert_eq!(red_at(&matrix, x, 2), marker(x, 3));
        assert_eq!(red_at(&matrix, x, 3), 0);
    }

    let mut matrix = numbered_matrix4();
    matrix.shift_down(2);
    for x in 0..4 {
        assert_eq!(red_at(&matrix, x, 0), 0);
        assert_eq!(red_at(&matrix, x, 1), 0);
        assert_eq!(red_at(&matrix, x, 2), marker(x, 0));
        assert_eq!(red_at(&matrix, x, 3), marker(x, 1));
    }
}

#[test]
fn draw_target_clips_and_uses_default_brightness() -> Result<()> {
    let config = LedConfig::new(0).with_default_brightness(51);
    let mut matrix: Matrix4 = LightMatrix::new(config, RecordingSink::default());
    assert_eq!(matrix.size(), Size::new(4, 4));

    matrix
        .draw_iter([
            GraphicsPixel(Point::new(-1, 0), Rgb888::RED),
            GraphicsPixel(Point::new(1, 1), Rgb888::new(0, 0, 200)),
            GraphicsPixel(Point::new(4, 2), Rgb888::GREEN),
        ])
        .unwrap_or_else(|never| match never {});

    let pixel = matrix.get_pixel(1, 1)?;
    assert_eq!(pixel.raw(), Rgbw::rgb(0, 0, 200));
    assert_eq!(pixel.brightness(), Some(Brightness::new(51)));
    assert_eq!(
        matrix.pixels().iter().filter(|pixel| !pixel.is_off()).count(),
        1
    );
    Ok(())
}

#[test]
fn embedded_graphics_primitives_draw_onto_the_panel() {
    let mut matrix = matrix4();
    Line::new(Point::new(-2, 2), Point::new(5, 2))
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
        .draw(&mut matrix)
        .unwrap_or_else(|never| match never {});

    for x in 0..4 {
        assert_eq!(red_at(&matrix, x, 2), 255);
    }
    assert_eq!(
        matrix.pixels().iter().filter(|pixel| !pixel.is_off()).count(),
        4
    );
}
