//! In-place rotate, shift and mirror primitives over pixel sequences.
//!
//! Every function keeps the slice length. Rotations wrap, shifts drop what falls off the
//! end and fill the vacated places with [`Pixel::OFF`]. Step counts larger than the slice
//! behave exactly like repeating a single step that many times.

use crate::pixel_buffer::Pixel;

pub(crate) fn rotate_right(pixels: &mut [Pixel], steps: usize) {
    if let Some(steps) = steps.checked_rem(pixels.len()) {
        pixels.rotate_right(steps);
    }
}

pub(crate) fn rotate_left(pixels: &mut [Pixel], steps: usize) {
    if let Some(steps) = steps.checked_rem(pixels.len()) {
        pixels.rotate_left(steps);
    }
}

pub(crate) fn shift_right(pixels: &mut [Pixel], steps: usize) {
    let steps = steps.min(pixels.len());
    pixels.rotate_right(steps);
    pixels.iter_mut().take(steps).for_each(|pixel| *pixel = Pixel::OFF);
}

pub(crate) fn shift_left(pixels: &mut [Pixel], steps: usize) {
    let steps = steps.min(pixels.len());
    pixels.rotate_left(steps);
    pixels.iter_mut().rev().take(steps).for_each(|pixel| *pixel = Pixel::OFF);
}

/// Reverse every consecutive block of `stride` pixels independently.
pub(crate) fn mirror_blocks(pixels: &mut [Pixel], stride: usize) {
    if stride == 0 {
        return;
    }
    for block in pixels.chunks_mut(stride) {
        block.reverse();
    }
}

/// Copy the pixels found along `path` (serial indices) into a scratch array.
pub(crate) fn gather<const K: usize>(pixels: &[Pixel], path: &[u16; K]) -> [Pixel; K] {
    path.map(|index| pixels.get(usize::from(index)).copied().unwrap_or(Pixel::OFF))
}

/// Write `values` back along `path`.
pub(crate) fn scatter<const K: usize>(pixels: &mut [Pixel], path: &[u16; K], values: &[Pixel; K]) {
    for (&index, &value) in path.iter().zip(values.iter()) {
        if let Some(pixel) = pixels.get_mut(usize::from(index)) {
            *pixel = value;
        }
    }
}

/// Move `pixels[start..end]` right by `steps`.
///
/// The rewritten window is `start..end + steps`, clipped to the slice: the moved pixels
/// land at `start + steps..`, everything else in the window turns off.
pub(crate) fn shift_window_right(pixels: &mut [Pixel], start: usize, end: usize, steps: usize) {
    shift_right(window(pixels, start, end.saturating_add(steps)), steps);
}

/// Move `pixels[start..end]` left by `steps`.
///
/// The rewritten window is `start - steps..end`, clipped at index 0: the moved pixels
/// land at `start - steps..`, everything else in the window turns off.
pub(crate) fn shift_window_left(pixels: &mut [Pixel], start: usize, end: usize, steps: usize) {
    shift_left(window(pixels, start.saturating_sub(steps), end), steps);
}

/// `pixels[start..end]` with both bounds clipped to the slice.
fn window(pixels: &mut [Pixel], start: usize, end: usize) -> &mut [Pixel] {
    let end = end.min(pixels.len());
    let start = start.min(end);
    pixels.get_mut(start..end).unwrap_or_default()
}
