//! Linear per-channel color gradients.

use heapless::Vec;

use crate::color::Rgbw;
use crate::{Error, Result};

/// Interpolate `steps` colors from `start` to `end`, both included.
///
/// Each channel moves by `(start - end) / (steps - 1)` per step and is rounded to the
/// nearest integer (halves round up), so the first entry is exactly `start` and the last
/// exactly `end`. `MAX` is the capacity of the returned vector.
///
/// Fails with [`Error::InvalidArgument`] when `steps < 2` (a single step has no
/// direction) or when `steps > MAX`.
///
/// ```
/// use pixel_led::color::Rgbw;
/// use pixel_led::gradient::build_gradient;
///
/// let steps = build_gradient::<3>(Rgbw::rgb(255, 0, 0), Rgbw::rgb(0, 0, 255), 3)?;
/// assert_eq!(steps[1], Rgbw::rgb(128, 0, 128));
/// # Ok::<(), pixel_led::Error>(())
/// ```
pub fn build_gradient<const MAX: usize>(
    start: impl Into<Rgbw>,
    end: impl Into<Rgbw>,
    steps: usize,
) -> Result<Vec<Rgbw, MAX>> {
    if steps < 2 {
        return Err(Error::InvalidArgument {
            reason: "gradient needs at least 2 steps",
        });
    }
    if steps > MAX {
        return Err(Error::InvalidArgument {
            reason: "gradient has more steps than its capacity",
        });
    }
    let start = start.into().channels();
    let end = end.into().channels();
    let span = steps.saturating_sub(1);

    let mut gradient = Vec::new();
    for step in 0..steps {
        let mut channels = [0_u8; 4];
        for (channel, (&from, &to)) in channels.iter_mut().zip(start.iter().zip(end.iter())) {
            *channel = interpolate(from, to, step, span);
        }
        gradient
            .push(Rgbw::from_channels(channels))
            .map_err(|_| Error::InvalidArgument {
                reason: "gradient has more steps than its capacity",
            })?;
    }
    Ok(gradient)
}

/// `round(from - (from - to) / span * step)` without floating point.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "0 < span, step <= span, and every product is at most 2 * 255 * span"
)]
fn interpolate(from: u8, to: u8, step: usize, span: usize) -> u8 {
    let from = usize::from(from);
    let to = usize::from(to);
    // from * span - (from - to) * step, kept non-negative by splitting on direction.
    let numerator = if from >= to {
        from * span - (from - to) * step
    } else {
        from * span + (to - from) * step
    };
    u8::try_from((2 * numerator + span) / (2 * span)).unwrap_or(u8::MAX)
}
