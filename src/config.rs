//! Device configuration: data pin, channel order, bit timing and default brightness.

use crate::color::{Brightness, Rgbw};

/// One logical color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// White.
    White,
}

impl Channel {
    const fn mask(self) -> u8 {
        match self {
            Self::Red => 0b0001,
            Self::Green => 0b0010,
            Self::Blue => 0b0100,
            Self::White => 0b1000,
        }
    }

    const fn pick(self, color: Rgbw) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
            Self::White => color.w,
        }
    }
}

/// Order in which logical channels are put on the wire.
///
/// Entry `i` names the logical channel transmitted as byte `i` of a pixel. RGB devices
/// send only the first three entries.
///
/// ```
/// use pixel_led::config::{Channel, ChannelOrder};
/// use pixel_led::color::Rgbw;
///
/// const ORDER: ChannelOrder = ChannelOrder::GRBW;
/// assert_eq!(ORDER.channels()[0], Channel::Green);
/// assert_eq!(ORDER.apply(Rgbw::new(1, 2, 3, 4)), [2, 1, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelOrder([Channel; 4]);

impl ChannelOrder {
    /// Wire order of WS2812/SK6812 parts: green, red, blue, white.
    pub const GRBW: Self = Self::new([Channel::Green, Channel::Red, Channel::Blue, Channel::White]);
    /// Logical order unchanged.
    pub const RGBW: Self = Self::new([Channel::Red, Channel::Green, Channel::Blue, Channel::White]);

    /// Create a channel order.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in `const` context) unless every channel appears exactly
    /// once.
    #[must_use]
    pub const fn new(channels: [Channel; 4]) -> Self {
        let [first, second, third, fourth] = channels;
        let seen = first.mask() | second.mask() | third.mask() | fourth.mask();
        assert!(seen == 0b1111, "duplicate channel in channel order");
        Self(channels)
    }

    /// Channels in wire order.
    #[must_use]
    pub const fn channels(&self) -> [Channel; 4] {
        self.0
    }

    /// Reorder a color's channels into wire order.
    #[must_use]
    pub const fn apply(&self, color: Rgbw) -> [u8; 4] {
        let [first, second, third, fourth] = self.0;
        [
            first.pick(color),
            second.pick(color),
            third.pick(color),
            fourth.pick(color),
        ]
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        CHANNEL_ORDER_DEFAULT
    }
}

/// High/low pulse widths, in nanoseconds, of the single-wire bit stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    /// High time of a `0` bit.
    pub t0h_ns: u16,
    /// Low time of a `0` bit.
    pub t0l_ns: u16,
    /// High time of a `1` bit.
    pub t1h_ns: u16,
    /// Low time of a `1` bit.
    pub t1l_ns: u16,
}

impl TimingProfile {
    /// WS2812 timing: 400/850 ns for `0`, 800/450 ns for `1`.
    pub const WS2812: Self = Self::new(400, 850, 800, 450);

    /// Create a timing profile.
    #[must_use]
    pub const fn new(t0h_ns: u16, t0l_ns: u16, t1h_ns: u16, t1l_ns: u16) -> Self {
        Self {
            t0h_ns,
            t0l_ns,
            t1h_ns,
            t1l_ns,
        }
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        TIMING_DEFAULT
    }
}

/// Default channel order for new devices (`ChannelOrder::GRBW`).
pub const CHANNEL_ORDER_DEFAULT: ChannelOrder = ChannelOrder::GRBW;

/// Default bit timing for new devices (`TimingProfile::WS2812`).
pub const TIMING_DEFAULT: TimingProfile = TimingProfile::WS2812;

/// Default brightness for pixels written without an explicit one (`255`).
pub const BRIGHTNESS_DEFAULT: Brightness = Brightness::MAX;

/// Fixed per-device settings, chosen at construction.
///
/// ```
/// use pixel_led::config::{ChannelOrder, LedConfig};
///
/// const CONFIG: LedConfig = LedConfig::new(0)
///     .with_channel_order(ChannelOrder::RGBW)
///     .with_default_brightness(64);
/// assert_eq!(CONFIG.default_brightness.get(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// Data pin handed to the transmission sink.
    pub pin: u8,
    /// Wire order of the color channels.
    pub channel_order: ChannelOrder,
    /// Bit timing handed to the transmission sink.
    pub timing: TimingProfile,
    /// Initial default brightness.
    pub default_brightness: Brightness,
}

impl LedConfig {
    /// Configuration for `pin` with every other setting at its default.
    #[must_use]
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            channel_order: CHANNEL_ORDER_DEFAULT,
            timing: TIMING_DEFAULT,
            default_brightness: BRIGHTNESS_DEFAULT,
        }
    }

    /// Replace the channel order.
    #[must_use]
    pub const fn with_channel_order(mut self, channel_order: ChannelOrder) -> Self {
        self.channel_order = channel_order;
        self
    }

    /// Replace the bit timing.
    #[must_use]
    pub const fn with_timing(mut self, timing: TimingProfile) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the initial default brightness (clamped to `1..=255`).
    #[must_use]
    pub const fn with_default_brightness(mut self, brightness: u8) -> Self {
        self.default_brightness = Brightness::new(brightness);
        self
    }
}
