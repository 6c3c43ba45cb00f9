//! Pixel - a packed color sample
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB), the same
//! layout for every canvas regardless of samples per pixel:
//!
//! - 1 spp (gray): `r == g == b == value`, alpha 255
//! - 3 spp (RGB): alpha 255
//! - 4 spp (RGBA): alpha as decoded
//!
//! Equality is exact per-channel equality of the packed word.

/// Channel indices into [`Pixel::channels`]
pub mod channel {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;
}

const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;
const ALPHA_SHIFT: u32 = 0;

/// A single packed RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(u32);

impl Pixel {
    /// Opaque white.
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);

    /// Compose an opaque RGB pixel (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Pixel(
            ((r as u32) << RED_SHIFT)
                | ((g as u32) << GREEN_SHIFT)
                | ((b as u32) << BLUE_SHIFT)
                | (255 << ALPHA_SHIFT),
        )
    }

    /// Compose an RGBA pixel.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel(
            ((r as u32) << RED_SHIFT)
                | ((g as u32) << GREEN_SHIFT)
                | ((b as u32) << BLUE_SHIFT)
                | ((a as u32) << ALPHA_SHIFT),
        )
    }

    /// Compose an opaque gray pixel.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Pixel::rgb(value, value, value)
    }

    /// Build a pixel from 1, 3 or 4 channel intensities.
    ///
    /// Returns `None` for any other channel count.
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match *channels {
            [v] => Some(Pixel::gray(v)),
            [r, g, b] => Some(Pixel::rgb(r, g, b)),
            [r, g, b, a] => Some(Pixel::rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// The packed `0xRRGGBBAA` word.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red component.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> RED_SHIFT) & 0xff) as u8
    }

    /// Green component.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Alpha component.
    #[inline]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// All four channels in `[r, g, b, a]` order.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// The same color with alpha forced to 255.
    #[inline]
    pub const fn opaque(self) -> Self {
        Pixel(self.0 | 0xff)
    }

    /// Largest absolute per-channel difference between two pixels.
    ///
    /// Alpha participates, so an RGBA canvas should be normalized before
    /// comparing colors that only differ in translucency.
    pub fn max_channel_diff(self, other: Pixel) -> u8 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&a, &b)| a.abs_diff(b))
            .max()
            .unwrap_or(0)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Pixel::rgba(r, g, b, a)
    }
}

impl std::fmt::Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}
