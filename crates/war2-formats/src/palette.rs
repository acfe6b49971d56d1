//! Palette conversion
//!
//! Archive palettes store 256 colors as 6-bit RGB triplets (768 bytes). They
//! are widened to 8 bits per channel by a left shift of two and made opaque.

use std::ops::Index;

/// Size in bytes of a raw palette
pub const RAW_PALETTE_SIZE: usize = 256 * 3;

/// 8-bit RGBA color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// 256 converted colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([Color; 256]);

impl Palette {
    /// Convert a raw 6-bit palette
    pub fn convert(raw: &[u8; RAW_PALETTE_SIZE]) -> Self {
        Self(std::array::from_fn(|i| {
            let p = &raw[i * 3..i * 3 + 3];
            Color::new(p[0] << 2, p[1] << 2, p[2] << 2, 0xff)
        }))
    }

    /// Convert the first 768 bytes of an archive entry
    ///
    /// Returns `None` when the entry is too short to hold a palette.
    pub fn from_entry(data: &[u8]) -> Option<Self> {
        let raw: &[u8; RAW_PALETTE_SIZE] = data.get(..RAW_PALETTE_SIZE)?.try_into().ok()?;
        Some(Self::convert(raw))
    }

    /// Colors in index order
    pub fn colors(&self) -> &[Color; 256] {
        &self.0
    }
}

impl Index<u8> for Palette {
    type Output = Color;

    fn index(&self, index: u8) -> &Color {
        &self.0[usize::from(index)]
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convert_known_values() {
        let mut raw = [0u8; RAW_PALETTE_SIZE];
        raw[0..3].copy_from_slice(&[0x3f, 0x00, 0x10]);
        raw[765..768].copy_from_slice(&[0x01, 0x02, 0x03]);

        let palette = Palette::convert(&raw);
        assert_eq!(palette[0], Color::new(0xfc, 0x00, 0x40, 0xff));
        assert_eq!(palette[255], Color::new(0x04, 0x08, 0x0c, 0xff));
    }

    #[test]
    fn test_from_entry_too_short() {
        assert!(Palette::from_entry(&[0u8; 767]).is_none());
        assert!(Palette::from_entry(&[0u8; 800]).is_some());
    }

    proptest! {
        #[test]
        fn prop_convert_law(raw in proptest::collection::vec(any::<u8>(), RAW_PALETTE_SIZE)) {
            let raw: [u8; RAW_PALETTE_SIZE] = raw.try_into().unwrap();
            let palette = Palette::convert(&raw);
            for (i, color) in palette.colors().iter().enumerate() {
                prop_assert_eq!(color.r, raw[i * 3] << 2);
                prop_assert_eq!(color.g, raw[i * 3 + 1] << 2);
                prop_assert_eq!(color.b, raw[i * 3 + 2] << 2);
                prop_assert_eq!(color.a, 0xff);
            }
        }
    }
}
