//! Minitile references and blitting
//!
//! A minitile is an 8x8 block of palette indices. Offset table words address
//! one as `(index << 2) | flip_x << 1 | flip_y`; its pixels start at byte
//! `(word & 0xfffc) * 16` of the minitile data entry.

use crate::palette::{Color, Palette};
use crate::war::{WarError, WarResult};

/// Minitile edge length in pixels
pub const MINITILE_SIZE: usize = 8;

/// Bytes of pixel data per minitile
pub const MINITILE_BYTES: usize = MINITILE_SIZE * MINITILE_SIZE;

/// Composed tile edge length in pixels
pub const TILE_SIZE: usize = 32;

/// Pixels in a composed tile
pub const TILE_PIXELS: usize = TILE_SIZE * TILE_SIZE;

/// Minitiles per composed tile row
const SLOTS_PER_ROW: usize = TILE_SIZE / MINITILE_SIZE;

/// Reflect a minitile coordinate across the block midpoint when `flip` is set
pub const fn reflect(i: usize, flip: bool) -> usize {
    if flip { MINITILE_SIZE - 1 - i } else { i }
}

/// Decoded offset table word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinitileRef {
    /// Minitile index into the pixel data
    pub index: u16,
    /// Mirror on the x axis
    pub flip_x: bool,
    /// Mirror on the y axis
    pub flip_y: bool,
}

impl MinitileRef {
    /// Decode an offset table word
    pub const fn from_word(word: u16) -> Self {
        Self {
            index: word >> 2,
            flip_x: word & 0b10 != 0,
            flip_y: word & 0b01 != 0,
        }
    }

    /// Encode back into an offset table word
    pub const fn to_word(self) -> u16 {
        (self.index << 2) | ((self.flip_x as u16) << 1) | self.flip_y as u16
    }

    /// Byte offset of the minitile's first pixel
    pub const fn base_offset(self) -> usize {
        self.index as usize * MINITILE_BYTES
    }

    /// Source pixel offset for output coordinate `(x, y)` within the minitile
    pub const fn source_offset(self, x: usize, y: usize) -> usize {
        self.base_offset() + reflect(x, self.flip_x) + reflect(y, self.flip_y) * MINITILE_SIZE
    }
}

/// Copy one minitile into `slot` (0..16) of a composed tile
pub fn blit(
    minitile: MinitileRef,
    slot: usize,
    data: &[u8],
    palette: &Palette,
    tile: &mut [Color; TILE_PIXELS],
) -> WarResult<()> {
    let base = minitile.base_offset();
    if base + MINITILE_BYTES > data.len() {
        return Err(WarError::MinitileOutOfBounds {
            offset: base,
            len: data.len(),
        });
    }

    let x0 = (slot % SLOTS_PER_ROW) * MINITILE_SIZE;
    let y0 = (slot / SLOTS_PER_ROW) * MINITILE_SIZE;

    for y in 0..MINITILE_SIZE {
        for x in 0..MINITILE_SIZE {
            let index = data[minitile.source_offset(x, y)];
            tile[(x0 + x) + TILE_SIZE * (y0 + y)] = palette[index];
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::palette::RAW_PALETTE_SIZE;
    use proptest::prelude::*;

    fn identity_palette() -> Palette {
        // index i -> red channel i (fits for i < 64)
        let mut raw = [0u8; RAW_PALETTE_SIZE];
        for i in 0..64 {
            raw[i * 3] = i as u8;
        }
        Palette::convert(&raw)
    }

    #[test]
    fn test_word_decoding() {
        let r = MinitileRef::from_word(0x0013);
        assert_eq!(r.index, 4);
        assert!(r.flip_x);
        assert!(r.flip_y);
        assert_eq!(r.base_offset(), (0x0013 & 0xfffc) * 16);
        assert_eq!(r.to_word(), 0x0013);

        let r = MinitileRef::from_word(0x0002);
        assert!(r.flip_x);
        assert!(!r.flip_y);
    }

    #[test]
    fn test_blit_placement_and_flip() {
        let palette = identity_palette();
        let data: Vec<u8> = (0..64u8).collect();
        let mut tile = [Color::default(); TILE_PIXELS];

        // slot 5 = column 1, row 1; mirrored on x
        blit(MinitileRef::from_word(0b10), 5, &data, &palette, &mut tile).unwrap();

        let at = |x: usize, y: usize| tile[x + TILE_SIZE * y].r >> 2;
        assert_eq!(at(8, 8), 7);
        assert_eq!(at(15, 8), 0);
        assert_eq!(at(8, 9), 15);
        assert_eq!(tile[0], Color::default());
    }

    #[test]
    fn test_blit_flip_y() {
        let palette = identity_palette();
        let data: Vec<u8> = (0..64u8).collect();
        let mut tile = [Color::default(); TILE_PIXELS];

        blit(MinitileRef::from_word(0b01), 0, &data, &palette, &mut tile).unwrap();

        let at = |x: usize, y: usize| tile[x + TILE_SIZE * y].r >> 2;
        assert_eq!(at(0, 0), 56);
        assert_eq!(at(7, 0), 63);
        assert_eq!(at(0, 7), 0);
        assert_eq!(at(7, 7), 7);
    }

    #[test]
    fn test_blit_flip_both_axes() {
        let palette = identity_palette();
        let data: Vec<u8> = (0..64u8).collect();
        let mut tile = [Color::default(); TILE_PIXELS];

        // slot 15 = column 3, row 3
        blit(MinitileRef::from_word(0b11), 15, &data, &palette, &mut tile).unwrap();

        let at = |x: usize, y: usize| tile[x + TILE_SIZE * y].r >> 2;
        assert_eq!(at(24, 24), 63);
        assert_eq!(at(31, 24), 56);
        assert_eq!(at(24, 31), 7);
        assert_eq!(at(31, 31), 0);
        assert_eq!(at(25, 26), 46);
    }

    #[test]
    fn test_blit_out_of_bounds() {
        let palette = identity_palette();
        let mut tile = [Color::default(); TILE_PIXELS];
        let err = blit(MinitileRef::from_word(1 << 2), 0, &[0u8; 64], &palette, &mut tile)
            .unwrap_err();
        assert!(err.is_bounds_error());
    }

    proptest! {
        #[test]
        fn prop_reflect_is_involution(i in 0usize..8, flip in any::<bool>()) {
            prop_assert_eq!(reflect(reflect(i, flip), flip), i);
            prop_assert!(reflect(i, flip) < MINITILE_SIZE);
        }

        #[test]
        fn prop_word_round_trip(word in any::<u16>()) {
            prop_assert_eq!(MinitileRef::from_word(word).to_word(), word);
        }
    }
}
