//! Tileset decoding
//!
//! Each era names seven archive entries. The first four back the tileset:
//! the palette, the minitile offset table, the minitile pixel data and the
//! composition map. Every 32-byte block of the offset table describes one
//! 32x32 tile as a 4x4 grid of (possibly mirrored) 8x8 minitiles.
//!
//! Finished tiles are handed to a [`TileSink`] and never retained.

mod minitile;

pub use minitile::{
    MINITILE_BYTES, MINITILE_SIZE, MinitileRef, TILE_PIXELS, TILE_SIZE, blit, reflect,
};

use crate::era::Era;
use crate::palette::{Color, Palette};
use crate::sprite::{SpriteGeometry, SpriteRecord};
use crate::war::{WarArchive, WarError, WarResult};
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Bytes of offset table per composed tile
pub const OFFSET_BLOCK_SIZE: usize = 32;

/// Bytes per composition map chunk
pub const COMPOSITION_CHUNK_SIZE: usize = 42;

/// Archive entries backing an era's tileset
pub const fn era_entries(era: Era) -> [usize; 7] {
    match era {
        Era::Forest => [2, 3, 4, 5, 6, 7, 8],
        Era::Winter => [18, 19, 20, 21, 22, 23, 24],
        Era::Wasteland => [10, 11, 12, 13, 14, 15, 16],
        Era::Swamp => [438, 439, 440, 441, 442, 443, 444],
    }
}

/// The four entries the decoder consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetEntries {
    /// Raw palette
    pub palette: usize,
    /// Minitile offset table
    pub minitile_info: usize,
    /// Minitile pixel data
    pub minitile_data: usize,
    /// Composition map
    pub composition_map: usize,
}

impl TilesetEntries {
    /// Entries for an era
    pub const fn for_era(era: Era) -> Self {
        let e = era_entries(era);
        Self {
            palette: e[0],
            minitile_info: e[1],
            minitile_data: e[2],
            composition_map: e[3],
        }
    }
}

/// A finished 32x32 tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTile {
    /// 1-based sequence number
    pub number: usize,
    /// Row-major RGBA pixels
    pub pixels: Box<[Color; TILE_PIXELS]>,
}

impl DecodedTile {
    /// Convert into a sprite record placed at the origin
    pub fn into_sprite(self) -> SpriteRecord {
        SpriteRecord {
            geometry: SpriteGeometry {
                x: 0,
                y: 0,
                width: TILE_SIZE as u16,
                height: TILE_SIZE as u16,
            },
            pixels: self.pixels.to_vec(),
        }
    }
}

/// Receiver of decoded tiles
///
/// Returning [`ControlFlow::Break`] stops decoding after the current tile.
pub trait TileSink {
    /// Handle one finished tile
    fn tile(&mut self, tile: &DecodedTile) -> ControlFlow<()>;
}

impl<F> TileSink for F
where
    F: FnMut(&DecodedTile) -> ControlFlow<()>,
{
    fn tile(&mut self, tile: &DecodedTile) -> ControlFlow<()> {
        self(tile)
    }
}

impl TileSink for Vec<DecodedTile> {
    fn tile(&mut self, tile: &DecodedTile) -> ControlFlow<()> {
        self.push(tile.clone());
        ControlFlow::Continue(())
    }
}

/// Outcome of a tileset decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetDescriptor {
    /// Decoded era
    pub era: Era,
    /// Converted palette, `None` when decoding was skipped
    pub palette: Option<Palette>,
    /// Number of tiles handed to the sink
    pub tiles: usize,
}

/// Composition map entry, split into 42-byte chunks
#[derive(Debug, Clone, Copy)]
pub struct CompositionMap<'a> {
    data: &'a [u8],
}

impl<'a> CompositionMap<'a> {
    /// Wrap raw composition map bytes
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Number of complete chunks
    pub fn len(&self) -> usize {
        self.data.len() / COMPOSITION_CHUNK_SIZE
    }

    /// Whether the map holds no complete chunk
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The 16 words of each chunk; the trailing 10 bytes are ignored
    pub fn chunks(&self) -> impl Iterator<Item = [u16; 16]> + 'a {
        self.data
            .chunks_exact(COMPOSITION_CHUNK_SIZE)
            .map(|chunk| std::array::from_fn(|i| u16::from_le_bytes([chunk[i * 2], chunk[i * 2 + 1]])))
    }
}

/// Decode an era's tileset from an archive
///
/// Without a sink nothing is read and the descriptor reports zero tiles.
pub fn decode(
    archive: &WarArchive,
    era: Era,
    sink: Option<&mut dyn TileSink>,
) -> WarResult<TilesetDescriptor> {
    let Some(sink) = sink else {
        debug!("No tile sink given, skipping {} tileset", era);
        return Ok(TilesetDescriptor {
            era,
            palette: None,
            tiles: 0,
        });
    };

    let entries = TilesetEntries::for_era(era);
    debug!("Decoding {} tileset from entries {:?}", era, entries);

    let raw_palette = archive.entry(entries.palette)?;
    let palette = Palette::from_entry(raw_palette).ok_or(WarError::InvalidPalette {
        entry: entries.palette,
        size: raw_palette.len(),
    })?;

    let offsets = archive.extract(entries.minitile_info)?;
    let data = archive.extract(entries.minitile_data)?;
    let map = archive.extract(entries.composition_map)?;
    debug!(
        "Composition map has {} chunks",
        CompositionMap::new(&map).len()
    );

    let tiles = compose_tiles(&palette, &offsets, &data, sink)?;
    Ok(TilesetDescriptor {
        era,
        palette: Some(palette),
        tiles,
    })
}

/// Build tiles from already extracted buffers
///
/// Returns the number of tiles handed to the sink. A trailing partial block
/// of the offset table is ignored.
pub fn compose_tiles(
    palette: &Palette,
    offsets: &[u8],
    data: &[u8],
    sink: &mut dyn TileSink,
) -> WarResult<usize> {
    let mut emitted = 0;

    for (i, block) in offsets.chunks_exact(OFFSET_BLOCK_SIZE).enumerate() {
        let mut pixels = Box::new([Color::default(); TILE_PIXELS]);
        for (slot, word) in block.chunks_exact(2).enumerate() {
            let minitile = MinitileRef::from_word(u16::from_le_bytes([word[0], word[1]]));
            blit(minitile, slot, data, palette, &mut pixels)?;
        }

        let tile = DecodedTile {
            number: i + 1,
            pixels,
        };
        emitted += 1;
        trace!("Tile {} decoded", tile.number);

        if sink.tile(&tile).is_break() {
            debug!("Tile sink stopped decoding after tile {}", tile.number);
            break;
        }
    }

    Ok(emitted)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::palette::RAW_PALETTE_SIZE;

    fn gray_palette() -> Palette {
        let mut raw = [0u8; RAW_PALETTE_SIZE];
        for i in 0..64 {
            raw[i * 3..i * 3 + 3].fill(i as u8);
        }
        Palette::convert(&raw)
    }

    fn words(words: &[u16]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn test_era_table() {
        assert_eq!(era_entries(Era::Forest)[0], 2);
        assert_eq!(era_entries(Era::Wasteland)[3], 13);
        assert_eq!(era_entries(Era::Winter), [18, 19, 20, 21, 22, 23, 24]);
        assert_eq!(
            TilesetEntries::for_era(Era::Swamp),
            TilesetEntries {
                palette: 438,
                minitile_info: 439,
                minitile_data: 440,
                composition_map: 441,
            }
        );
    }

    #[test]
    fn test_compose_counts_and_numbers() {
        let palette = gray_palette();
        let data = vec![1u8; MINITILE_BYTES];
        // three full blocks plus a trailing partial one
        let mut offsets = words(&[0; 48]);
        offsets.extend_from_slice(&[0, 0, 0]);

        let mut tiles: Vec<DecodedTile> = Vec::new();
        let count = compose_tiles(&palette, &offsets, &data, &mut tiles).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            tiles.iter().map(|t| t.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(tiles[0].pixels.iter().all(|&c| c == palette[1]));
    }

    #[test]
    fn test_compose_places_slots() {
        let palette = gray_palette();
        // minitile 0 all index 0, minitile 1 all index 9
        let mut data = vec![0u8; MINITILE_BYTES];
        data.extend(std::iter::repeat_n(9u8, MINITILE_BYTES));

        let mut block = [0u16; 16];
        block[6] = 1 << 2; // column 2, row 1
        let offsets = words(&block);

        let mut tiles: Vec<DecodedTile> = Vec::new();
        compose_tiles(&palette, &offsets, &data, &mut tiles).unwrap();

        let px = |x: usize, y: usize| tiles[0].pixels[x + TILE_SIZE * y];
        assert_eq!(px(16, 8), palette[9]);
        assert_eq!(px(23, 15), palette[9]);
        assert_eq!(px(24, 8), palette[0]);
        assert_eq!(px(16, 16), palette[0]);
    }

    #[test]
    fn test_sink_break_stops() {
        let palette = gray_palette();
        let data = vec![0u8; MINITILE_BYTES];
        let offsets = words(&[0; 64]);

        let mut seen = Vec::new();
        let mut sink = |tile: &DecodedTile| {
            seen.push(tile.number);
            if tile.number == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let count = compose_tiles(&palette, &offsets, &data, &mut sink).unwrap();
        assert_eq!(count, 2);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_compose_out_of_bounds_minitile() {
        let palette = gray_palette();
        let offsets = words(&[0x0100; 16]);
        let mut tiles: Vec<DecodedTile> = Vec::new();
        let err = compose_tiles(&palette, &offsets, &[0u8; 64], &mut tiles).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(tiles.is_empty());
    }

    #[test]
    fn test_composition_chunks() {
        let mut raw = words(&[7; 16]);
        raw.extend_from_slice(&[0xaa; 10]);
        raw.extend_from_slice(&[0; 5]);
        let map = CompositionMap::new(&raw);
        assert_eq!(map.len(), 1);
        let chunks: Vec<_> = map.chunks().collect();
        assert_eq!(chunks, vec![[7u16; 16]]);
    }

    #[test]
    fn test_tile_into_sprite() {
        let tile = DecodedTile {
            number: 1,
            pixels: Box::new([Color::new(1, 2, 3, 4); TILE_PIXELS]),
        };
        let sprite = tile.into_sprite();
        assert_eq!(sprite.geometry.width, 32);
        assert_eq!(sprite.geometry.record_size(), 32 * 32 * 4 + 8);
        assert_eq!(sprite.pixels.len(), TILE_PIXELS);
    }
}
