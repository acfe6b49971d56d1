//! Sprite records
//!
//! Decoded sprites travel together with their placement: an 8-byte geometry
//! header of four little-endian `u16` (x, y, width, height) followed by
//! `width * height` RGBA pixels.

use crate::palette::Color;
use crate::war::{WarError, WarResult};
use binrw::{BinRead, BinWrite};
use std::io::Cursor;

/// Size of the serialized geometry header
pub const SPRITE_HEADER_SIZE: usize = 8;

/// Sprite placement and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BinRead, BinWrite)]
#[brw(little)]
pub struct SpriteGeometry {
    /// Horizontal offset
    pub x: u16,
    /// Vertical offset
    pub y: u16,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl SpriteGeometry {
    /// Number of pixels covered
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Serialized record size for this geometry
    pub const fn record_size(&self) -> usize {
        self.pixel_count() * 4 + SPRITE_HEADER_SIZE
    }
}

/// Geometry plus owned pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRecord {
    /// Placement and size
    pub geometry: SpriteGeometry,
    /// Row-major RGBA pixels
    pub pixels: Vec<Color>,
}

impl SpriteRecord {
    /// Create a record, checking the pixel count against the geometry
    pub fn new(geometry: SpriteGeometry, pixels: Vec<Color>) -> WarResult<Self> {
        if pixels.len() != geometry.pixel_count() {
            return Err(WarError::SpriteSizeMismatch {
                expected: geometry.record_size(),
                actual: pixels.len() * 4 + SPRITE_HEADER_SIZE,
            });
        }
        Ok(Self { geometry, pixels })
    }

    /// Parse a serialized record
    pub fn from_bytes(data: &[u8]) -> WarResult<Self> {
        if data.len() < SPRITE_HEADER_SIZE {
            return Err(WarError::SpriteSizeMismatch {
                expected: SPRITE_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let geometry = SpriteGeometry::read(&mut Cursor::new(data))?;
        if geometry.record_size() != data.len() {
            return Err(WarError::SpriteSizeMismatch {
                expected: geometry.record_size(),
                actual: data.len(),
            });
        }

        let pixels = data[SPRITE_HEADER_SIZE..]
            .chunks_exact(4)
            .map(|p| Color::new(p[0], p[1], p[2], p[3]))
            .collect();

        Ok(Self { geometry, pixels })
    }

    /// Serialize the record
    pub fn to_bytes(&self) -> WarResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::with_capacity(self.geometry.record_size()));
        self.geometry.write(&mut out)?;
        let mut data = out.into_inner();
        for pixel in &self.pixels {
            data.extend_from_slice(&pixel.to_array());
        }
        Ok(data)
    }
}
