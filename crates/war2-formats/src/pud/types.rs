//! Typed map fields

use crate::palette::Color;
use std::fmt;
use std::ops::Index;

/// Number of player slots in every per-player section
pub const PLAYER_SLOTS: usize = 16;

/// Per-player values: 8 players, 7 unusable slots, 1 neutral slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSlots<T>(pub [T; PLAYER_SLOTS]);

impl<T: Copy + Default> Default for PlayerSlots<T> {
    fn default() -> Self {
        Self([T::default(); PLAYER_SLOTS])
    }
}

impl<T> PlayerSlots<T> {
    /// Same value in every slot
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; PLAYER_SLOTS])
    }

    /// The eight playable slots
    pub fn players(&self) -> &[T] {
        &self.0[..8]
    }

    /// The seven unusable slots
    pub fn unusable(&self) -> &[T] {
        &self.0[8..15]
    }

    /// The neutral slot
    pub fn neutral(&self) -> &T {
        &self.0[15]
    }

    /// All sixteen slots
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Convert every slot
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> PlayerSlots<U> {
        PlayerSlots(std::array::from_fn(|i| f(&self.0[i])))
    }
}

impl<T> Index<usize> for PlayerSlots<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

/// Allowed map sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// 32 x 32
    Small,
    /// 64 x 64
    Medium,
    /// 96 x 96
    Large,
    /// 128 x 128
    Huge,
}

impl Dimensions {
    /// Map a declared size; only the four square sizes are valid
    pub const fn from_size(width: u16, height: u16) -> Option<Self> {
        match (width, height) {
            (32, 32) => Some(Self::Small),
            (64, 64) => Some(Self::Medium),
            (96, 96) => Some(Self::Large),
            (128, 128) => Some(Self::Huge),
            _ => None,
        }
    }

    /// Edge length in tiles
    pub const fn edge(self) -> usize {
        match self {
            Self::Small => 32,
            Self::Medium => 64,
            Self::Large => 96,
            Self::Huge => 128,
        }
    }

    /// Width and height in tiles
    pub const fn size(self) -> (usize, usize) {
        (self.edge(), self.edge())
    }

    /// Number of tiles
    pub const fn tile_count(self) -> usize {
        self.edge() * self.edge()
    }

    /// Display label, "UNDEFINED" when unknown
    pub const fn label(dims: Option<Self>) -> &'static str {
        match dims {
            None => "UNDEFINED",
            Some(Self::Small) => "32 x 32",
            Some(Self::Medium) => "64 x 64",
            Some(Self::Large) => "96 x 96",
            Some(Self::Huge) => "128 x 128",
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::label(Some(*self)))
    }
}

/// Controller of a player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Passive computer
    PassiveComputer,
    /// Computer
    Computer,
    /// Human player
    Human,
    /// Passive rescuable
    RescuePassive,
    /// Active rescuable
    RescueActive,
    /// Nobody
    Nobody,
}

impl Owner {
    /// Convert an `OWNR` code
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x01 | 0x04 => Self::Computer,
            0x03 => Self::Nobody,
            0x05 => Self::Human,
            0x06 => Self::RescuePassive,
            0x07 => Self::RescueActive,
            _ => Self::PassiveComputer,
        }
    }
}

/// Race of a player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human
    Human,
    /// Orc
    Orc,
    /// Neutral
    Neutral,
}

impl Side {
    /// Convert a `SIDE` code
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Human,
            0x01 => Self::Orc,
            _ => Self::Neutral,
        }
    }
}

/// Player colors, by player index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1
    Red,
    /// Player 2
    Blue,
    /// Player 3
    Green,
    /// Player 4
    Violet,
    /// Player 5
    Orange,
    /// Player 6
    Black,
    /// Player 7
    White,
    /// Player 8
    Yellow,
}

/// Color drawn for an out-of-range player
pub const INVALID_PLAYER_COLOR: Color = Color::new(0x7f, 0x7f, 0x7f, 0xff);

impl Player {
    /// All players in index order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Violet,
        Self::Orange,
        Self::Black,
        Self::White,
        Self::Yellow,
    ];

    /// Player for a zero-based index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Color name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Violet => "Violet",
            Self::Orange => "Orange",
            Self::Black => "Black",
            Self::White => "White",
            Self::Yellow => "Yellow",
        }
    }

    /// Opaque RGBA color
    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::new(0xc0, 0x00, 0x00, 0xff),
            Self::Blue => Color::new(0x00, 0x00, 0xc0, 0xff),
            Self::Green => Color::new(0x00, 0xff, 0x00, 0xff),
            Self::Violet => Color::new(0x80, 0x00, 0xc0, 0xff),
            Self::Orange => Color::new(0xff, 0x80, 0x00, 0xff),
            Self::Black => Color::new(0x00, 0x00, 0x00, 0xff),
            Self::White => Color::new(0xff, 0xff, 0xff, 0xff),
            Self::Yellow => Color::new(0xff, 0xd0, 0x00, 0xff),
        }
    }
}

/// Color for a player index, gray when out of range
pub fn player_color(index: u8) -> Color {
    Player::from_index(index).map_or(INVALID_PLAYER_COLOR, Player::color)
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(Dimensions::from_size(32, 32), Some(Dimensions::Small));
        assert_eq!(Dimensions::from_size(64, 64), Some(Dimensions::Medium));
        assert_eq!(Dimensions::from_size(96, 96), Some(Dimensions::Large));
        assert_eq!(Dimensions::from_size(128, 128), Some(Dimensions::Huge));
        assert_eq!(Dimensions::from_size(32, 64), None);
        assert_eq!(Dimensions::from_size(0, 0), None);
        assert_eq!(Dimensions::Large.size(), (96, 96));
        assert_eq!(Dimensions::Huge.to_string(), "128 x 128");
        assert_eq!(Dimensions::label(None), "UNDEFINED");
    }

    #[test]
    fn test_owner_codes() {
        assert_eq!(Owner::from_code(0x00), Owner::PassiveComputer);
        assert_eq!(Owner::from_code(0x02), Owner::PassiveComputer);
        assert_eq!(Owner::from_code(0xff), Owner::PassiveComputer);
        assert_eq!(Owner::from_code(0x01), Owner::Computer);
        assert_eq!(Owner::from_code(0x04), Owner::Computer);
        assert_eq!(Owner::from_code(0x03), Owner::Nobody);
        assert_eq!(Owner::from_code(0x05), Owner::Human);
        assert_eq!(Owner::from_code(0x06), Owner::RescuePassive);
        assert_eq!(Owner::from_code(0x07), Owner::RescueActive);
    }

    #[test]
    fn test_side_codes() {
        assert_eq!(Side::from_code(0), Side::Human);
        assert_eq!(Side::from_code(1), Side::Orc);
        assert_eq!(Side::from_code(2), Side::Neutral);
    }

    #[test]
    fn test_player_slots() {
        let slots = PlayerSlots(std::array::from_fn(|i| i as u8));
        assert_eq!(slots.players(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(slots.unusable().len(), 7);
        assert_eq!(*slots.neutral(), 15);
        assert_eq!(slots.map(|&c| Side::from_code(c))[1], Side::Orc);
    }

    #[test]
    fn test_player_colors() {
        assert_eq!(Player::from_index(3), Some(Player::Violet));
        assert_eq!(player_color(0), Color::new(0xc0, 0, 0, 0xff));
        assert_eq!(player_color(8), INVALID_PLAYER_COLOR);
        assert_eq!(Player::Yellow.to_string(), "Yellow");
    }
}
