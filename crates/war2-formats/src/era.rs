//! Tileset eras

use std::fmt;

/// Terrain theme of a map, selecting which tileset backs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Forest
    Forest,
    /// Winter
    Winter,
    /// Wasteland
    Wasteland,
    /// Swamp
    Swamp,
}

impl Era {
    /// All eras in on-disk code order
    pub const ALL: [Self; 4] = [Self::Forest, Self::Winter, Self::Wasteland, Self::Swamp];

    /// Convert the `ERA `/`ERAX` section code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// On-disk code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forest => "Forest",
            Self::Winter => "Winter",
            Self::Wasteland => "Wasteland",
            Self::Swamp => "Swamp",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_codes() {
        for era in Era::ALL {
            assert_eq!(Era::from_code(era.code()), Some(era));
        }
        assert_eq!(Era::from_code(1), Some(Era::Winter));
        assert_eq!(Era::from_code(4), None);
    }

    #[test]
    fn test_era_names() {
        assert_eq!(Era::Wasteland.to_string(), "Wasteland");
        assert_eq!(Era::Swamp.name(), "Swamp");
    }
}
