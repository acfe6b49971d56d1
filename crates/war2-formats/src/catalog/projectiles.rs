//! Projectile names, indexed by missile id

/// Number of projectiles
pub const PROJECTILE_SLOTS: usize = 30;

/// All projectile names
pub static PROJECTILES: [&str; PROJECTILE_SLOTS] = [
    "Lightning",
    "Griffon Hammer",
    "Dragon Breath",
    "Flame Shield",
    "Flame Shield (Self)",
    "Blizzard",
    "Death and Decay",
    "Big Cannon",
    "Black Powder",
    "Heal Effect",
    "Touch of Death",
    "Rune",
    "Tornado",
    "Catapult Rock",
    "Ballista Bolt",
    "Arrow",
    "Axe",
    "Submarine Missile",
    "Turtle Missile",
    "Dark Flame",
    "Bright Flame",
    "Blood",
    "More Black Powder",
    "Explosion",
    "Small Cannon",
    "Metal Spark",
    "Mini Explosion",
    "Daemon Fire",
    "Green Cross",
    "None",
];

/// Name of a projectile
pub fn projectile_name(id: u8) -> Option<&'static str> {
    PROJECTILES.get(usize::from(id)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_lookup() {
        assert_eq!(projectile_name(0x00), Some("Lightning"));
        assert_eq!(projectile_name(0x0f), Some("Arrow"));
        assert_eq!(projectile_name(0x1d), Some("None"));
        assert_eq!(projectile_name(0x1e), None);
    }
}
