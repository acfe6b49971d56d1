//! Upgrade catalog, indexed by upgrade id

use super::icon::Icon;

/// Number of upgrades
pub const UPGRADE_SLOTS: usize = 52;

/// Static description of an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeInfo {
    /// Display name
    pub name: &'static str,
    /// Icon
    pub icon: Icon,
}

const fn upgrade(name: &'static str, icon: Icon) -> UpgradeInfo {
    UpgradeInfo { name, icon }
}

/// All upgrades
pub static UPGRADES: [UpgradeInfo; UPGRADE_SLOTS] = [
    upgrade("Human Swords (+1)", Icon::Sword1),
    upgrade("Human Swords (+2)", Icon::Sword2),
    upgrade("Orc Axes (+1)", Icon::Axe1),
    upgrade("Orc Axes (+2)", Icon::Axe2),
    upgrade("Human Arrows (+1)", Icon::Arrow1),
    upgrade("Human Arrows (+2)", Icon::Arrow2),
    upgrade("Orc Spears (+1)", Icon::Spear1),
    upgrade("Orc Spears (+2)", Icon::Spear2),
    upgrade("Human Shields (+1)", Icon::HumanShield1),
    upgrade("Human Shields (+2)", Icon::HumanShield2),
    upgrade("Orc Shields (+1)", Icon::OrcShield1),
    upgrade("Orc Shields (+2)", Icon::OrcShield2),
    upgrade("Human Ship Cannons (+1)", Icon::HumanShipCannon1),
    upgrade("Human Ship Cannons (+2)", Icon::HumanShipCannon2),
    upgrade("Orc Ship Cannons (+1)", Icon::OrcShipCannon1),
    upgrade("Orc Ship Cannons (+2)", Icon::OrcShipCannon2),
    upgrade("Human Ship Armors (+1)", Icon::HumanShipArmor1),
    upgrade("Human Ship Armors (+2)", Icon::HumanShipArmor2),
    upgrade("Orc Ship Armors (+1)", Icon::OrcShipArmor1),
    upgrade("Orc Ship Armors (+2)", Icon::OrcShipArmor2),
    upgrade("Catapult Projectiles (+1)", Icon::Catapult1),
    upgrade("Catapult Projectiles (+2)", Icon::Catapult2),
    upgrade("Ballista Projectiles (+1)", Icon::Ballista1),
    upgrade("Ballista Projectiles (+2)", Icon::Ballista2),
    upgrade("Train Rangers", Icon::TrainRangers),
    upgrade("Long Bow", Icon::Longbow),
    upgrade("Elven Scouting", Icon::RangerScouting),
    upgrade("Marksmanship", Icon::RangerMarksmanship),
    upgrade("Train Berserkers", Icon::TrainBerserkers),
    upgrade("Lighter Axes", Icon::LighterAxes),
    upgrade("Berserker Scouting", Icon::BerserkerScouting),
    upgrade("Berserker Regeneration", Icon::BerserkerRegeneration),
    upgrade("Train Ogre Mages", Icon::TrainOgreMages),
    upgrade("Train Paladins", Icon::TrainPaladins),
    upgrade("Holy Vision", Icon::HolyVision),
    upgrade("Healing", Icon::Healing),
    upgrade("Exorcism", Icon::Exorcism),
    upgrade("Flame Shield", Icon::FlameShield),
    upgrade("Fireball", Icon::Fireball),
    upgrade("Slow", Icon::Slow),
    upgrade("Invisibility", Icon::Invisibility),
    upgrade("Polymorph", Icon::Polymorph),
    upgrade("Blizzard", Icon::Blizzard),
    upgrade("Eye of Kilrogg", Icon::EyeOfKilrogg),
    upgrade("Bloodlust", Icon::Bloodlust),
    upgrade("Raise Dead", Icon::RaiseDead),
    upgrade("Death Coil", Icon::DeathCoil),
    upgrade("Whirlwind", Icon::Whirlwind),
    upgrade("Haste", Icon::Haste),
    upgrade("Unholy Armor", Icon::UnholyArmor),
    upgrade("Runes", Icon::Runes),
    upgrade("Death and Decay", Icon::DeathAndDecay),
];

/// Look up an upgrade
pub fn upgrade_info(id: u8) -> Option<&'static UpgradeInfo> {
    UPGRADES.get(usize::from(id))
}

/// Display name of an upgrade
pub fn upgrade_name(id: u8) -> Option<&'static str> {
    upgrade_info(id).map(|u| u.name)
}

/// Icon of an upgrade
pub fn upgrade_icon(id: u8) -> Option<Icon> {
    upgrade_info(id).map(|u| u.icon)
}
