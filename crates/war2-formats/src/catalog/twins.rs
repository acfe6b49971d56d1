//! Allowance bit catalogs
//!
//! Each allow-flag bit grants one faction-paired ("twin") unit, spell or
//! upgrade. Reserved bits have no entry.

use super::icon::Icon;

/// Bits in a unit allow-flag
pub const UNIT_TWIN_SLOTS: usize = 32;

/// Bits in a spell allow-flag that carry a spell
pub const SPELL_TWIN_SLOTS: usize = 20;

/// Bits in an upgrade allow-flag that carry an upgrade
pub const UPGRADE_TWIN_SLOTS: usize = 20;

/// Human/orc pair granted by one allow bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwinEntry {
    /// Display name of the pair
    pub name: &'static str,
    /// Human and orc icons
    pub icons: [Icon; 2],
}

/// Spell granted by one allow bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellEntry {
    /// Display name
    pub name: &'static str,
    /// Icon
    pub icon: Icon,
}

const fn twin(name: &'static str, human: Icon, orc: Icon) -> Option<TwinEntry> {
    Some(TwinEntry {
        name,
        icons: [human, orc],
    })
}

const fn spell(name: &'static str, icon: Icon) -> Option<SpellEntry> {
    Some(SpellEntry { name, icon })
}

/// Unit allowances by bit position
pub static UNIT_TWINS: [Option<TwinEntry>; UNIT_TWIN_SLOTS] = [
    twin("Footman / Grunt", Icon::Footman, Icon::Grunt),
    twin("Peasant / Peon", Icon::Peasant, Icon::Peon),
    twin("Ballista / Catapult", Icon::Ballista, Icon::Catapult),
    twin("Knight / Ogre", Icon::Knight, Icon::Ogre),
    twin("Archer / Axethrower", Icon::Archer, Icon::Axethrower),
    twin("Mage / Death Knight", Icon::Mage, Icon::DeathKnight),
    twin("Human Tanker / Orc Tanker", Icon::HumanTanker, Icon::OrcTanker),
    twin("Elven Destroyer / Troll Destroyer", Icon::ElvenDestroyer, Icon::TrollDestroyer),
    twin("Human Transport / Orc Transport", Icon::HumanTransport, Icon::OrcTransport),
    twin("Battleship / Juggernaught", Icon::Battleship, Icon::Juggernaught),
    twin("Gnomish Submarine / Giant Turtle", Icon::GnomishSubmarine, Icon::GiantTurtle),
    twin("Gnomish Flying Machine / Goblin Zepplin", Icon::GnomishFlyingMachine, Icon::GoblinZepplin),
    twin("Gryphon Rider / Dragon", Icon::GryphonRider, Icon::Dragon),
    None,
    twin("Dwarven Demolition Squad / Goblin Sapper", Icon::Dwarves, Icon::GoblinSapper),
    twin("Gryphon Aviary / Dragon Roost", Icon::GryphonAviary, Icon::DragonRoost),
    twin("Farm / Pig Farm", Icon::Farm, Icon::PigFarm),
    twin("Human Barracks / Orc Barracks", Icon::HumanBarracks, Icon::OrcBarracks),
    twin("Elven Lumber Mill / Troll Lumber Mill", Icon::ElvenLumberMill, Icon::TrollLumberMill),
    twin("Stables / Ogre Mound", Icon::Stables, Icon::OgreMound),
    twin("Mage Tower / Temple of the Damned", Icon::MageTower, Icon::TempleOfTheDamned),
    twin("Human Foundry / Orc Foundry", Icon::HumanFoundry, Icon::OrcFoundry),
    twin("Human Refinery / Orc Refinery", Icon::HumanRefinery, Icon::OrcRefinery),
    twin("Gnomish Inventor / Goblin Alchemist", Icon::GnomishInventor, Icon::GoblinAlchemist),
    twin("Church / Altar of Storms", Icon::Church, Icon::AltarOfStorms),
    twin("Human Scout Tower / Orc Scout Tower", Icon::HumanScoutTower, Icon::OrcScoutTower),
    twin("Town Hall / Great Hall", Icon::TownHall, Icon::GreatHall),
    twin("Keep / Stronghold", Icon::Keep, Icon::Stronghold),
    twin("Castle / Fortress", Icon::Castle, Icon::Fortress),
    twin("Human Blacksmith / Orc Blacksmith", Icon::HumanBlacksmith, Icon::OrcBlacksmith),
    twin("Human Shipyard / Orc Shipyard", Icon::HumanShipyard, Icon::OrcShipyard),
    None,
];

/// Spell allowances by bit position
pub static SPELL_TWINS: [Option<SpellEntry>; SPELL_TWIN_SLOTS] = [
    spell("Holy Vision", Icon::HolyVision),
    spell("Healing", Icon::Healing),
    None,
    spell("Exorcism", Icon::Exorcism),
    spell("Flame Shield", Icon::FlameShield),
    spell("Fireball", Icon::Fireball),
    spell("Slow", Icon::Slow),
    spell("Invisibility", Icon::Invisibility),
    spell("Polymorph", Icon::Polymorph),
    spell("Blizzard", Icon::Blizzard),
    spell("Eye of Kilrogg", Icon::EyeOfKilrogg),
    spell("Bloodlust", Icon::Bloodlust),
    None,
    spell("Raise Dead", Icon::RaiseDead),
    spell("Death Coil", Icon::DeathCoil),
    spell("Whirlwind", Icon::Whirlwind),
    spell("Haste", Icon::Haste),
    spell("Unholy Armor", Icon::UnholyArmor),
    spell("Runes", Icon::Runes),
    spell("Death and Decay", Icon::DeathAndDecay),
];

/// Upgrade allowances by bit position
pub static UPGRADE_TWINS: [Option<TwinEntry>; UPGRADE_TWIN_SLOTS] = [
    twin("Human Arrows / Orc Spears (+1)", Icon::Arrow1, Icon::Spear1),
    twin("Human Arrows / Orc Spears (+2)", Icon::Arrow2, Icon::Spear2),
    twin("Human Swords / Orc Axes (+1)", Icon::Sword1, Icon::Axe1),
    twin("Human Swords / Orc Axes (+2)", Icon::Sword2, Icon::Axe2),
    twin("Human Shields / Orc Shields (+1)", Icon::HumanShield1, Icon::OrcShield1),
    twin("Human Shields / Orc Shields (+2)", Icon::HumanShield2, Icon::OrcShield2),
    twin("Human Ship Cannons / Orc Ship Cannons (+1)", Icon::HumanShipCannon1, Icon::OrcShipCannon1),
    twin("Human Ship Cannons / Orc Ship Cannons (+2)", Icon::HumanShipCannon2, Icon::OrcShipCannon2),
    twin("Human Ship Armor / Orc Ship Armor (+1)", Icon::HumanShipArmor1, Icon::OrcShipArmor1),
    twin("Human Ship Armor / Orc Ship Armor (+2)", Icon::HumanShipArmor2, Icon::OrcShipArmor2),
    None,
    None,
    twin("Ballista Projectiles / Catapult Projectiles (+1)", Icon::Ballista1, Icon::Catapult1),
    twin("Ballista Projectiles / Catapult Projectiles (+2)", Icon::Ballista2, Icon::Catapult2),
    None,
    None,
    twin("Rangers / Berserkers", Icon::TrainRangers, Icon::TrainBerserkers),
    twin("Long Bow / Lighter Axes", Icon::Longbow, Icon::LighterAxes),
    twin("Elven Scouting / Berserker Scouting", Icon::RangerScouting, Icon::BerserkerScouting),
    twin("Marksmanship / Regeneration", Icon::RangerMarksmanship, Icon::BerserkerRegeneration),
];

/// Unit pair at a bit position
pub fn unit_twin(slot: usize) -> Option<&'static TwinEntry> {
    UNIT_TWINS.get(slot)?.as_ref()
}

/// Spell at a bit position
pub fn spell_twin(slot: usize) -> Option<&'static SpellEntry> {
    SPELL_TWINS.get(slot)?.as_ref()
}

/// Upgrade pair at a bit position
pub fn upgrade_twin(slot: usize) -> Option<&'static TwinEntry> {
    UPGRADE_TWINS.get(slot)?.as_ref()
}
