//! Unit catalog, indexed by unit type id

use super::icon::Icon;

/// Number of unit type slots
pub const UNIT_SLOTS: usize = 110;

/// Static description of a unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    /// Machine name
    pub name: &'static str,
    /// Display name
    pub pretty: &'static str,
    /// Icon
    pub icon: Icon,
    /// Named hero unit
    pub hero: bool,
}

const fn regular(name: &'static str, pretty: &'static str, icon: Icon) -> Option<UnitInfo> {
    Some(UnitInfo {
        name,
        pretty,
        icon,
        hero: false,
    })
}

const fn hero(name: &'static str, pretty: &'static str, icon: Icon) -> Option<UnitInfo> {
    Some(UnitInfo {
        name,
        pretty,
        icon,
        hero: true,
    })
}

/// All unit slots; `None` marks ids with no unit
pub static UNITS: [Option<UnitInfo>; UNIT_SLOTS] = [
    regular("footman", "Footman", Icon::Footman),
    regular("grunt", "Grunt", Icon::Grunt),
    regular("peasant", "Peasant", Icon::Peasant),
    regular("peon", "Peon", Icon::Peon),
    regular("ballista", "Ballista", Icon::Ballista),
    regular("catapult", "Catapult", Icon::Catapult),
    regular("knight", "Knight", Icon::Knight),
    regular("ogre", "Ogre", Icon::Ogre),
    regular("archer", "Archer", Icon::Archer),
    regular("axethrower", "Axethrower", Icon::Axethrower),
    regular("mage", "Mage", Icon::Mage),
    regular("death_knight", "Death Knight", Icon::DeathKnight),
    regular("paladin", "Paladin", Icon::Paladin),
    regular("ogre_mage", "Ogre Mage", Icon::OgreMage),
    regular("dwarves", "Dwarven Demolition Squad", Icon::Dwarves),
    regular("goblin_sapper", "Goblin Sapper", Icon::GoblinSapper),
    regular("attack_peasant", "Peasant (Attack)", Icon::AttackPeasant),
    regular("attack_peon", "Peon (Attack)", Icon::AttackPeon),
    regular("ranger", "Elven Ranger", Icon::Ranger),
    regular("berserker", "Berserker", Icon::Berserker),
    hero("alleria", "Alleria", Icon::Alleria),
    hero("teron_gorefiend", "Teron Gorefiend", Icon::TeronGorefiend),
    hero("kurdran_and_sky_ree", "Kurdran and Sky'ree", Icon::KurdranAndSkyRee),
    hero("dentarg", "Dentarg", Icon::Dentarg),
    hero("khadgar", "Khadgar", Icon::Khadgar),
    hero("grom_hellscream", "Grom Hellscream", Icon::GromHellscream),
    regular("human_tanker", "Human Tanker", Icon::HumanTanker),
    regular("orc_tanker", "Orc Tanker", Icon::OrcTanker),
    regular("human_transport", "Human Transport", Icon::HumanTransport),
    regular("orc_transport", "Orc Transport", Icon::OrcTransport),
    regular("elven_destroyer", "Elven Destroyer", Icon::ElvenDestroyer),
    regular("troll_destroyer", "Troll Destroyer", Icon::TrollDestroyer),
    regular("battleship", "Battleship", Icon::Battleship),
    regular("juggernaught", "Juggernaught", Icon::Juggernaught),
    None, // 0x22
    hero("deathwing", "Deathwing", Icon::Deathwing),
    None, // 0x24
    None, // 0x25
    regular("gnomish_submarine", "Gnomish Submarine", Icon::GnomishSubmarine),
    regular("giant_turtle", "Giant Turtle", Icon::GiantTurtle),
    regular("gnomish_flying_machine", "Gnomish Flying Machine", Icon::GnomishFlyingMachine),
    regular("goblin_zepplin", "Goblin Zepplin", Icon::GoblinZepplin),
    regular("gryphon_rider", "Gryphon Rider", Icon::GryphonRider),
    regular("dragon", "Dragon", Icon::Dragon),
    hero("turalyon", "Turalyon", Icon::Turalyon),
    regular("eye_of_kilrogg", "Eye of Kilrogg", Icon::EyeOfKilrogg),
    hero("danath", "Danath", Icon::Danath),
    hero("kargath_bladefist", "Kargath Bladefist", Icon::KargathBladefist),
    None, // 0x30
    hero("cho_gall", "Cho'gall", Icon::ChoGall),
    hero("lothar", "Lothar", Icon::Lothar),
    hero("gul_dan", "Gul'dan", Icon::GulDan),
    hero("uther_lightbringer", "Uther Lightbringer", Icon::UtherLightbringer),
    hero("zul_jin", "Zul'jin", Icon::ZulJin),
    None, // 0x36
    regular("skeleton", "Skeleton", Icon::Skeleton),
    regular("daemon", "Daemon", Icon::Daemon),
    regular("critter", "Critter", Icon::Critter),
    regular("farm", "Farm", Icon::Farm),
    regular("pig_farm", "Pig Farm", Icon::PigFarm),
    regular("human_barracks", "Human Barracks", Icon::HumanBarracks),
    regular("orc_barracks", "Orc Barracks", Icon::OrcBarracks),
    regular("church", "Church", Icon::Church),
    regular("altar_of_storms", "Altar of Storms", Icon::AltarOfStorms),
    regular("human_scout_tower", "Human Scout Tower", Icon::HumanScoutTower),
    regular("orc_scout_tower", "Orc Scout Tower", Icon::OrcScoutTower),
    regular("stables", "Stables", Icon::Stables),
    regular("ogre_mound", "Ogre Mound", Icon::OgreMound),
    regular("gnomish_inventor", "Gnomish Inventor", Icon::GnomishInventor),
    regular("goblin_alchemist", "Goblin Alchemist", Icon::GoblinAlchemist),
    regular("gryphon_aviary", "Gryphon Aviary", Icon::GryphonAviary),
    regular("dragon_roost", "Dragon Roost", Icon::DragonRoost),
    regular("human_shipyard", "Human Shipyard", Icon::HumanShipyard),
    regular("orc_shipyard", "Orc Shipyard", Icon::OrcShipyard),
    regular("town_hall", "Town Hall", Icon::TownHall),
    regular("great_hall", "Great Hall", Icon::GreatHall),
    regular("elven_lumber_mill", "Elven Lumber Mill", Icon::ElvenLumberMill),
    regular("troll_lumber_mill", "Troll Lumber Mill", Icon::TrollLumberMill),
    regular("human_foundry", "Human Foundry", Icon::HumanFoundry),
    regular("orc_foundry", "Orc Foundry", Icon::OrcFoundry),
    regular("mage_tower", "Mage Tower", Icon::MageTower),
    regular("temple_of_the_damned", "Temple of the Damned", Icon::TempleOfTheDamned),
    regular("human_blacksmith", "Human Blacksmith", Icon::HumanBlacksmith),
    regular("orc_blacksmith", "Orc Blacksmith", Icon::OrcBlacksmith),
    regular("human_refinery", "Human Refinery", Icon::HumanRefinery),
    regular("orc_refinery", "Orc Refinery", Icon::OrcRefinery),
    regular("human_oil_well", "Human Oil Well", Icon::HumanOilWell),
    regular("orc_oil_well", "Orc Oil Well", Icon::OrcOilWell),
    regular("keep", "Keep", Icon::Keep),
    regular("stronghold", "Stronghold", Icon::Stronghold),
    regular("castle", "Castle", Icon::Castle),
    regular("fortress", "Fortress", Icon::Fortress),
    regular("gold_mine", "Gold Mine", Icon::GoldMine),
    regular("oil_patch", "Oil Patch", Icon::OilPatch),
    regular("human_start", "Human Start Location", Icon::Cancel),
    regular("orc_start", "Orc Start Location", Icon::Cancel),
    regular("human_guard_tower", "Human Guard Tower", Icon::HumanGuardTower),
    regular("orc_guard_tower", "Orc Guard Tower", Icon::OrcGuardTower),
    regular("human_cannon_tower", "Human Cannon Tower", Icon::HumanCannonTower),
    regular("orc_cannon_tower", "Orc Cannon Tower", Icon::OrcCannonTower),
    regular("circle_of_power", "Circle of Power", Icon::CircleOfPower),
    regular("dark_portal", "Dark Portal", Icon::DarkPortal),
    regular("runestone", "Runestone", Icon::Runestone),
    regular("human_wall", "Human Wall", Icon::HumanWall),
    regular("orc_wall", "Orc Wall", Icon::OrcWall),
    regular("sheep", "Sheep", Icon::CritterSheep),
    regular("pig", "Pig", Icon::CritterPig),
    regular("seal", "Seal", Icon::CritterSeal),
    regular("red_pig", "Red Pig", Icon::CritterRedPig),
    None, // 0x6d
];

/// Look up a unit type
pub fn unit(id: u8) -> Option<&'static UnitInfo> {
    UNITS.get(usize::from(id))?.as_ref()
}

/// Machine or display name of a unit type
pub fn unit_name(id: u8, pretty: bool) -> Option<&'static str> {
    unit(id).map(|u| if pretty { u.pretty } else { u.name })
}

/// Icon of a unit type
pub fn unit_icon(id: u8) -> Option<Icon> {
    unit(id).map(|u| u.icon)
}

/// Whether a unit type is a hero
pub fn unit_is_hero(id: u8) -> Option<bool> {
    unit(id).map(|u| u.hero)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_units() {
        assert_eq!(unit_name(0x00, true), Some("Footman"));
        assert_eq!(unit_name(0x21, false), Some("juggernaught"));
        assert_eq!(unit_name(0x68, true), Some("Orc Wall"));
        assert_eq!(unit_name(0x6c, true), Some("Red Pig"));
        assert_eq!(unit_icon(0x3a), Some(Icon::Farm));
    }

    #[test]
    fn test_gaps_and_range() {
        for id in [0x22, 0x24, 0x25, 0x30, 0x36, 0x6d] {
            assert!(unit(id).is_none(), "slot {id:#x} should be empty");
        }
        assert!(unit(0x6e).is_none());
        assert!(unit(0xff).is_none());
        assert_eq!(UNITS.iter().flatten().count(), 104);
    }

    #[test]
    fn test_heroes() {
        assert_eq!(unit_is_hero(0x23), Some(true));
        assert_eq!(unit_name(0x23, true), Some("Deathwing"));
        assert_eq!(unit_is_hero(0x00), Some(false));
        assert_eq!(UNITS.iter().flatten().filter(|u| u.hero).count(), 15);
    }

    #[test]
    fn test_start_locations_use_cancel_icon() {
        assert_eq!(unit_name(0x5e, false), Some("human_start"));
        assert_eq!(unit_icon(0x5e), Some(Icon::Cancel));
        assert_eq!(unit_icon(0x5f), Some(Icon::Cancel));
    }
}
