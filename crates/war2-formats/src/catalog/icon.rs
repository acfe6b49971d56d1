//! Icons referenced by the catalogs

/// Icon shown for a unit, upgrade or spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Icon {
    Footman,
    Grunt,
    Peasant,
    Peon,
    Ballista,
    Catapult,
    Knight,
    Ogre,
    Archer,
    Axethrower,
    Mage,
    DeathKnight,
    Paladin,
    OgreMage,
    Dwarves,
    GoblinSapper,
    AttackPeasant,
    AttackPeon,
    Ranger,
    Berserker,
    Alleria,
    TeronGorefiend,
    KurdranAndSkyRee,
    Dentarg,
    Khadgar,
    GromHellscream,
    HumanTanker,
    OrcTanker,
    HumanTransport,
    OrcTransport,
    ElvenDestroyer,
    TrollDestroyer,
    Battleship,
    Juggernaught,
    Deathwing,
    GnomishSubmarine,
    GiantTurtle,
    GnomishFlyingMachine,
    GoblinZepplin,
    GryphonRider,
    Dragon,
    Turalyon,
    EyeOfKilrogg,
    Danath,
    KargathBladefist,
    ChoGall,
    Lothar,
    GulDan,
    UtherLightbringer,
    ZulJin,
    Skeleton,
    Daemon,
    Critter,
    Farm,
    PigFarm,
    HumanBarracks,
    OrcBarracks,
    Church,
    AltarOfStorms,
    HumanScoutTower,
    OrcScoutTower,
    Stables,
    OgreMound,
    GnomishInventor,
    GoblinAlchemist,
    GryphonAviary,
    DragonRoost,
    HumanShipyard,
    OrcShipyard,
    TownHall,
    GreatHall,
    ElvenLumberMill,
    TrollLumberMill,
    HumanFoundry,
    OrcFoundry,
    MageTower,
    TempleOfTheDamned,
    HumanBlacksmith,
    OrcBlacksmith,
    HumanRefinery,
    OrcRefinery,
    HumanOilWell,
    OrcOilWell,
    Keep,
    Stronghold,
    Castle,
    Fortress,
    GoldMine,
    OilPatch,
    HumanGuardTower,
    OrcGuardTower,
    HumanCannonTower,
    OrcCannonTower,
    CircleOfPower,
    DarkPortal,
    Runestone,
    HumanWall,
    OrcWall,
    CritterSheep,
    CritterPig,
    CritterSeal,
    CritterRedPig,
    Sword1,
    Sword2,
    Axe1,
    Axe2,
    Arrow1,
    Arrow2,
    Spear1,
    Spear2,
    HumanShield1,
    HumanShield2,
    OrcShield1,
    OrcShield2,
    HumanShipCannon1,
    HumanShipCannon2,
    OrcShipCannon1,
    OrcShipCannon2,
    HumanShipArmor1,
    HumanShipArmor2,
    OrcShipArmor1,
    OrcShipArmor2,
    Catapult1,
    Catapult2,
    Ballista1,
    Ballista2,
    TrainRangers,
    Longbow,
    RangerScouting,
    RangerMarksmanship,
    TrainBerserkers,
    LighterAxes,
    BerserkerScouting,
    BerserkerRegeneration,
    TrainOgreMages,
    TrainPaladins,
    HolyVision,
    Healing,
    Exorcism,
    FlameShield,
    Fireball,
    Slow,
    Invisibility,
    Polymorph,
    Blizzard,
    Bloodlust,
    RaiseDead,
    DeathCoil,
    Whirlwind,
    Haste,
    UnholyArmor,
    Runes,
    DeathAndDecay,
    Cancel,
}
