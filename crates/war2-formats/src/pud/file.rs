//! PUD map parser

use crate::catalog::{UNIT_SLOTS, UPGRADE_SLOTS};
use crate::config::FormatsConfig;
use crate::era::Era;
use crate::pud::allow::AllowCatalog;
use crate::pud::dump::Dump;
use crate::pud::error::{PudError, PudResult};
use crate::pud::records::{
    AllowSection, UNIT_DATA_SIZE, UNIT_PLACEMENT_SIZE, UPGRADE_TABLE_SIZE, UnitData,
    UnitDataSection, UnitPlacement, Upgrade, UpgradeSection,
};
use crate::pud::scanner::SectionScanner;
use crate::pud::section::Section;
use crate::pud::types::{Dimensions, PLAYER_SLOTS, PlayerSlots};
use binrw::{BinRead, BinReaderExt};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, warn};

/// Signature carried by the `TYPE` section
pub const PUD_SIGNATURE: &[u8; 10] = b"WAR2 MAP\0\0";

/// Size of the `ALOW` payload
const ALLOW_SIZE: usize = 6 * PLAYER_SLOTS * 4;

/// The six allowance families of the `ALOW` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowFlags {
    /// Units and buildings allowed
    pub units: PlayerSlots<u32>,
    /// Spells known at start
    pub spell_start: PlayerSlots<u32>,
    /// Spells allowed
    pub spell_allowed: PlayerSlots<u32>,
    /// Spells being researched
    pub spell_research: PlayerSlots<u32>,
    /// Upgrades allowed
    pub upgrade_allowed: PlayerSlots<u32>,
    /// Upgrades being researched
    pub upgrade_research: PlayerSlots<u32>,
}

impl AllowFlags {
    /// Allowances used when a map has no `ALOW` section
    pub fn game_defaults() -> Self {
        Self {
            units: PlayerSlots::splat(AllowCatalog::Unit.full_mask()),
            spell_start: PlayerSlots::default(),
            spell_allowed: PlayerSlots::splat(AllowCatalog::Spell.full_mask()),
            spell_research: PlayerSlots::default(),
            upgrade_allowed: PlayerSlots::splat(AllowCatalog::Upgrade.full_mask()),
            upgrade_research: PlayerSlots::default(),
        }
    }

    /// Every family with the catalog its masks belong to
    pub fn families(&self) -> [(&'static str, AllowCatalog, &PlayerSlots<u32>); 6] {
        [
            ("units", AllowCatalog::Unit, &self.units),
            ("spell start", AllowCatalog::Spell, &self.spell_start),
            ("spell allowed", AllowCatalog::Spell, &self.spell_allowed),
            ("spell research", AllowCatalog::Spell, &self.spell_research),
            ("upgrade allowed", AllowCatalog::Upgrade, &self.upgrade_allowed),
            ("upgrade research", AllowCatalog::Upgrade, &self.upgrade_research),
        ]
    }

    /// Check every non-zero mask against its catalog
    ///
    /// Zero masks mean "nothing granted" and are skipped. When `strict` is
    /// false, violations are logged and kept.
    pub fn check(&self, strict: bool) -> PudResult<()> {
        for (family, catalog, slots) in self.families() {
            for (slot, &flag) in slots.iter().enumerate() {
                if flag == 0 || catalog.is_valid(flag) {
                    continue;
                }
                if strict {
                    return Err(PudError::InvalidFlag {
                        catalog: catalog.name(),
                        flag,
                    });
                }
                warn!(
                    "Slot {} has invalid {} flag {:#010x} ({})",
                    slot, catalog, flag, family
                );
            }
        }
        Ok(())
    }
}

/// Parsed map content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PudMap {
    /// Map id tag
    pub tag: u32,
    /// Format version
    pub version: u16,
    /// Raw description; not guaranteed to be NUL-terminated
    pub description: [u8; 32],
    /// Tileset era
    pub era: Era,
    /// Map size, `None` until `DIM ` is parsed
    pub dimensions: Option<Dimensions>,
    /// `OWNR` codes
    pub owners: PlayerSlots<u8>,
    /// `SIDE` codes
    pub sides: PlayerSlots<u8>,
    /// Starting gold
    pub starting_gold: PlayerSlots<u16>,
    /// Starting lumber
    pub starting_lumber: PlayerSlots<u16>,
    /// Starting oil
    pub starting_oil: PlayerSlots<u16>,
    /// AI behavior codes
    pub ai: PlayerSlots<u8>,
    /// Allowances
    pub allow: AllowFlags,
    /// `ALOW` was absent and game defaults apply
    pub default_allow: bool,
    /// Unit data uses game defaults
    pub default_udta: bool,
    /// Upgrades use game defaults
    pub default_ugrd: bool,
    /// One entry per upgrade
    pub upgrades: Vec<Upgrade>,
    /// One entry per unit type
    pub unit_data: Vec<UnitData>,
    /// Units placed on the map
    pub units: Vec<UnitPlacement>,
    /// Tile ids, row-major
    pub tiles_map: Vec<u16>,
    /// Action flags, row-major
    pub action_map: Vec<u16>,
    /// Movement flags, row-major
    pub movement_map: Vec<u16>,
}

impl Default for PudMap {
    fn default() -> Self {
        Self {
            tag: 0,
            version: 0,
            description: [0; 32],
            era: Era::Forest,
            dimensions: None,
            owners: PlayerSlots::default(),
            sides: PlayerSlots::default(),
            starting_gold: PlayerSlots::default(),
            starting_lumber: PlayerSlots::default(),
            starting_oil: PlayerSlots::default(),
            ai: PlayerSlots::default(),
            allow: AllowFlags::default(),
            default_allow: false,
            default_udta: false,
            default_ugrd: false,
            upgrades: vec![Upgrade::default(); UPGRADE_SLOTS],
            unit_data: vec![UnitData::default(); UNIT_SLOTS],
            units: Vec::new(),
            tiles_map: Vec::new(),
            action_map: Vec::new(),
            movement_map: Vec::new(),
        }
    }
}

impl PudMap {
    /// Description up to its first NUL byte
    pub fn description_text(&self) -> Cow<'_, str> {
        let end = self
            .description
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.description.len());
        String::from_utf8_lossy(&self.description[..end])
    }

    /// Width and height in tiles, zero until dimensions are known
    pub fn size(&self) -> (usize, usize) {
        self.dimensions.map_or((0, 0), Dimensions::size)
    }

    /// Tile id at a coordinate
    pub fn tile_at(&self, x: usize, y: usize) -> PudResult<u16> {
        self.cell(&self.tiles_map, x, y)
    }

    /// Action flags at a coordinate
    pub fn action_at(&self, x: usize, y: usize) -> PudResult<u16> {
        self.cell(&self.action_map, x, y)
    }

    /// Movement flags at a coordinate
    pub fn movement_at(&self, x: usize, y: usize) -> PudResult<u16> {
        self.cell(&self.movement_map, x, y)
    }

    fn cell(&self, map: &[u16], x: usize, y: usize) -> PudResult<u16> {
        let (width, height) = self.size();
        let out_of_bounds = PudError::OutOfBounds {
            x,
            y,
            width,
            height,
        };
        if x >= width || y >= height {
            return Err(out_of_bounds);
        }
        map.get(y * width + x).copied().ok_or(out_of_bounds)
    }

    /// Text rendering of every field and map
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }
}

/// A PUD map being read section by section
///
/// Each `parse_*` method locates its section, decodes it and stores the
/// result. A failing parse leaves previously parsed fields untouched.
#[derive(Debug)]
pub struct Pud<R> {
    scanner: SectionScanner<R>,
    config: FormatsConfig,
    map: PudMap,
}

impl Pud<BufReader<File>> {
    /// Open a map with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> PudResult<Self> {
        Self::open_with_config(path, FormatsConfig::default())
    }

    /// Open a map
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: FormatsConfig) -> PudResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("Opened map {}", path.display());
        Ok(Self::with_config(BufReader::new(file), config))
    }
}

impl<R: Read + Seek> Pud<R> {
    /// Read a map from a stream
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, FormatsConfig::default())
    }

    /// Read a map from a stream with a configuration
    pub fn with_config(reader: R, config: FormatsConfig) -> Self {
        Self {
            scanner: SectionScanner::new(reader),
            config,
            map: PudMap::default(),
        }
    }

    /// Fields parsed so far
    pub fn map(&self) -> &PudMap {
        &self.map
    }

    /// Take the parsed fields
    pub fn into_map(self) -> PudMap {
        self.map
    }

    /// Underlying section scanner
    pub fn scanner(&self) -> &SectionScanner<R> {
        &self.scanner
    }

    /// Position the stream right past a section's tag
    pub fn go_to_section(&mut self, section: Section) -> PudResult<()> {
        self.scanner.go_to(section)
    }

    /// Parse every section
    pub fn parse(&mut self) -> PudResult<&PudMap> {
        self.parse_type()?;
        self.parse_version()?;
        self.parse_description()?;
        self.parse_owners()?;
        self.parse_era()?;
        self.parse_dimensions()?;
        self.parse_unit_data()?;
        self.parse_allow()?;
        self.parse_upgrades()?;
        self.parse_sides()?;
        self.parse_starting_gold()?;
        self.parse_starting_lumber()?;
        self.parse_starting_oil()?;
        self.parse_ai()?;
        self.parse_tiles_map()?;
        self.parse_movement_map()?;
        self.parse_action_map()?;
        self.parse_units()?;
        Ok(&self.map)
    }

    /// Sections present in the stream, in catalog order
    pub fn sections_present(&mut self) -> PudResult<Vec<Section>> {
        let mut present = Vec::new();
        for section in Section::ALL {
            if self.scanner.contains(section)? {
                present.push(section);
            }
        }
        Ok(present)
    }

    /// `TYPE`: check the signature and read the id tag
    pub fn parse_type(&mut self) -> PudResult<u32> {
        let payload = self.scanner.payload(Section::Type)?;
        expect_len(Section::Type, &payload, PUD_SIGNATURE.len())?;

        let mut signature = [0u8; 10];
        signature.copy_from_slice(&payload[..10]);
        if &signature != PUD_SIGNATURE {
            return Err(PudError::InvalidSignature(signature));
        }

        let tag = payload
            .get(12..16)
            .map_or(0, |b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
        self.map.tag = tag;
        Ok(tag)
    }

    /// `VER `
    pub fn parse_version(&mut self) -> PudResult<u16> {
        let payload = self.scanner.payload(Section::Ver)?;
        let version = read_u16(Section::Ver, &payload)?;
        self.map.version = version;
        Ok(version)
    }

    /// `DESC`: 32 bytes copied verbatim
    pub fn parse_description(&mut self) -> PudResult<[u8; 32]> {
        let payload = self.scanner.payload(Section::Desc)?;
        expect_len(Section::Desc, &payload, 32)?;
        let mut description = [0u8; 32];
        description.copy_from_slice(&payload[..32]);
        self.map.description = description;
        Ok(description)
    }

    /// `OWNR`
    pub fn parse_owners(&mut self) -> PudResult<PlayerSlots<u8>> {
        let owners = self.byte_slots(Section::Ownr)?;
        self.map.owners = owners;
        Ok(owners)
    }

    /// `ERAX`, falling back to `ERA `
    pub fn parse_era(&mut self) -> PudResult<Era> {
        let (section, payload) = match self.scanner.payload(Section::Erax) {
            Ok(payload) => (Section::Erax, payload),
            Err(PudError::MissingSection(_)) => {
                debug!("No ERAX section, trying ERA");
                (Section::Era, self.scanner.payload(Section::Era)?)
            }
            Err(e) => return Err(e),
        };

        let code = read_u16(section, &payload)?;
        let era = Era::from_code(code).ok_or(PudError::InvalidEra(code))?;
        self.map.era = era;
        Ok(era)
    }

    /// `DIM `: only square 32, 64, 96 and 128 maps are valid
    pub fn parse_dimensions(&mut self) -> PudResult<Dimensions> {
        let payload = self.scanner.payload(Section::Dim)?;
        expect_len(Section::Dim, &payload, 4)?;
        let [width, height]: [u16; 2] = Cursor::new(&payload).read_le()?;

        let dims = Dimensions::from_size(width, height)
            .ok_or(PudError::InvalidDimensions { width, height })?;
        self.map.dimensions = Some(dims);
        Ok(dims)
    }

    /// `UDTA`
    pub fn parse_unit_data(&mut self) -> PudResult<&[UnitData]> {
        let payload = self.scanner.payload(Section::Udta)?;
        expect_len(Section::Udta, &payload, UNIT_DATA_SIZE)?;
        let section = UnitDataSection::read(&mut Cursor::new(&payload))?;

        self.map.default_udta = section.use_default != 0;
        self.map.unit_data = section.units();
        Ok(&self.map.unit_data)
    }

    /// `ALOW`, or game defaults when absent
    pub fn parse_allow(&mut self) -> PudResult<&AllowFlags> {
        let payload = match self.scanner.payload(Section::Alow) {
            Ok(payload) => payload,
            Err(PudError::MissingSection(_)) => {
                debug!("No ALOW section, using default allowances");
                self.map.allow = AllowFlags::game_defaults();
                self.map.default_allow = true;
                return Ok(&self.map.allow);
            }
            Err(e) => return Err(e),
        };

        expect_len(Section::Alow, &payload, ALLOW_SIZE)?;
        let raw = AllowSection::read(&mut Cursor::new(&payload))?;
        let flags = AllowFlags {
            units: PlayerSlots(raw.units),
            spell_start: PlayerSlots(raw.spell_start),
            spell_allowed: PlayerSlots(raw.spell_allowed),
            spell_research: PlayerSlots(raw.spell_research),
            upgrade_allowed: PlayerSlots(raw.upgrade_allowed),
            upgrade_research: PlayerSlots(raw.upgrade_research),
        };
        flags.check(self.config.strict_allow_flags)?;

        self.map.allow = flags;
        self.map.default_allow = false;
        Ok(&self.map.allow)
    }

    /// `UGRD`
    pub fn parse_upgrades(&mut self) -> PudResult<&[Upgrade]> {
        let payload = self.scanner.payload(Section::Ugrd)?;
        expect_len(Section::Ugrd, &payload, UPGRADE_TABLE_SIZE)?;
        let section = UpgradeSection::read(&mut Cursor::new(&payload))?;

        self.map.default_ugrd = section.use_default != 0;
        self.map.upgrades = section.upgrades();
        Ok(&self.map.upgrades)
    }

    /// `SIDE`
    pub fn parse_sides(&mut self) -> PudResult<PlayerSlots<u8>> {
        let sides = self.byte_slots(Section::Side)?;
        self.map.sides = sides;
        Ok(sides)
    }

    /// `SGLD`
    pub fn parse_starting_gold(&mut self) -> PudResult<PlayerSlots<u16>> {
        let gold = self.word_slots(Section::Sgld)?;
        self.map.starting_gold = gold;
        Ok(gold)
    }

    /// `SLBR`
    pub fn parse_starting_lumber(&mut self) -> PudResult<PlayerSlots<u16>> {
        let lumber = self.word_slots(Section::Slbr)?;
        self.map.starting_lumber = lumber;
        Ok(lumber)
    }

    /// `SOIL`
    pub fn parse_starting_oil(&mut self) -> PudResult<PlayerSlots<u16>> {
        let oil = self.word_slots(Section::Soil)?;
        self.map.starting_oil = oil;
        Ok(oil)
    }

    /// `AIPL`
    pub fn parse_ai(&mut self) -> PudResult<PlayerSlots<u8>> {
        let ai = self.byte_slots(Section::Aipl)?;
        self.map.ai = ai;
        Ok(ai)
    }

    /// `MTXM`
    pub fn parse_tiles_map(&mut self) -> PudResult<&[u16]> {
        self.map.tiles_map = self.grid(Section::Mtxm)?;
        Ok(&self.map.tiles_map)
    }

    /// `SQM `
    pub fn parse_movement_map(&mut self) -> PudResult<&[u16]> {
        self.map.movement_map = self.grid(Section::Sqm)?;
        Ok(&self.map.movement_map)
    }

    /// `REGM`
    pub fn parse_action_map(&mut self) -> PudResult<&[u16]> {
        self.map.action_map = self.grid(Section::Regm)?;
        Ok(&self.map.action_map)
    }

    /// `UNIT`
    pub fn parse_units(&mut self) -> PudResult<&[UnitPlacement]> {
        let payload = self.scanner.payload(Section::Unit)?;
        if payload.len() % UNIT_PLACEMENT_SIZE != 0 {
            warn!(
                "UNIT section has {} trailing bytes",
                payload.len() % UNIT_PLACEMENT_SIZE
            );
        }

        let units = payload
            .chunks_exact(UNIT_PLACEMENT_SIZE)
            .map(|record| UnitPlacement::read(&mut Cursor::new(record)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Map places {} units", units.len());

        self.map.units = units;
        Ok(&self.map.units)
    }

    fn byte_slots(&mut self, section: Section) -> PudResult<PlayerSlots<u8>> {
        let payload = self.scanner.payload(section)?;
        expect_len(section, &payload, PLAYER_SLOTS)?;
        let mut slots = [0u8; PLAYER_SLOTS];
        slots.copy_from_slice(&payload[..PLAYER_SLOTS]);
        Ok(PlayerSlots(slots))
    }

    fn word_slots(&mut self, section: Section) -> PudResult<PlayerSlots<u16>> {
        let payload = self.scanner.payload(section)?;
        expect_len(section, &payload, PLAYER_SLOTS * 2)?;
        let slots: [u16; PLAYER_SLOTS] = Cursor::new(&payload).read_le()?;
        Ok(PlayerSlots(slots))
    }

    fn grid(&mut self, section: Section) -> PudResult<Vec<u16>> {
        let dims = match self.map.dimensions {
            Some(dims) => dims,
            None => self.parse_dimensions()?,
        };

        let payload = self.scanner.payload(section)?;
        expect_len(section, &payload, dims.tile_count() * 2)?;
        Ok(payload[..dims.tile_count() * 2]
            .chunks_exact(2)
            .map(|w| u16::from_le_bytes([w[0], w[1]]))
            .collect())
    }
}

fn expect_len(section: Section, payload: &[u8], needed: usize) -> PudResult<()> {
    if payload.len() < needed {
        return Err(PudError::TruncatedSection {
            section,
            needed,
            available: payload.len(),
        });
    }
    Ok(())
}

fn read_u16(section: Section, payload: &[u8]) -> PudResult<u16> {
    expect_len(section, payload, 2)?;
    Ok(u16::from_le_bytes([payload[0], payload[1]]))
}
