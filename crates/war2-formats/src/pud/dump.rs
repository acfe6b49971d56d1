//! Human-readable map dump
//!
//! Field order and labels are fixed so the output can be compared
//! verbatim against existing `pud_dump` output. That layout prints the
//! spells allowed masks a second time under "Searching Spells"; the spell
//! research masks are only reachable through
//! [`AllowFlags`](crate::pud::AllowFlags).

use crate::catalog::unit_name;
use crate::pud::allow::flag_to_binary;
use crate::pud::file::PudMap;
use crate::pud::types::{Dimensions, PlayerSlots};
use std::fmt::{self, Display, Write};

/// Display adapter rendering a [`PudMap`]
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a> {
    map: &'a PudMap,
}

impl<'a> Dump<'a> {
    /// Wrap a map
    pub const fn new(map: &'a PudMap) -> Self {
        Self { map }
    }
}

fn slots<T, F, D>(f: &mut fmt::Formatter<'_>, title: &str, slots: &PlayerSlots<T>, show: F) -> fmt::Result
where
    F: Fn(&T) -> D,
    D: Display,
{
    writeln!(f, "{title}")?;
    for (i, value) in slots.players().iter().enumerate() {
        writeln!(f, "   player {}..........: {}", i + 1, show(value))?;
    }
    for (i, value) in slots.unusable().iter().enumerate() {
        writeln!(f, "   unusable {}........: {}", i + 1, show(value))?;
    }
    writeln!(f, "   neutral...........: {}", show(slots.neutral()))
}

fn grid(f: &mut fmt::Formatter<'_>, title: &str, map: &PudMap, cells: &[u16]) -> fmt::Result {
    writeln!(f, "{title} ({})", Dimensions::label(map.dimensions))?;
    let (width, height) = map.size();
    if width == 0 {
        return Ok(());
    }

    let mut line = String::with_capacity(width * 7);
    for row in cells.chunks(width).take(height) {
        line.clear();
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                line.push(' ');
            }
            write!(line, "0x{cell:04x}")?;
        }
        writeln!(f, "{line}")?;
    }
    Ok(())
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.map;
        let hex = |v: &u8| format!("0x{v:02x}");
        let bin = |v: &u32| flag_to_binary(*v);

        writeln!(f, "Tag ID...............: 0x{:x}", map.tag)?;
        writeln!(f, "Version..............: {:x}", map.version)?;
        writeln!(f, "Description..........: {}", map.description_text())?;
        writeln!(f, "Era..................: {}", map.era)?;
        writeln!(
            f,
            "Dimensions...........: {}",
            Dimensions::label(map.dimensions)
        )?;
        writeln!(f, "Default ALOW.........: {}", u8::from(map.default_allow))?;
        writeln!(f, "Default UDTA.........: {}", u8::from(map.default_udta))?;
        writeln!(f, "Default UGRD.........: {}", u8::from(map.default_ugrd))?;

        slots(f, "Owners...............:", &map.owners, hex)?;
        slots(f, "Sides................:", &map.sides, hex)?;
        slots(f, "Starting Gold........:", &map.starting_gold, |v| *v)?;
        slots(f, "Starting Lumber......:", &map.starting_lumber, |v| *v)?;
        slots(f, "Starting Oil.........:", &map.starting_oil, |v| *v)?;
        slots(f, "AI...................:", &map.ai, hex)?;

        let allow = &map.allow;
        slots(f, "Allow Units..........:", &allow.units, bin)?;
        slots(f, "Startup Spells.......:", &allow.spell_start, bin)?;
        slots(f, "Allow Spells.........:", &allow.spell_allowed, bin)?;
        slots(f, "Searching Spells.....:", &allow.spell_allowed, bin)?;
        slots(f, "Upgrades Allowed.....:", &allow.upgrade_allowed, bin)?;
        slots(f, "Searching Upgrades...:", &allow.upgrade_research, bin)?;

        writeln!(f, "Upgrades.............:")?;
        for (i, upgrade) in map.upgrades.iter().enumerate() {
            writeln!(f, "   upgrades 0x{i:02x}......:")?;
            writeln!(f, "      Time...........: {}", upgrade.time)?;
            writeln!(f, "      Gold...........: {}", upgrade.gold)?;
            writeln!(f, "      Lumber.........: {}", upgrade.lumber)?;
            writeln!(f, "      Oil............: {}", upgrade.oil)?;
            writeln!(f, "      Icon...........: {}", upgrade.icon)?;
            writeln!(f, "      Group..........: 0x{:02x}", upgrade.group)?;
            writeln!(f, "      Flags..........: {}", flag_to_binary(upgrade.flags))?;
        }

        writeln!(f, "Units................: {}", map.units.len())?;
        for (i, unit) in map.units.iter().enumerate() {
            writeln!(f, "   Unit {i:04}.........:")?;
            writeln!(f, "      X,Y............: {},{}", unit.x, unit.y)?;
            writeln!(
                f,
                "      Type...........: {} (0x{:x})",
                unit_name(unit.unit_type, true).unwrap_or("Unknown"),
                unit.unit_type
            )?;
            writeln!(f, "      Owner..........: 0x{:x}", unit.owner)?;
            writeln!(f, "      Alter..........: {}", unit.alter)?;
        }

        writeln!(f, "Unit Data............:")?;
        for (i, data) in map.unit_data.iter().enumerate() {
            let name = u8::try_from(i)
                .ok()
                .and_then(|id| unit_name(id, true))
                .unwrap_or("Unknown");
            writeln!(f, "   Unit 0x{i:02x}.........: {name}")?;
            writeln!(f, "      Overlap........: {:x}", data.overlap_frames)?;
            writeln!(f, "      Sight..........: {}", data.sight)?;
            writeln!(f, "      Hit Points.....: {}", data.hit_points)?;
            writeln!(f, "      Build Time.....: {}", data.build_time)?;
            writeln!(f, "      Gold Cost......: {}", data.gold_cost)?;
            writeln!(f, "      Lumber Cost....: {}", data.lumber_cost)?;
            writeln!(f, "      Oil Cost.......: {}", data.oil_cost)?;
            writeln!(f, "      Width..........: {}", data.size_w)?;
            writeln!(f, "      Height.........: {}", data.size_h)?;
            writeln!(f, "      Box Width......: {}", data.box_w)?;
            writeln!(f, "      Box Height.....: {}", data.box_h)?;
            writeln!(f, "      Range..........: {}", data.range)?;
            writeln!(f, "      Cptr react rg..: {}", data.computer_react_range)?;
            writeln!(f, "      Hmn reac rg....: {}", data.human_react_range)?;
            writeln!(f, "      Armor..........: {}", data.armor)?;
            writeln!(f, "      Priority.......: {}", data.priority)?;
            writeln!(f, "      Basic Dmg......: {}", data.basic_damage)?;
            writeln!(f, "      Piercing Dmg...: {}", data.piercing_damage)?;
            writeln!(f, "      Missile........: {}", data.missile_weapon)?;
            writeln!(f, "      Type...........: {}", data.unit_type)?;
            writeln!(f, "      Decay Rate.....: {}", data.decay_rate)?;
            writeln!(f, "      Annoy..........: {}", data.annoy)?;
            writeln!(f, "      Mouse 2 Btn....: {}", data.mouse_right_btn)?;
            writeln!(f, "      Point Value....: {}", data.point_value)?;
            writeln!(f, "      Can Target.....: {}", data.can_target)?;
            writeln!(f, "      Rect Sel.......: {}", data.rect_sel)?;
            writeln!(f, "      Has Magic......: {}", data.has_magic)?;
            writeln!(f, "      Weapons Ugrd...: {}", data.weapons_upgradable)?;
            writeln!(f, "      Armor Ugrd.....: {}", data.armor_upgradable)?;
            writeln!(f, "      Flags..........: {}", flag_to_binary(data.flags))?;
        }

        grid(f, "Tiles Map", map, &map.tiles_map)?;
        grid(f, "Action Map", map, &map.action_map)?;
        grid(f, "Movement Map", map, &map.movement_map)
    }
}
