//! Fixed binary records of the larger sections
//!
//! `UDTA` and `UGRD` are stored as parallel arrays, one array per field.
//! They are read as-is and then transposed into one record per unit or
//! upgrade.

use crate::catalog::{UNIT_SLOTS, UPGRADE_SLOTS};
use binrw::{BinRead, BinWrite};

/// Size of the `UDTA` payload
pub const UNIT_DATA_SIZE: usize = 5950;

/// Size of the `UGRD` payload
pub const UPGRADE_TABLE_SIZE: usize = 782;

/// Size of one `UNIT` record
pub const UNIT_PLACEMENT_SIZE: usize = 8;

/// Units with a right-mouse action entry
const MOUSE_ACTION_SLOTS: usize = 58;

/// Raw `UDTA` payload
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
#[allow(missing_docs)]
pub struct UnitDataSection {
    /// Non-zero when the game defaults are used
    pub use_default: u16,
    pub overlap_frames: [u16; UNIT_SLOTS],
    /// Unused by the game
    pub obsolete: [u16; 508],
    pub sight: [u32; UNIT_SLOTS],
    pub hit_points: [u16; UNIT_SLOTS],
    pub has_magic: [u8; UNIT_SLOTS],
    pub build_time: [u8; UNIT_SLOTS],
    pub gold_cost: [u8; UNIT_SLOTS],
    pub lumber_cost: [u8; UNIT_SLOTS],
    pub oil_cost: [u8; UNIT_SLOTS],
    /// Width in the low half, height in the high half
    pub size: [u32; UNIT_SLOTS],
    /// Width in the low half, height in the high half
    pub box_size: [u32; UNIT_SLOTS],
    pub range: [u8; UNIT_SLOTS],
    pub computer_react_range: [u8; UNIT_SLOTS],
    pub human_react_range: [u8; UNIT_SLOTS],
    pub armor: [u8; UNIT_SLOTS],
    pub rect_sel: [u8; UNIT_SLOTS],
    pub priority: [u8; UNIT_SLOTS],
    pub basic_damage: [u8; UNIT_SLOTS],
    pub piercing_damage: [u8; UNIT_SLOTS],
    pub weapons_upgradable: [u8; UNIT_SLOTS],
    pub armor_upgradable: [u8; UNIT_SLOTS],
    pub missile_weapon: [u8; UNIT_SLOTS],
    pub unit_type: [u8; UNIT_SLOTS],
    pub decay_rate: [u8; UNIT_SLOTS],
    pub annoy: [u8; UNIT_SLOTS],
    pub mouse_right_btn: [u8; MOUSE_ACTION_SLOTS],
    pub point_value: [u16; UNIT_SLOTS],
    pub can_target: [u8; UNIT_SLOTS],
    pub flags: [u32; UNIT_SLOTS],
    /// Unused by the game
    pub obsolete_tail: [u16; 127],
}

/// Properties of one unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct UnitData {
    pub overlap_frames: u16,
    pub sight: u32,
    pub hit_points: u16,
    pub has_magic: u8,
    pub build_time: u8,
    pub gold_cost: u8,
    pub lumber_cost: u8,
    pub oil_cost: u8,
    pub size_w: u16,
    pub size_h: u16,
    pub box_w: u16,
    pub box_h: u16,
    pub range: u8,
    pub computer_react_range: u8,
    pub human_react_range: u8,
    pub armor: u8,
    pub rect_sel: u8,
    pub priority: u8,
    pub basic_damage: u8,
    pub piercing_damage: u8,
    pub weapons_upgradable: u8,
    pub armor_upgradable: u8,
    pub missile_weapon: u8,
    pub unit_type: u8,
    pub decay_rate: u8,
    pub annoy: u8,
    /// Zero for units past the right-mouse action table
    pub mouse_right_btn: u8,
    pub point_value: u16,
    pub can_target: u8,
    pub flags: u32,
}

const fn split(value: u32) -> (u16, u16) {
    ((value & 0xffff) as u16, (value >> 16) as u16)
}

impl UnitDataSection {
    /// One record per unit slot
    pub fn units(&self) -> Vec<UnitData> {
        (0..UNIT_SLOTS)
            .map(|i| {
                let (size_w, size_h) = split(self.size[i]);
                let (box_w, box_h) = split(self.box_size[i]);
                UnitData {
                    overlap_frames: self.overlap_frames[i],
                    sight: self.sight[i],
                    hit_points: self.hit_points[i],
                    has_magic: self.has_magic[i],
                    build_time: self.build_time[i],
                    gold_cost: self.gold_cost[i],
                    lumber_cost: self.lumber_cost[i],
                    oil_cost: self.oil_cost[i],
                    size_w,
                    size_h,
                    box_w,
                    box_h,
                    range: self.range[i],
                    computer_react_range: self.computer_react_range[i],
                    human_react_range: self.human_react_range[i],
                    armor: self.armor[i],
                    rect_sel: self.rect_sel[i],
                    priority: self.priority[i],
                    basic_damage: self.basic_damage[i],
                    piercing_damage: self.piercing_damage[i],
                    weapons_upgradable: self.weapons_upgradable[i],
                    armor_upgradable: self.armor_upgradable[i],
                    missile_weapon: self.missile_weapon[i],
                    unit_type: self.unit_type[i],
                    decay_rate: self.decay_rate[i],
                    annoy: self.annoy[i],
                    mouse_right_btn: self.mouse_right_btn.get(i).copied().unwrap_or(0),
                    point_value: self.point_value[i],
                    can_target: self.can_target[i],
                    flags: self.flags[i],
                }
            })
            .collect()
    }
}

/// Raw `UGRD` payload
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
#[allow(missing_docs)]
pub struct UpgradeSection {
    /// Non-zero when the game defaults are used
    pub use_default: u16,
    pub time: [u8; UPGRADE_SLOTS],
    pub gold: [u16; UPGRADE_SLOTS],
    pub lumber: [u16; UPGRADE_SLOTS],
    pub oil: [u16; UPGRADE_SLOTS],
    pub icon: [u16; UPGRADE_SLOTS],
    pub group: [u16; UPGRADE_SLOTS],
    pub flags: [u32; UPGRADE_SLOTS],
}

/// Cost and effect of one upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub struct Upgrade {
    pub time: u8,
    pub gold: u16,
    pub lumber: u16,
    pub oil: u16,
    pub icon: u16,
    pub group: u16,
    pub flags: u32,
}

impl UpgradeSection {
    /// One record per upgrade
    pub fn upgrades(&self) -> Vec<Upgrade> {
        (0..UPGRADE_SLOTS)
            .map(|i| Upgrade {
                time: self.time[i],
                gold: self.gold[i],
                lumber: self.lumber[i],
                oil: self.oil[i],
                icon: self.icon[i],
                group: self.group[i],
                flags: self.flags[i],
            })
            .collect()
    }
}

/// A unit placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BinRead, BinWrite)]
#[brw(little)]
pub struct UnitPlacement {
    /// Column
    pub x: u16,
    /// Row
    pub y: u16,
    /// Unit type id
    pub unit_type: u8,
    /// Owning player
    pub owner: u8,
    /// Gold/oil amount divided by 2500 for resources, passive flag otherwise
    pub alter: u16,
}

/// Raw `ALOW` payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
#[allow(missing_docs)]
pub struct AllowSection {
    pub units: [u32; 16],
    pub spell_start: [u32; 16],
    pub spell_allowed: [u32; 16],
    pub spell_research: [u32; 16],
    pub upgrade_allowed: [u32; 16],
    pub upgrade_research: [u32; 16],
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_unit_data_size_and_transpose() {
        let mut raw = vec![0u8; UNIT_DATA_SIZE];
        raw[0] = 1; // use_default
        // hit points of unit 2 sit after use_default, overlap, obsolete and sight
        let hp = 2 + 220 + 1016 + 440 + 2 * 2;
        raw[hp..hp + 2].copy_from_slice(&60u16.to_le_bytes());
        // size of unit 0: after the five u8 cost arrays
        let size = 2 + 220 + 1016 + 440 + 220 + 550;
        raw[size..size + 4].copy_from_slice(&0x0002_0001u32.to_le_bytes());

        let mut cursor = Cursor::new(&raw);
        let section = UnitDataSection::read(&mut cursor).expect("valid UDTA");
        assert_eq!(cursor.position() as usize, UNIT_DATA_SIZE);
        assert_eq!(section.use_default, 1);

        let units = section.units();
        assert_eq!(units.len(), UNIT_SLOTS);
        assert_eq!(units[2].hit_points, 60);
        assert_eq!((units[0].size_w, units[0].size_h), (1, 2));
        assert_eq!(units[100].mouse_right_btn, 0);
    }

    #[test]
    fn test_upgrade_section() {
        let mut raw = vec![0u8; UPGRADE_TABLE_SIZE];
        raw[2] = 200; // time of upgrade 0
        let gold = 2 + 52 + 2;
        raw[gold..gold + 2].copy_from_slice(&800u16.to_le_bytes());

        let mut cursor = Cursor::new(&raw);
        let section = UpgradeSection::read(&mut cursor).expect("valid UGRD");
        assert_eq!(cursor.position() as usize, UPGRADE_TABLE_SIZE);

        let upgrades = section.upgrades();
        assert_eq!(upgrades.len(), UPGRADE_SLOTS);
        assert_eq!(upgrades[0].time, 200);
        assert_eq!(upgrades[1].gold, 800);
    }

    #[test]
    fn test_unit_placement() {
        let raw = [0x05, 0x00, 0x07, 0x00, 0x02, 0x01, 0x01, 0x00];
        let unit = UnitPlacement::read(&mut Cursor::new(&raw)).unwrap();
        assert_eq!(
            unit,
            UnitPlacement {
                x: 5,
                y: 7,
                unit_type: 2,
                owner: 1,
                alter: 1
            }
        );
    }
}
