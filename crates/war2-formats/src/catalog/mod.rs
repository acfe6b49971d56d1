//! Static metadata catalogs
//!
//! Process-wide immutable tables describing unit types, upgrades,
//! projectiles and allowance bits. Every lookup is total over its index
//! range and returns `None` outside it.

mod icon;
mod projectiles;
mod twins;
mod units;
mod upgrades;

pub use icon::Icon;
pub use projectiles::{PROJECTILE_SLOTS, PROJECTILES, projectile_name};
pub use twins::{
    SPELL_TWIN_SLOTS, SPELL_TWINS, SpellEntry, TwinEntry, UNIT_TWIN_SLOTS, UNIT_TWINS,
    UPGRADE_TWIN_SLOTS, UPGRADE_TWINS, spell_twin, unit_twin, upgrade_twin,
};
pub use units::{UNIT_SLOTS, UNITS, UnitInfo, unit, unit_icon, unit_is_hero, unit_name};
pub use upgrades::{UPGRADE_SLOTS, UPGRADES, UpgradeInfo, upgrade_icon, upgrade_info, upgrade_name};
