//! PUD map format
//!
//! A PUD file is a flat sequence of sections. Each section starts with a
//! four-character tag from a fixed catalog of 20, followed by a
//! little-endian `u32` payload length and the payload itself. Sections are
//! stored in catalog order; `ERAX` and `ALOW` may be absent.
//!
//! ```no_run
//! use war2_formats::pud::Pud;
//!
//! let mut pud = Pud::open("map.pud")?;
//! let map = pud.parse()?;
//! println!("{}", map.dump());
//! # Ok::<(), war2_formats::pud::PudError>(())
//! ```

mod allow;
mod dump;
mod error;
mod file;
mod records;
mod scanner;
mod section;
mod types;

pub use allow::{
    AllowCatalog, SPELL_RESERVED, UNIT_RESERVED, UPGRADE_RESERVED, flag_to_binary,
    flag_to_index, spell_allow_entry, spell_allow_valid, unit_allow_entry, unit_allow_valid,
    upgrade_allow_entry, upgrade_allow_valid,
};
pub use dump::Dump;
pub use error::{PudError, PudResult};
pub use file::{AllowFlags, PUD_SIGNATURE, Pud, PudMap};
pub use records::{
    AllowSection, UNIT_DATA_SIZE, UNIT_PLACEMENT_SIZE, UPGRADE_TABLE_SIZE, UnitData,
    UnitDataSection, UnitPlacement, Upgrade, UpgradeSection,
};
pub use scanner::SectionScanner;
pub use section::Section;
pub use types::{
    Dimensions, INVALID_PLAYER_COLOR, Owner, PLAYER_SLOTS, Player, PlayerSlots, Side,
    player_color,
};
