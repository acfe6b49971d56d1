//! WAR archive container
//!
//! WAR archives are the containers shipped with the game's data. They hold
//! an indexed table of raw entries: palettes, minitile tables, pixel data
//! and sprites.
//!
//! ```no_run
//! use war2_formats::war::WarArchive;
//!
//! let archive = WarArchive::open("MAINDAT.WAR")?;
//! let palette = archive.extract(2)?;
//! # Ok::<(), war2_formats::war::WarError>(())
//! ```

mod archive;
mod error;
mod header;

pub use archive::WarArchive;
pub use error::{WarError, WarResult};
pub use header::{WAR_HEADER_SIZE, WAR_MAGIC, WarHeader};
